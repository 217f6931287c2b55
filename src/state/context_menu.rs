//! Context menu controller.
//!
//! At most one menu is open at a time. An open menu is closed by exactly one
//! of: an item click (which yields the item's action) or a click anywhere
//! else (which yields nothing). Both paths take the menu out of the
//! controller, so no menu state outlives the click that dismissed it.

use crate::command::Command;
use crate::state::model_tree::NodeId;

/// Action attached to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction {
    Edit,
    Delete,
    Copy,
    Paste,
    Properties,
}

/// One row of a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: &'static str, action: MenuAction },
    Separator,
}

/// What a menu item does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Acts on the node the menu was opened for.
    Node(NodeAction),
    /// Runs a catalogue command.
    Command(Command),
}

/// What the menu was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    TreeNode(NodeId),
    Canvas,
}

impl MenuTarget {
    /// Entries shown for this target.
    pub fn entries(self) -> &'static [MenuEntry] {
        match self {
            MenuTarget::TreeNode(_) => TREE_NODE_MENU,
            MenuTarget::Canvas => CANVAS_MENU,
        }
    }
}

const TREE_NODE_MENU: &[MenuEntry] = &[
    MenuEntry::Item { label: "修改", action: MenuAction::Node(NodeAction::Edit) },
    MenuEntry::Item { label: "删除", action: MenuAction::Node(NodeAction::Delete) },
    MenuEntry::Separator,
    MenuEntry::Item { label: "复制", action: MenuAction::Node(NodeAction::Copy) },
    MenuEntry::Item { label: "粘贴", action: MenuAction::Node(NodeAction::Paste) },
    MenuEntry::Separator,
    MenuEntry::Item { label: "属性", action: MenuAction::Node(NodeAction::Properties) },
];

const CANVAS_MENU: &[MenuEntry] = &[
    MenuEntry::Item { label: "选择", action: MenuAction::Command(Command::SelectionMode) },
    MenuEntry::Item { label: "平移", action: MenuAction::Command(Command::PanMode) },
    MenuEntry::Item { label: "缩放", action: MenuAction::Command(Command::ZoomMode) },
    MenuEntry::Separator,
    MenuEntry::Item { label: "适应视图", action: MenuAction::Command(Command::FitView) },
    MenuEntry::Item { label: "重置视图", action: MenuAction::Command(Command::ResetView) },
];

/// An open menu anchored at a screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenMenu {
    pub target: MenuTarget,
    pub position: [f32; 2],
}

impl OpenMenu {
    pub fn entries(&self) -> &'static [MenuEntry] {
        self.target.entries()
    }
}

/// State of the context menu overlay.
///
/// Responsibilities:
/// - Holding the single open menu
/// - Refusing a second open within the same input event
/// - Resolving clicks into at most one action
#[derive(Debug, Clone, Default)]
pub struct ContextMenuState {
    open: Option<OpenMenu>,
    opened_this_event: bool,
}

impl ContextMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a new input event (one frame in the UI loop).
    pub fn begin_event(&mut self) {
        self.opened_this_event = false;
    }

    pub fn open_menu(&self) -> Option<&OpenMenu> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens a menu for `target`, replacing any open menu.
    ///
    /// The first request of an event wins; a later request for an enclosing
    /// target in the same event is refused and returns `false`.
    pub fn open(&mut self, target: MenuTarget, position: [f32; 2]) -> bool {
        if self.opened_this_event {
            return false;
        }
        self.opened_this_event = true;
        self.open = Some(OpenMenu { target, position });
        log::debug!("context menu opened: {:?}", target);
        true
    }

    /// Handles a click on entry `index` of the open menu.
    ///
    /// The menu is closed whether or not the entry carries an action.
    pub fn click_entry(&mut self, index: usize) -> Option<(MenuTarget, MenuAction)> {
        let menu = self.open.take()?;
        match menu.entries().get(index) {
            Some(MenuEntry::Item { action, .. }) => Some((menu.target, *action)),
            _ => None,
        }
    }

    /// Handles a click outside the open menu.
    pub fn click_outside(&mut self) {
        if self.open.take().is_some() {
            log::debug!("context menu dismissed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_click_dispatches_and_closes() {
        let mut menus = ContextMenuState::new();
        menus.begin_event();
        assert!(menus.open(MenuTarget::Canvas, [10.0, 20.0]));

        let clicked = menus.click_entry(4);
        assert_eq!(clicked, Some((MenuTarget::Canvas, MenuAction::Command(Command::FitView))));
        assert!(!menus.is_open());
        assert_eq!(menus.click_entry(4), None);
    }

    #[test]
    fn test_separator_click_closes_without_action() {
        let mut menus = ContextMenuState::new();
        menus.open(MenuTarget::Canvas, [0.0, 0.0]);
        assert_eq!(CANVAS_MENU[3], MenuEntry::Separator);
        assert_eq!(menus.click_entry(3), None);
        assert!(!menus.is_open());
    }

    #[test]
    fn test_outside_click_closes_without_action() {
        let mut menus = ContextMenuState::new();
        menus.open(MenuTarget::Canvas, [0.0, 0.0]);
        menus.click_outside();
        assert!(!menus.is_open());
    }

    #[test]
    fn test_nested_target_suppresses_enclosing_menu() {
        let mut menus = ContextMenuState::new();
        let node = crate::state::ModelTree::default_project().roots()[0];

        menus.begin_event();
        assert!(menus.open(MenuTarget::TreeNode(node), [5.0, 5.0]));
        assert!(!menus.open(MenuTarget::Canvas, [5.0, 5.0]));
        assert_eq!(menus.open_menu().map(|m| m.target), Some(MenuTarget::TreeNode(node)));

        menus.begin_event();
        assert!(menus.open(MenuTarget::Canvas, [50.0, 50.0]));
        assert_eq!(menus.open_menu().map(|m| m.target), Some(MenuTarget::Canvas));
    }

    #[test]
    fn test_tree_menu_layout() {
        let node = crate::state::ModelTree::default_project().roots()[0];
        let labels: Vec<_> = MenuTarget::TreeNode(node)
            .entries()
            .iter()
            .map(|e| match e {
                MenuEntry::Item { label, .. } => *label,
                MenuEntry::Separator => "-",
            })
            .collect();
        assert_eq!(labels, vec!["修改", "删除", "-", "复制", "粘贴", "-", "属性"]);
    }
}

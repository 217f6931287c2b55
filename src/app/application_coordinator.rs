//! Application-level coordination and workflow management.
//!
//! Handles the workflows that span more than one widget: startup, tree
//! selection feeding the property panel, view tab bookkeeping, context menu
//! actions and the confirmation flow for destructive actions.

use crate::app::AppState;
use crate::command::{keymap, CommandDispatcher, Confirmation, WindowRequest};
use crate::error::ViewTabError;
use crate::state::{MenuAction, MenuTarget, NodeAction, NodeId, PropertyTab, RibbonTab, StatusSlot};

/// Product name shown in the title bar and welcome message.
pub const PRODUCT_TITLE: &str = "CIOES-SP V1.0.0";

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Posting the startup messages
/// - Routing tree clicks to the property panel and status bar
/// - Managing view tab selection, creation and closing
/// - Resolving context menu clicks into node actions or commands
/// - Running or dropping confirmed destructive actions
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Posts the welcome messages and logs the initial tree shape.
    pub fn startup(state: &mut AppState) {
        let stats = state.tree.stats();
        log::info!(
            "model tree: {} nodes ({} foldable, {} leaves, {} expanded)",
            stats.total,
            stats.foldable,
            stats.leaves,
            stats.expanded
        );

        state.messages.info(format!("欢迎使用 {} 海洋管道分析软件", PRODUCT_TITLE));
        state.messages.success("软件界面初始化完成");
    }

    // ===== Model Tree =====

    /// Handles a click on a tree node header.
    ///
    /// Non-leaf nodes toggle and become selected, leaves are only selected.
    /// The selection is mirrored into the property panel and status bar.
    pub fn handle_tree_click(state: &mut AppState, node: NodeId) {
        if let Some(click) = state.tree.click(node) {
            state.properties.set_node_name(&click.label);
            state.messages.info(format!("属性面板已更新: {}", click.label));
            state.status.set(StatusSlot::Selection, click.label);
        }
    }

    // ===== Tabs =====

    pub fn select_ribbon_tab(state: &mut AppState, tab: RibbonTab) {
        state.ribbon.select(tab);
    }

    pub fn select_property_tab(state: &mut AppState, tab: PropertyTab) {
        state.properties.select_tab(tab);
    }

    /// Activates a view tab and shows its name in the status bar.
    pub fn select_view_tab(state: &mut AppState, id: u64) {
        match state.view_tabs.select(id) {
            Ok(title) => {
                let title = title.to_string();
                state.status.set(StatusSlot::View, title);
            }
            Err(e) => log::warn!("select view tab: {}", e),
        }
    }

    /// Closes a view tab. Closing the last one is refused with a warning.
    pub fn close_view_tab(state: &mut AppState, id: u64) {
        match state.view_tabs.close(id) {
            Ok(title) => {
                state.messages.info(format!("已关闭视图: {}", title));
                if let Some(active) = state.view_tabs.active() {
                    state.status.set(StatusSlot::View, active.title().to_string());
                }
            }
            Err(ViewTabError::LastTab) => state.messages.warning("至少需要保留一个视图"),
            Err(e) => log::warn!("close view tab: {}", e),
        }
    }

    // ===== Visibility Layers =====

    pub fn toggle_visibility(state: &mut AppState, index: usize) {
        if let Some((name, shown)) = state.visibility.toggle(index) {
            let text = if shown {
                format!("\"{}\" 已显示", name)
            } else {
                format!("\"{}\" 已隐藏", name)
            };
            state.messages.info(text);
        }
    }

    pub fn select_visibility(state: &mut AppState, index: usize) {
        if let Some(name) = state.visibility.select(index) {
            let text = format!("选中显隐项: {}", name);
            state.messages.info(text);
        }
    }

    // ===== Property Panel =====

    /// Reports a committed edit of property field `index`.
    pub fn commit_property(state: &mut AppState, index: usize) {
        if let Some(field) = state.properties.fields().get(index) {
            let text = format!("属性已修改: {}", field.value);
            state.messages.info(text);
        }
    }

    // ===== Context Menus =====

    /// Opens the node menu. Returns false if a menu was already opened by
    /// this input event.
    pub fn open_tree_menu(state: &mut AppState, node: NodeId, position: [f32; 2]) -> bool {
        state.tree.contains(node) && state.context_menu.open(MenuTarget::TreeNode(node), position)
    }

    pub fn open_canvas_menu(state: &mut AppState, position: [f32; 2]) -> bool {
        state.context_menu.open(MenuTarget::Canvas, position)
    }

    /// Handles a click on entry `index` of the open menu. The menu closes
    /// either way.
    pub fn click_menu_entry(state: &mut AppState, index: usize) {
        match state.context_menu.click_entry(index) {
            Some((MenuTarget::TreeNode(node), MenuAction::Node(action))) => {
                Self::run_node_action(state, node, action)
            }
            Some((_, MenuAction::Command(command))) => CommandDispatcher::dispatch(state, command),
            Some((MenuTarget::Canvas, MenuAction::Node(action))) => {
                log::warn!("node action {:?} on canvas menu ignored", action)
            }
            None => {}
        }
    }

    /// Runs a tree node menu action.
    pub fn run_node_action(state: &mut AppState, node: NodeId, action: NodeAction) {
        let Some(label) = state.tree.label(node).map(str::to_string) else {
            log::warn!("node action {:?} on unknown node {:?}", action, node);
            return;
        };

        match action {
            NodeAction::Edit => state.messages.info(format!("编辑节点: {}", label)),
            NodeAction::Delete => {
                state.replace_confirmation(Confirmation::DeleteNode(node));
            }
            NodeAction::Copy => state.messages.info(format!("复制节点: {}", label)),
            NodeAction::Paste => state.messages.info(format!("粘贴到节点: {}", label)),
            NodeAction::Properties => state.messages.info(format!("显示节点属性: {}", label)),
        }
    }

    // ===== Confirmation =====

    /// Runs the pending destructive action.
    pub fn confirm(state: &mut AppState) {
        let Some(confirmation) = state.take_confirmation() else {
            return;
        };
        log::info!("confirmed: {:?}", confirmation);

        match confirmation {
            Confirmation::CloseProject => state.messages.info("项目已关闭"),
            Confirmation::CloseWindow => state.request_window(WindowRequest::Close),
            Confirmation::DeleteNode(node) => {
                if let Some(label) = state.tree.label(node) {
                    let text = format!("删除节点: {}", label);
                    state.messages.warning(text);
                }
            }
        }
    }

    /// Drops the pending action without changing anything.
    pub fn decline(state: &mut AppState) {
        if let Some(confirmation) = state.take_confirmation() {
            log::debug!("declined: {:?}", confirmation);
        }
    }

    // ===== Keyboard =====

    /// Handles a key press. Returns true if it was bound to a command.
    pub fn handle_key(state: &mut AppState, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        match keymap::command_for_key(key, modifiers) {
            Some(command) => {
                CommandDispatcher::dispatch(state, command);
                true
            }
            None => false,
        }
    }
}

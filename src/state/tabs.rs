//! Mutually exclusive tab selection.
//!
//! Ribbon tabs and property tabs are fixed sets where exactly one member is
//! active. View tabs can be added and closed, down to a floor of one.

use crate::error::ViewTabError;

/// A fixed set of tabs with exactly one active member.
pub trait TabKind: Copy + Eq + std::fmt::Debug + 'static {
    /// Every tab, in display order. The first one is active initially.
    const ALL: &'static [Self];

    fn title(self) -> &'static str;
}

/// Active selection over a [`TabKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet<T: TabKind> {
    active: T,
}

impl<T: TabKind> Default for TabSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TabKind> TabSet<T> {
    /// Creates the set with the first tab active.
    pub fn new() -> Self {
        Self { active: T::ALL[0] }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Activates `tab`, returning the tab that was active before.
    pub fn select(&mut self, tab: T) -> T {
        log::debug!("tab switch: {:?} -> {:?}", self.active, tab);
        std::mem::replace(&mut self.active, tab)
    }

    /// `(tab, is_active)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        T::ALL.iter().map(move |tab| (*tab, *tab == self.active))
    }
}

/// Top toolbar tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RibbonTab {
    File,
    Home,
    ViewAngle,
    Display,
    Select,
    Insert,
    Load,
    Analysis,
    Results,
    Tools,
    SupportOptimization,
}

impl TabKind for RibbonTab {
    const ALL: &'static [Self] = &[
        RibbonTab::File,
        RibbonTab::Home,
        RibbonTab::ViewAngle,
        RibbonTab::Display,
        RibbonTab::Select,
        RibbonTab::Insert,
        RibbonTab::Load,
        RibbonTab::Analysis,
        RibbonTab::Results,
        RibbonTab::Tools,
        RibbonTab::SupportOptimization,
    ];

    fn title(self) -> &'static str {
        match self {
            RibbonTab::File => "文件",
            RibbonTab::Home => "主页",
            RibbonTab::ViewAngle => "视角",
            RibbonTab::Display => "显示",
            RibbonTab::Select => "选择",
            RibbonTab::Insert => "插入",
            RibbonTab::Load => "荷载",
            RibbonTab::Analysis => "分析",
            RibbonTab::Results => "结果",
            RibbonTab::Tools => "工具",
            RibbonTab::SupportOptimization => "支架优化",
        }
    }
}

/// Tabs of the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyTab {
    Geometry,
    Material,
    Load,
}

impl TabKind for PropertyTab {
    const ALL: &'static [Self] = &[PropertyTab::Geometry, PropertyTab::Material, PropertyTab::Load];

    fn title(self) -> &'static str {
        match self {
            PropertyTab::Geometry => "几何",
            PropertyTab::Material => "材料",
            PropertyTab::Load => "荷载",
        }
    }
}

/// Title given to tabs created with [`ViewTabs::add`].
pub const NEW_VIEW_TITLE: &str = "新视图";

/// One viewport/document tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTab {
    id: u64,
    title: String,
}

impl ViewTab {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The open view tabs; never fewer than one.
#[derive(Debug, Clone)]
pub struct ViewTabs {
    tabs: Vec<ViewTab>,
    active: u64,
    next_id: u64,
}

impl Default for ViewTabs {
    fn default() -> Self {
        Self::new("Default")
    }
}

impl ViewTabs {
    /// Creates the set with a single active tab.
    pub fn new(first_title: impl Into<String>) -> Self {
        Self {
            tabs: vec![ViewTab {
                id: 0,
                title: first_title.into(),
            }],
            active: 0,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[ViewTab] {
        &self.tabs
    }

    pub fn active_id(&self) -> u64 {
        self.active
    }

    pub fn active(&self) -> Option<&ViewTab> {
        self.get(self.active)
    }

    pub fn get(&self, id: u64) -> Option<&ViewTab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Activates the tab with `id`, returning its title.
    pub fn select(&mut self, id: u64) -> Result<&str, ViewTabError> {
        let index = self.index_of(id)?;
        self.active = id;
        Ok(&self.tabs[index].title)
    }

    /// Appends a new tab and activates it.
    pub fn add(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(ViewTab {
            id,
            title: NEW_VIEW_TITLE.to_string(),
        });
        self.active = id;
        id
    }

    /// Removes the tab with `id`, returning its title.
    ///
    /// Closing the only remaining tab is refused. Closing the active tab
    /// activates its left neighbour (or the new first tab).
    pub fn close(&mut self, id: u64) -> Result<String, ViewTabError> {
        let index = self.index_of(id)?;
        if self.tabs.len() <= 1 {
            return Err(ViewTabError::LastTab);
        }

        let removed = self.tabs.remove(index);
        if self.active == id {
            let fallback = index.saturating_sub(1).min(self.tabs.len() - 1);
            self.active = self.tabs[fallback].id;
        }
        Ok(removed.title)
    }

    fn index_of(&self, id: u64) -> Result<usize, ViewTabError> {
        self.tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or(ViewTabError::UnknownTab(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_wins_by_default() {
        let ribbon: TabSet<RibbonTab> = TabSet::new();
        assert_eq!(ribbon.active(), RibbonTab::File);
        assert_eq!(ribbon.iter().filter(|(_, active)| *active).count(), 1);

        let props: TabSet<PropertyTab> = TabSet::default();
        assert_eq!(props.active(), PropertyTab::Geometry);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut ribbon: TabSet<RibbonTab> = TabSet::new();
        let previous = ribbon.select(RibbonTab::Insert);
        assert_eq!(previous, RibbonTab::File);
        assert!(ribbon.is_active(RibbonTab::Insert));
        assert!(!ribbon.is_active(RibbonTab::File));
        assert_eq!(ribbon.iter().filter(|(_, active)| *active).count(), 1);
    }

    #[test]
    fn test_close_last_view_tab_refused() {
        let mut views = ViewTabs::default();
        let id = views.active_id();
        assert_eq!(views.close(id), Err(ViewTabError::LastTab));
        assert_eq!(views.len(), 1);
    }

    #[test]
    fn test_add_activates_new_tab() {
        let mut views = ViewTabs::default();
        let id = views.add();
        assert_eq!(views.len(), 2);
        assert_eq!(views.active_id(), id);
        assert_eq!(views.active().map(ViewTab::title), Some(NEW_VIEW_TITLE));
    }

    #[test]
    fn test_close_active_falls_back_to_neighbour() {
        let mut views = ViewTabs::default();
        let first = views.active_id();
        let second = views.add();
        let third = views.add();

        views.select(second).unwrap();
        assert_eq!(views.close(second), Ok(NEW_VIEW_TITLE.to_string()));
        assert_eq!(views.active_id(), first);

        assert_eq!(views.close(first), Ok("Default".to_string()));
        assert_eq!(views.active_id(), third);
        assert_eq!(views.close(third), Err(ViewTabError::LastTab));
    }

    #[test]
    fn test_unknown_view_tab() {
        let mut views = ViewTabs::default();
        assert_eq!(views.close(42), Err(ViewTabError::UnknownTab(42)));
        assert!(views.select(42).is_err());
    }
}

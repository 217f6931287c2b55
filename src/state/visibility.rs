//! Display layer visibility list ("显隐控制").

/// One display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityItem {
    name: String,
    shown: bool,
}

impl VisibilityItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

/// Layer list with a shown flag per layer and a single selected layer.
#[derive(Debug, Clone)]
pub struct VisibilityState {
    items: Vec<VisibilityItem>,
    selected: Option<usize>,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::with_layers(&["管道", "管点", "组件", "支架", "荷载", "土壤", "网格", "坐标轴"])
    }
}

impl VisibilityState {
    /// Creates the list with every layer shown.
    pub fn with_layers(names: &[&str]) -> Self {
        Self {
            items: names
                .iter()
                .map(|name| VisibilityItem {
                    name: name.to_string(),
                    shown: true,
                })
                .collect(),
            selected: None,
        }
    }

    pub fn items(&self) -> &[VisibilityItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Flips the shown flag of layer `index`, returning its name and new state.
    pub fn toggle(&mut self, index: usize) -> Option<(&str, bool)> {
        let item = self.items.get_mut(index)?;
        item.shown = !item.shown;
        Some((&item.name, item.shown))
    }

    /// Makes layer `index` the only selected layer, returning its name.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let item = self.items.get(index)?;
        self.selected = Some(index);
        Some(&item.name)
    }

    pub fn show_all(&mut self) {
        self.items.iter_mut().for_each(|item| item.shown = true);
    }

    pub fn hide_all(&mut self) {
        self.items.iter_mut().for_each(|item| item.shown = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_bulk() {
        let mut layers = VisibilityState::with_layers(&["管道", "支架"]);
        assert_eq!(layers.toggle(1), Some(("支架", false)));
        assert_eq!(layers.toggle(1), Some(("支架", true)));
        assert_eq!(layers.toggle(5), None);

        layers.hide_all();
        assert!(layers.items().iter().all(|i| !i.is_shown()));
        layers.show_all();
        assert!(layers.items().iter().all(|i| i.is_shown()));
    }

    #[test]
    fn test_single_selection() {
        let mut layers = VisibilityState::default();
        assert_eq!(layers.select(0), Some("管道"));
        assert_eq!(layers.select(3), Some("支架"));
        assert_eq!(layers.selected(), Some(3));
        assert_eq!(layers.select(99), None);
        assert_eq!(layers.selected(), Some(3));
    }
}

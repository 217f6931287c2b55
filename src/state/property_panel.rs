//! Property panel state.

use crate::state::tabs::{PropertyTab, TabSet};

/// An editable property row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyField {
    pub label: &'static str,
    pub value: String,
}

/// State of the property panel.
///
/// Responsibilities:
/// - Tracking the active property tab
/// - Mirroring the selected tree node's name
/// - Holding the editable field values
#[derive(Debug, Clone)]
pub struct PropertyPanelState {
    tabs: TabSet<PropertyTab>,
    fields: Vec<PropertyField>,
    pinned: bool,
}

impl Default for PropertyPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyPanelState {
    pub fn new() -> Self {
        let field = |label, value: &str| PropertyField {
            label,
            value: value.to_string(),
        };
        Self {
            tabs: TabSet::new(),
            fields: vec![
                field("名称", ""),
                field("外径 (mm)", "323.9"),
                field("壁厚 (mm)", "12.7"),
                field("材料", "API 5L X65"),
                field("设计压力 (MPa)", "10.0"),
                field("设计温度 (°C)", "80"),
            ],
            pinned: false,
        }
    }

    pub fn tabs(&self) -> &TabSet<PropertyTab> {
        &self.tabs
    }

    /// Activates a property tab.
    pub fn select_tab(&mut self, tab: PropertyTab) {
        self.tabs.select(tab);
    }

    pub fn fields(&self) -> &[PropertyField] {
        &self.fields
    }

    /// Mutable field values (for UI text edits).
    pub fn fields_mut(&mut self) -> &mut [PropertyField] {
        &mut self.fields
    }

    /// Name shown for the current selection.
    pub fn node_name(&self) -> &str {
        self.fields.first().map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn set_node_name(&mut self, name: &str) {
        if let Some(field) = self.fields.first_mut() {
            field.value = name.to_string();
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Flips the pin, returning the new state.
    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_mirrors_first_field() {
        let mut panel = PropertyPanelState::new();
        assert_eq!(panel.node_name(), "");
        panel.set_node_name("管段 10-20");
        assert_eq!(panel.node_name(), "管段 10-20");
        assert_eq!(panel.fields()[0].label, "名称");
    }

    #[test]
    fn test_tab_and_pin() {
        let mut panel = PropertyPanelState::new();
        assert_eq!(panel.tabs().active(), PropertyTab::Geometry);
        panel.select_tab(PropertyTab::Load);
        assert_eq!(panel.tabs().active(), PropertyTab::Load);
        assert!(panel.toggle_pin());
        assert!(!panel.toggle_pin());
    }
}

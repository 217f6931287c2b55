//! Status bar slots.
//!
//! The status bar is a fixed set of labelled slots. Widgets push values into
//! a slot by key; nothing else on the bar changes.

use std::collections::HashMap;

/// Fixed status bar slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusSlot {
    Selection,
    View,
    Mode,
    Axes,
    Grid,
}

impl StatusSlot {
    pub const ALL: [StatusSlot; 5] = [
        StatusSlot::Selection,
        StatusSlot::View,
        StatusSlot::Mode,
        StatusSlot::Axes,
        StatusSlot::Grid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusSlot::Selection => "选中",
            StatusSlot::View => "视图",
            StatusSlot::Mode => "模式",
            StatusSlot::Axes => "坐标轴",
            StatusSlot::Grid => "网格",
        }
    }

    fn initial_value(self) -> &'static str {
        match self {
            StatusSlot::Selection => "无",
            StatusSlot::View => "Default",
            StatusSlot::Mode => "选择",
            StatusSlot::Axes => "显示",
            StatusSlot::Grid => "开启",
        }
    }
}

/// Current value of every status slot.
#[derive(Debug, Clone)]
pub struct StatusBar {
    values: HashMap<StatusSlot, String>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        let values = StatusSlot::ALL
            .iter()
            .map(|slot| (*slot, slot.initial_value().to_string()))
            .collect();
        Self { values }
    }

    /// Replaces the value shown in `slot`.
    pub fn set(&mut self, slot: StatusSlot, value: impl Into<String>) {
        self.values.insert(slot, value.into());
    }

    pub fn get(&self, slot: StatusSlot) -> &str {
        self.values.get(&slot).map(String::as_str).unwrap_or("")
    }

    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        StatusSlot::ALL.iter().map(|slot| (slot.label(), self.get(*slot)))
    }
}

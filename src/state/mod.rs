//! State management modules for the CIOES-SP shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Message log (bounded, most-recent-first)
//! - Status bar slots
//! - Model tree (expansion, single selection)
//! - Layout state (panel sizes, resize gestures)
//! - Interaction state (the active drag)
//! - Tabs (ribbon, property and view tabs)
//! - Context menu, visibility layers, viewport and property panel
//! - Theme state

mod message_log;
mod status;
mod model_tree;
mod layout_state;
mod interaction;
mod tabs;
mod context_menu;
mod visibility;
mod viewport;
mod property_panel;
mod theme_state;

pub use message_log::{Message, MessageKind, MessageLog, MESSAGE_CAPACITY, RENDERED_MESSAGES};
pub use status::{StatusBar, StatusSlot};
pub use model_tree::{ModelTree, NodeId, TreeClick, TreeStats, VisibleRow};
pub use layout_state::{
    format_px, parse_px, Axis, LayoutState, PanelRole, ResizeGesture, ResizeHandle, MIN_SECTION_HEIGHT,
};
pub use interaction::InteractionState;
pub use tabs::{PropertyTab, RibbonTab, TabKind, TabSet, ViewTab, ViewTabs, NEW_VIEW_TITLE};
pub use context_menu::{ContextMenuState, MenuAction, MenuEntry, MenuTarget, NodeAction, OpenMenu};
pub use visibility::{VisibilityItem, VisibilityState};
pub use viewport::{DisplayMode, InteractionMode, ViewOrientation, ViewportMode, ViewportState};
pub use property_panel::{PropertyField, PropertyPanelState};
pub use theme_state::ThemeState;

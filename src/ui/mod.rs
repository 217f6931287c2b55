//! UI panel rendering subsystem
//!
//! This module contains all panel rendering for the CIOES-SP shell:
//! - Header (title bar with quick access and window controls, ribbon)
//! - Model tree and visibility sections (left panel)
//! - Property and message sections (right panel)
//! - View tabs and the viewport canvas (centre)
//! - Status bar
//! - Overlays (context menu, confirmation dialog)
//! - Resize handles
//! - Panel manager (panel orchestration and layout)
//! - Input handling (keyboard shortcuts)
//!
//! Panels never mutate state on their own, except for in-place text edits.
//! They report what the user did and the coordinators act on it.

pub mod header;
pub mod model_tree_panel;
pub mod visibility_panel;
pub mod property_panel;
pub mod message_panel;
pub mod view_tabs;
pub mod viewport_canvas;
pub mod status_bar;
pub mod context_menu;
pub mod confirm_dialog;
pub mod resize_handle;
pub mod panel_manager;
pub mod input;

//! Input handling subsystem for UI interactions.
//!
//! Pointer input is handled by the panels themselves; this module only
//! collects keyboard shortcuts.

pub mod keyboard;

//! Panel geometry persistence.
//!
//! Panel sizes live in the durable store under their role's key as CSS
//! lengths (`"320px"`). They are read once at startup and written at the end
//! of every completed drag gesture.

use crate::app::AppState;
use crate::state::{format_px, parse_px, PanelRole, ResizeHandle};

/// Coordinates panel resizing and its persistence.
pub struct LayoutCoordinator;

impl LayoutCoordinator {
    /// Restores persisted panel sizes.
    ///
    /// Missing or empty entries keep the built-in default. Unreadable entries
    /// are logged and skipped. Restored sizes are clamped to the role bounds.
    pub fn restore_from_storage(state: &mut AppState, storage: Option<&dyn eframe::Storage>) {
        let Some(storage) = storage else {
            return;
        };

        for role in PanelRole::ALL {
            let Some(text) = storage.get_string(role.storage_key()) else {
                continue;
            };
            if text.trim().is_empty() {
                continue;
            }
            match parse_px(&text) {
                Ok(size) => {
                    state.layout.restore(role, size);
                    log::debug!("restored {} = {}", role.storage_key(), text);
                }
                Err(e) => log::warn!("ignoring stored {}: {}", role.storage_key(), e),
            }
        }
    }

    /// Writes sizes of roles touched by finished gestures.
    ///
    /// Returns the number of entries written.
    pub fn persist_pending(state: &mut AppState, storage: &mut dyn eframe::Storage) -> usize {
        let mut written = 0;
        for role in state.layout.take_pending_persist() {
            if let Some(size) = state.layout.size(role) {
                storage.set_string(role.storage_key(), format_px(size));
                written += 1;
            }
        }
        if written > 0 {
            storage.flush();
        }
        written
    }

    /// Clears every persisted size and returns the layout to its defaults.
    pub fn reset_layout(state: &mut AppState, storage: Option<&mut dyn eframe::Storage>) {
        state.layout.reset();
        state.interaction.reset();
        if let Some(storage) = storage {
            for role in PanelRole::ALL {
                storage.set_string(role.storage_key(), String::new());
            }
            storage.flush();
        }
        log::info!("panel layout reset");
    }

    // ===== Drag Gesture =====

    /// Pointer pressed on a resize handle.
    pub fn begin_drag(
        state: &mut AppState,
        handle: ResizeHandle,
        pointer: f32,
        current_size: f32,
        adjacent_size: Option<f32>,
    ) -> bool {
        state
            .interaction
            .begin_resize(&mut state.layout, handle, pointer, current_size, adjacent_size)
    }

    /// Pointer moved while a handle is held.
    pub fn drag(state: &mut AppState, pointer: f32) {
        state.interaction.drag_resize(&mut state.layout, pointer);
    }

    /// Pointer released. The touched roles are queued for persistence.
    pub fn end_drag(state: &mut AppState) {
        let touched = state.interaction.end_resize(&mut state.layout);
        if !touched.is_empty() {
            log::debug!("resize committed: {:?}", touched);
        }
    }
}

//! Drag handles for panel resizing
//!
//! A handle only reports pointer positions along its axis. The resize math
//! and clamping live in the layout state.

use eframe::egui;
use cioes::state::{Axis, ResizeHandle};
use cioes::ThemeColors;

/// Thickness of a handle strip in points.
pub const HANDLE_THICKNESS: f32 = 6.0;

/// Phase of a drag on a resize handle
pub enum ResizeInteraction {
    /// Pointer pressed on the handle
    Started {
        handle: ResizeHandle,
        pointer: f32,
        current_size: f32,
        adjacent_size: Option<f32>,
    },
    /// Pointer moved while held
    Dragged(f32),
    /// Pointer released
    Released,
}

/// Renders a resize handle over `rect` and reports the drag phase.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `rect` - Screen area of the handle strip
/// * `handle` - Which panel role the handle resizes
/// * `current_size` - Rendered size of that role
/// * `adjacent_size` - Rendered size of the paired section, if any
/// * `colors` - Current theme palette
pub fn render_resize_handle(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    handle: ResizeHandle,
    current_size: f32,
    adjacent_size: Option<f32>,
    colors: &ThemeColors,
) -> Option<ResizeInteraction> {
    let id = ui.id().with(("resize_handle", handle.role));
    let response = ui.interact(rect, id, egui::Sense::drag());

    let along_axis = |pos: egui::Pos2| match handle.axis {
        Axis::Horizontal => pos.x,
        Axis::Vertical => pos.y,
    };

    let interaction = if response.drag_started() {
        ui.input(|i| i.pointer.press_origin())
            .map(along_axis)
            .map(|pointer| ResizeInteraction::Started {
                handle,
                pointer,
                current_size,
                adjacent_size,
            })
    } else if response.dragged() {
        response.interact_pointer_pos().map(along_axis).map(ResizeInteraction::Dragged)
    } else if response.drag_stopped() {
        Some(ResizeInteraction::Released)
    } else {
        None
    };

    // Visual feedback
    if response.hovered() || response.dragged() {
        ui.ctx().set_cursor_icon(match handle.axis {
            Axis::Horizontal => egui::CursorIcon::ResizeHorizontal,
            Axis::Vertical => egui::CursorIcon::ResizeVertical,
        });
        ui.painter().rect_filled(rect.shrink(1.0), 0.0, colors.resize_handle);
    } else {
        ui.painter().rect_filled(rect.shrink(2.0), 0.0, colors.border.gamma_multiply(0.5));
    }

    interaction
}

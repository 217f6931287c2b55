//! Pointer interaction state.
//!
//! This module tracks the one gesture that spans several input events: a
//! drag on a panel resize handle.

use crate::state::layout_state::{LayoutState, PanelRole, ResizeGesture, ResizeHandle};

/// State related to ongoing pointer interactions.
///
/// Responsibilities:
/// - Holding the active resize gesture, if any
/// - Guaranteeing a gesture is finished before another starts
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    resize: Option<ResizeGesture>,
}

impl InteractionState {
    /// Creates a new interaction state with no active interactions.
    pub fn new() -> Self {
        Self { resize: None }
    }

    /// Returns true if a resize drag is in progress.
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Handle being dragged, if any.
    pub fn resizing_handle(&self) -> Option<ResizeHandle> {
        self.resize.as_ref().map(ResizeGesture::handle)
    }

    /// Starts a resize drag. A gesture still active from a lost pointer-up is
    /// finished first.
    pub fn begin_resize(
        &mut self,
        layout: &mut LayoutState,
        handle: ResizeHandle,
        pointer: f32,
        current_size: f32,
        adjacent_size: Option<f32>,
    ) -> bool {
        self.end_resize(layout);
        self.resize = layout.begin_resize(handle, pointer, current_size, adjacent_size);
        self.resize.is_some()
    }

    /// Applies pointer movement to the active gesture.
    pub fn drag_resize(&self, layout: &mut LayoutState, pointer: f32) {
        if let Some(gesture) = &self.resize {
            gesture.update(layout, pointer);
        }
    }

    /// Ends the active gesture, returning the roles queued for persistence.
    pub fn end_resize(&mut self, layout: &mut LayoutState) -> Vec<PanelRole> {
        self.resize
            .take()
            .map(|gesture| gesture.finish(layout))
            .unwrap_or_default()
    }

    /// Drops any gesture without persisting it.
    pub fn reset(&mut self) {
        self.resize = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_lifecycle() {
        let mut layout = LayoutState::new();
        let mut interaction = InteractionState::new();

        assert!(interaction.begin_resize(&mut layout, ResizeHandle::LEFT_PANEL, 100.0, 280.0, None));
        interaction.drag_resize(&mut layout, 150.0);
        assert_eq!(layout.size(PanelRole::LeftPanel), Some(330.0));

        assert_eq!(interaction.end_resize(&mut layout), vec![PanelRole::LeftPanel]);
        assert!(!interaction.is_resizing());

        // Moves after pointer-up no longer reach the layout.
        interaction.drag_resize(&mut layout, 400.0);
        assert_eq!(layout.size(PanelRole::LeftPanel), Some(330.0));
        assert!(interaction.end_resize(&mut layout).is_empty());
    }

    #[test]
    fn test_new_gesture_finishes_previous() {
        let mut layout = LayoutState::new();
        let mut interaction = InteractionState::new();

        interaction.begin_resize(&mut layout, ResizeHandle::LEFT_PANEL, 0.0, 280.0, None);
        interaction.drag_resize(&mut layout, 20.0);
        interaction.begin_resize(&mut layout, ResizeHandle::RIGHT_PANEL, 0.0, 300.0, None);

        assert_eq!(interaction.resizing_handle(), Some(ResizeHandle::RIGHT_PANEL));
        assert_eq!(layout.take_pending_persist(), vec![PanelRole::LeftPanel]);
    }

    #[test]
    fn test_absent_panel_does_not_start() {
        let mut layout = LayoutState::with_roles(&[PanelRole::LeftPanel]);
        let mut interaction = InteractionState::new();
        assert!(!interaction.begin_resize(&mut layout, ResizeHandle::MESSAGE_SECTION, 0.0, 200.0, Some(200.0)));
        assert!(!interaction.is_resizing());
    }
}

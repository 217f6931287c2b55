//! Panel layout state and drag-to-resize gestures.
//!
//! Side panels resize horizontally and are clamped to per-role bounds.
//! Stacked sections resize vertically in pairs: a drag moves height from one
//! section to its neighbour while the pair's combined height stays constant.
//! Sizes are persisted per role as CSS-style lengths (`"320px"`).

use crate::error::LengthError;
use std::collections::{BTreeSet, HashMap};

/// Minimum height of a stacked section.
pub const MIN_SECTION_HEIGHT: f32 = 100.0;

/// Resize axis of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width changes; pointer x drives the gesture.
    Horizontal,
    /// Height changes; pointer y drives the gesture.
    Vertical,
}

/// Identity of a resizable region, also its persistence key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelRole {
    LeftPanel,
    RightPanel,
    ModelTree,
    VisibilityControl,
    PropertyPanel,
    MessagePanel,
}

impl PanelRole {
    pub const ALL: [PanelRole; 6] = [
        PanelRole::LeftPanel,
        PanelRole::RightPanel,
        PanelRole::ModelTree,
        PanelRole::VisibilityControl,
        PanelRole::PropertyPanel,
        PanelRole::MessagePanel,
    ];

    /// Key under which the size is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            PanelRole::LeftPanel => "leftPanelWidth",
            PanelRole::RightPanel => "rightPanelWidth",
            PanelRole::ModelTree => "modelTreeHeight",
            PanelRole::VisibilityControl => "visibilityControlHeight",
            PanelRole::PropertyPanel => "propertyPanelHeight",
            PanelRole::MessagePanel => "messagePanelHeight",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            PanelRole::LeftPanel | PanelRole::RightPanel => Axis::Horizontal,
            _ => Axis::Vertical,
        }
    }

    /// The section sharing this section's resize boundary.
    pub fn adjacent(self) -> Option<PanelRole> {
        match self {
            PanelRole::VisibilityControl => Some(PanelRole::ModelTree),
            PanelRole::ModelTree => Some(PanelRole::VisibilityControl),
            PanelRole::MessagePanel => Some(PanelRole::PropertyPanel),
            PanelRole::PropertyPanel => Some(PanelRole::MessagePanel),
            _ => None,
        }
    }

    /// `(min, max)` size along the role's axis.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            PanelRole::LeftPanel => (200.0, 500.0),
            PanelRole::RightPanel => (250.0, 600.0),
            _ => (MIN_SECTION_HEIGHT, f32::INFINITY),
        }
    }

    /// Clamps `size` to this role's bounds.
    pub fn clamp(self, size: f32) -> f32 {
        let (min, max) = self.bounds();
        size.clamp(min, max)
    }
}

/// A drag affordance wired to one panel role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeHandle {
    pub role: PanelRole,
    pub axis: Axis,
}

impl ResizeHandle {
    pub const LEFT_PANEL: ResizeHandle = ResizeHandle { role: PanelRole::LeftPanel, axis: Axis::Horizontal };
    pub const RIGHT_PANEL: ResizeHandle = ResizeHandle { role: PanelRole::RightPanel, axis: Axis::Horizontal };
    pub const VISIBILITY_SECTION: ResizeHandle = ResizeHandle { role: PanelRole::VisibilityControl, axis: Axis::Vertical };
    pub const MESSAGE_SECTION: ResizeHandle = ResizeHandle { role: PanelRole::MessagePanel, axis: Axis::Vertical };
}

/// Formats a size as a CSS pixel length.
pub fn format_px(size: f32) -> String {
    format!("{}px", size)
}

/// Parses a CSS pixel length such as `"320px"`.
pub fn parse_px(text: &str) -> Result<f32, LengthError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Empty);
    }
    let number = trimmed
        .strip_suffix("px")
        .ok_or_else(|| LengthError::NotPixels(text.to_string()))?;
    let value: f32 = number
        .trim()
        .parse()
        .map_err(|_| LengthError::NotPixels(text.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(LengthError::OutOfRange(text.to_string()));
    }
    Ok(value)
}

/// State related to panel geometry.
///
/// Responsibilities:
/// - Holding the explicit size of each present panel role
///   (`None` means the built-in default layout applies)
/// - Starting resize gestures for present roles only
/// - Tracking roles whose size must be written to the durable store
#[derive(Debug, Clone)]
pub struct LayoutState {
    present: BTreeSet<PanelRole>,
    sizes: HashMap<PanelRole, f32>,
    pending_persist: BTreeSet<PanelRole>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a layout where every panel role is present.
    pub fn new() -> Self {
        Self::with_roles(&PanelRole::ALL)
    }

    /// Creates a layout containing only `roles`.
    pub fn with_roles(roles: &[PanelRole]) -> Self {
        Self {
            present: roles.iter().copied().collect(),
            sizes: HashMap::new(),
            pending_persist: BTreeSet::new(),
        }
    }

    // ===== Layout Queries =====

    pub fn is_present(&self, role: PanelRole) -> bool {
        self.present.contains(&role)
    }

    /// Explicit size of `role`, if one has been set or restored.
    pub fn size(&self, role: PanelRole) -> Option<f32> {
        self.sizes.get(&role).copied()
    }

    /// Size of `role`, falling back to `default`.
    pub fn size_or(&self, role: PanelRole, default: f32) -> f32 {
        self.size(role).unwrap_or(default)
    }

    /// Heights for a stacked section pair filling `available` pixels.
    ///
    /// Explicit sizes win; a missing size takes the remaining space; with no
    /// sizes at all `upper_ratio` of the space goes to `upper`. A pair larger
    /// than `available` is scaled down to fit. Stored sizes are left as is.
    pub fn section_heights(&self, upper: PanelRole, lower: PanelRole, available: f32, upper_ratio: f32) -> (f32, f32) {
        let (u, l) = match (self.size(upper), self.size(lower)) {
            (Some(u), Some(l)) => (u, l),
            (Some(u), None) => (u, (available - u).max(MIN_SECTION_HEIGHT)),
            (None, Some(l)) => ((available - l).max(MIN_SECTION_HEIGHT), l),
            (None, None) => {
                let u = (available * upper_ratio).max(MIN_SECTION_HEIGHT);
                (u, (available - u).max(MIN_SECTION_HEIGHT))
            }
        };
        fit_pair(u, l, available)
    }

    // ===== Mutations =====

    /// Applies a size to a present role, clamped to its bounds.
    pub fn set_size(&mut self, role: PanelRole, size: f32) {
        if self.is_present(role) {
            self.sizes.insert(role, role.clamp(size));
        }
    }

    /// Applies a size restored from the durable store.
    ///
    /// Absent roles are skipped silently.
    pub fn restore(&mut self, role: PanelRole, size: f32) {
        self.set_size(role, size);
    }

    /// Forgets every explicit size.
    pub fn reset(&mut self) {
        self.sizes.clear();
    }

    /// Starts a resize gesture on `handle`.
    ///
    /// `current_size` and `adjacent_size` are the rendered sizes at the start
    /// of the drag. A lone panel's explicit size takes precedence over the
    /// measured one; a section pair always starts from the rendered sizes. Returns `None`
    /// when the handle's panel is not part of this layout.
    pub fn begin_resize(
        &self,
        handle: ResizeHandle,
        pointer: f32,
        current_size: f32,
        adjacent_size: Option<f32>,
    ) -> Option<ResizeGesture> {
        if !self.is_present(handle.role) {
            return None;
        }
        let adjacent = match (handle.axis, handle.role.adjacent()) {
            (Axis::Vertical, Some(role)) if self.is_present(role) => adjacent_size.map(|size| (role, size)),
            _ => None,
        };
        // Section pairs start from what is on screen, which may be a
        // scaled-down rendition of the stored pair.
        let start_size = match adjacent {
            Some(_) => current_size,
            None => self.size_or(handle.role, current_size),
        };

        log::debug!("resize started: {:?} at {}", handle.role, pointer);
        Some(ResizeGesture {
            handle,
            start_pointer: pointer,
            start_size,
            adjacent,
        })
    }

    /// Roles written since the last persist, draining the set.
    pub fn take_pending_persist(&mut self) -> Vec<PanelRole> {
        std::mem::take(&mut self.pending_persist).into_iter().collect()
    }
}

/// Shrinks a section pair to `available`, keeping its ratio and the
/// per-section floor. A pair that already fits is returned unchanged.
fn fit_pair(upper: f32, lower: f32, available: f32) -> (f32, f32) {
    let total = upper + lower;
    if total <= available || available <= 0.0 {
        return (upper, lower);
    }
    let floor = MIN_SECTION_HEIGHT.min(available / 2.0);
    let scaled = (upper * available / total).clamp(floor, available - floor);
    (scaled, available - scaled)
}

/// An in-progress drag on a resize handle.
///
/// The gesture owns everything captured at drag start. It ends by being
/// consumed by [`ResizeGesture::finish`]; no state survives into the next
/// gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    handle: ResizeHandle,
    start_pointer: f32,
    start_size: f32,
    adjacent: Option<(PanelRole, f32)>,
}

impl ResizeGesture {
    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    /// Combined size of the pair captured at drag start.
    pub fn pair_total(&self) -> Option<f32> {
        self.adjacent.map(|(_, size)| self.start_size + size)
    }

    /// Sizes the gesture produces for pointer position `pointer`.
    ///
    /// Returns the target size and, for paired sections, the adjacent size.
    pub fn sizes_at(&self, pointer: f32) -> (f32, Option<f32>) {
        let delta = pointer - self.start_pointer;
        let role = self.handle.role;

        match self.handle.axis {
            Axis::Horizontal => {
                let requested = match role {
                    PanelRole::RightPanel => self.start_size - delta,
                    _ => self.start_size + delta,
                };
                (role.clamp(requested), None)
            }
            Axis::Vertical => match self.adjacent {
                Some(_) => {
                    let total = self.pair_total().unwrap_or(self.start_size);
                    let floor = MIN_SECTION_HEIGHT.min(total / 2.0);
                    // The handle sits above the target section: dragging down
                    // shrinks the target and grows its neighbour.
                    let target = (self.start_size - delta).clamp(floor, total - floor);
                    (target, Some(total - target))
                }
                None => (role.clamp(self.start_size - delta), None),
            },
        }
    }

    /// Applies pointer movement to the layout.
    pub fn update(&self, layout: &mut LayoutState, pointer: f32) {
        let (target, adjacent) = self.sizes_at(pointer);
        layout.sizes.insert(self.handle.role, target);
        if let (Some((role, _)), Some(size)) = (self.adjacent, adjacent) {
            layout.sizes.insert(role, size);
        }
    }

    /// Ends the gesture and queues the touched roles for persistence.
    pub fn finish(self, layout: &mut LayoutState) -> Vec<PanelRole> {
        let mut touched = vec![self.handle.role];
        if let Some((role, _)) = self.adjacent {
            touched.push(role);
        }
        touched.retain(|role| layout.sizes.contains_key(role));
        layout.pending_persist.extend(touched.iter().copied());

        log::debug!("resize finished: {:?}", self.handle.role);
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_px() {
        assert_eq!(parse_px("320px"), Ok(320.0));
        assert_eq!(parse_px(" 412.5px "), Ok(412.5));
        assert_eq!(format_px(320.0), "320px");
        assert_eq!(format_px(412.5), "412.5px");
        assert_eq!(parse_px(""), Err(LengthError::Empty));
        assert!(matches!(parse_px("320"), Err(LengthError::NotPixels(_))));
        assert!(matches!(parse_px("abcpx"), Err(LengthError::NotPixels(_))));
        assert!(matches!(parse_px("-5px"), Err(LengthError::OutOfRange(_))));
    }

    #[test]
    fn test_left_panel_grows_with_positive_delta() {
        let layout = LayoutState::new();
        let gesture = layout.begin_resize(ResizeHandle::LEFT_PANEL, 300.0, 280.0, None).unwrap();
        assert_eq!(gesture.sizes_at(340.0), (320.0, None));
    }

    #[test]
    fn test_right_panel_shrinks_with_positive_delta() {
        let layout = LayoutState::new();
        let gesture = layout.begin_resize(ResizeHandle::RIGHT_PANEL, 1000.0, 320.0, None).unwrap();
        assert_eq!(gesture.sizes_at(1040.0), (280.0, None));
        assert_eq!(gesture.sizes_at(960.0), (360.0, None));
    }

    #[test]
    fn test_horizontal_clamping() {
        let layout = LayoutState::new();
        let gesture = layout.begin_resize(ResizeHandle::LEFT_PANEL, 0.0, 280.0, None).unwrap();
        assert_eq!(gesture.sizes_at(1000.0).0, 500.0);
        assert_eq!(gesture.sizes_at(-1000.0).0, 200.0);
    }

    #[test]
    fn test_vertical_pair_conserves_total() {
        let layout = LayoutState::new();
        let gesture = layout
            .begin_resize(ResizeHandle::VISIBILITY_SECTION, 500.0, 200.0, Some(300.0))
            .unwrap();

        let (target, adjacent) = gesture.sizes_at(550.0);
        assert_eq!(target, 150.0);
        assert_eq!(adjacent, Some(350.0));

        // Target hits its floor; the neighbour absorbs the rest.
        let (target, adjacent) = gesture.sizes_at(900.0);
        assert_eq!(target, MIN_SECTION_HEIGHT);
        assert_eq!(adjacent, Some(400.0));

        // Neighbour hits its floor.
        let (target, adjacent) = gesture.sizes_at(0.0);
        assert_eq!(target, 400.0);
        assert_eq!(adjacent, Some(MIN_SECTION_HEIGHT));
    }

    #[test]
    fn test_small_pair_splits_evenly_at_floor() {
        let layout = LayoutState::new();
        let gesture = layout
            .begin_resize(ResizeHandle::MESSAGE_SECTION, 0.0, 80.0, Some(70.0))
            .unwrap();
        let (target, adjacent) = gesture.sizes_at(500.0);
        assert_eq!(target, 75.0);
        assert_eq!(adjacent, Some(75.0));
    }

    #[test]
    fn test_update_and_finish_queue_persistence() {
        let mut layout = LayoutState::new();
        let gesture = layout
            .begin_resize(ResizeHandle::MESSAGE_SECTION, 400.0, 250.0, Some(350.0))
            .unwrap();
        gesture.update(&mut layout, 450.0);
        assert_eq!(layout.size(PanelRole::MessagePanel), Some(200.0));
        assert_eq!(layout.size(PanelRole::PropertyPanel), Some(400.0));

        let touched = gesture.finish(&mut layout);
        assert_eq!(touched, vec![PanelRole::MessagePanel, PanelRole::PropertyPanel]);
        assert_eq!(layout.take_pending_persist(), vec![PanelRole::PropertyPanel, PanelRole::MessagePanel]);
        assert!(layout.take_pending_persist().is_empty());
    }

    #[test]
    fn test_explicit_size_wins_over_measured() {
        let mut layout = LayoutState::new();
        layout.set_size(PanelRole::LeftPanel, 400.0);
        let gesture = layout.begin_resize(ResizeHandle::LEFT_PANEL, 0.0, 280.0, None).unwrap();
        assert_eq!(gesture.sizes_at(10.0).0, 410.0);
    }

    #[test]
    fn test_absent_role_is_noop() {
        let mut layout = LayoutState::with_roles(&[PanelRole::LeftPanel]);
        assert!(layout.begin_resize(ResizeHandle::RIGHT_PANEL, 0.0, 300.0, None).is_none());
        layout.restore(PanelRole::RightPanel, 400.0);
        assert_eq!(layout.size(PanelRole::RightPanel), None);
    }

    #[test]
    fn test_section_heights_defaults() {
        let mut layout = LayoutState::new();
        let (upper, lower) = layout.section_heights(PanelRole::ModelTree, PanelRole::VisibilityControl, 600.0, 0.5);
        assert_eq!((upper, lower), (300.0, 300.0));

        layout.set_size(PanelRole::VisibilityControl, 150.0);
        let (upper, lower) = layout.section_heights(PanelRole::ModelTree, PanelRole::VisibilityControl, 600.0, 0.5);
        assert_eq!((upper, lower), (450.0, 150.0));
    }

    #[test]
    fn test_section_heights_shrink_oversized_pair() {
        let mut layout = LayoutState::new();
        layout.set_size(PanelRole::ModelTree, 700.0);
        layout.set_size(PanelRole::VisibilityControl, 300.0);

        let (upper, lower) = layout.section_heights(PanelRole::ModelTree, PanelRole::VisibilityControl, 500.0, 0.65);
        assert_eq!((upper, lower), (350.0, 150.0));
        assert_eq!(layout.size(PanelRole::ModelTree), Some(700.0));

        // The scaled lower section would fall under the floor.
        layout.set_size(PanelRole::VisibilityControl, 100.0);
        let (upper, lower) = layout.section_heights(PanelRole::ModelTree, PanelRole::VisibilityControl, 400.0, 0.65);
        assert_eq!((upper, lower), (300.0, MIN_SECTION_HEIGHT));

        // An upper section taller than the panel keeps its neighbour on screen.
        layout.reset();
        layout.set_size(PanelRole::PropertyPanel, 900.0);
        let (upper, lower) = layout.section_heights(PanelRole::PropertyPanel, PanelRole::MessagePanel, 600.0, 0.55);
        assert_eq!(upper + lower, 600.0);
        assert!(lower >= MIN_SECTION_HEIGHT);
    }

    #[test]
    fn test_section_drag_starts_from_rendered_heights() {
        let mut layout = LayoutState::new();
        layout.set_size(PanelRole::ModelTree, 700.0);
        layout.set_size(PanelRole::VisibilityControl, 300.0);
        let (upper, lower) = layout.section_heights(PanelRole::ModelTree, PanelRole::VisibilityControl, 500.0, 0.65);

        let gesture = layout
            .begin_resize(ResizeHandle::VISIBILITY_SECTION, 0.0, lower, Some(upper))
            .unwrap();
        gesture.update(&mut layout, 10.0);
        assert_eq!(layout.size(PanelRole::VisibilityControl), Some(140.0));
        assert_eq!(layout.size(PanelRole::ModelTree), Some(360.0));
    }

    #[test]
    fn test_pair_total_is_captured_at_start() {
        let layout = LayoutState::new();
        let gesture = layout
            .begin_resize(ResizeHandle::MESSAGE_SECTION, 0.0, 250.0, Some(350.0))
            .unwrap();
        assert_eq!(gesture.pair_total(), Some(600.0));

        let (target, adjacent) = gesture.sizes_at(120.0);
        assert_eq!(Some(target + adjacent.unwrap_or(0.0)), gesture.pair_total());

        let side = layout.begin_resize(ResizeHandle::LEFT_PANEL, 0.0, 280.0, None).unwrap();
        assert_eq!(side.pair_total(), None);
    }
}

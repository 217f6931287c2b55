//! Property tests for the shell's state invariants.
//!
//! 1. At most one tree node is selected after any click sequence
//! 2. The message log never holds more than 50 entries and renders the 10 newest
//! 3. Side panel sizes stay within their role bounds for any drag
//! 4. Paired sections keep their combined height during a drag
//! 5. Exactly one tab is active after any selection
//! 6. The last view tab cannot be closed

use cioes::state::{
    LayoutState, MessageLog, ModelTree, PanelRole, PropertyTab, ResizeHandle, RibbonTab, TabKind, TabSet,
    ViewTabs, MESSAGE_CAPACITY, MIN_SECTION_HEIGHT, RENDERED_MESSAGES,
};
use cioes::{AppState, LayoutCoordinator};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Operations on the view tab set.
#[derive(Debug, Clone)]
enum TabOp {
    Add,
    Select(usize),
    Close(usize),
}

fn tab_op_strategy() -> impl Strategy<Value = TabOp> {
    prop_oneof![
        Just(TabOp::Add),
        (0usize..8).prop_map(TabOp::Select),
        (0usize..8).prop_map(TabOp::Close),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_selection_holds(clicks in prop::collection::vec(0usize..64, 1..60)) {
        let mut tree = ModelTree::default_project();
        let ids: Vec<_> = tree.node_ids().collect();

        for click in clicks {
            let node = ids[click % ids.len()];
            tree.click(node);
            let selected = ids.iter().filter(|id| tree.is_selected(**id)).count();
            prop_assert_eq!(selected, 1);
            prop_assert_eq!(tree.selected(), Some(node));
        }
    }

    #[test]
    fn leaves_never_expand(clicks in prop::collection::vec(0usize..64, 1..60)) {
        let mut tree = ModelTree::default_project();
        let ids: Vec<_> = tree.node_ids().collect();

        for click in clicks {
            tree.click(ids[click % ids.len()]);
        }
        for id in ids {
            prop_assert!(!(tree.is_leaf(id) && tree.is_expanded(id)));
        }
    }

    #[test]
    fn message_capacity_holds(count in 0usize..200) {
        let mut log = MessageLog::new();
        for i in 0..count {
            log.info(format!("{}", i));
            prop_assert!(log.len() <= MESSAGE_CAPACITY);
        }

        let rendered: Vec<String> = log.rendered().map(|m| m.text().to_string()).collect();
        prop_assert_eq!(rendered.len(), count.min(RENDERED_MESSAGES));
        for (offset, text) in rendered.iter().enumerate() {
            prop_assert_eq!(text, &format!("{}", count - 1 - offset));
        }
    }

    #[test]
    fn side_panels_stay_clamped(
        start in 200.0f32..500.0,
        moves in prop::collection::vec(-2000.0f32..2000.0, 1..20),
        right_side in any::<bool>(),
    ) {
        let handle = if right_side { ResizeHandle::RIGHT_PANEL } else { ResizeHandle::LEFT_PANEL };
        let (min, max) = handle.role.bounds();
        let mut layout = LayoutState::new();
        let gesture = layout.begin_resize(handle, 0.0, start, None);
        prop_assert!(gesture.is_some());

        if let Some(gesture) = gesture {
            for pointer in moves {
                gesture.update(&mut layout, pointer);
                let size = layout.size(handle.role).unwrap_or(f32::NAN);
                prop_assert!(size >= min && size <= max, "size {} outside [{}, {}]", size, min, max);
            }
        }
    }

    #[test]
    fn paired_sections_conserve_total(
        target in 100.0f32..600.0,
        adjacent in 100.0f32..600.0,
        moves in prop::collection::vec(-1500.0f32..1500.0, 1..20),
    ) {
        let mut state = AppState::new();
        let total = target + adjacent;

        LayoutCoordinator::begin_drag(&mut state, ResizeHandle::MESSAGE_SECTION, 0.0, target, Some(adjacent));
        for pointer in moves {
            LayoutCoordinator::drag(&mut state, pointer);
            let message = state.layout.size(PanelRole::MessagePanel).unwrap_or(f32::NAN);
            let property = state.layout.size(PanelRole::PropertyPanel).unwrap_or(f32::NAN);
            prop_assert!((message + property - total).abs() < 1e-3);
            prop_assert!(message >= MIN_SECTION_HEIGHT - 1e-3 && property >= MIN_SECTION_HEIGHT - 1e-3);
        }
        LayoutCoordinator::end_drag(&mut state);
        prop_assert!(!state.interaction.is_resizing());
    }

    #[test]
    fn fixed_tab_sets_have_one_active(picks in prop::collection::vec(0usize..16, 1..40)) {
        let mut ribbon: TabSet<RibbonTab> = TabSet::new();
        let mut properties: TabSet<PropertyTab> = TabSet::new();

        for pick in picks {
            ribbon.select(RibbonTab::ALL[pick % RibbonTab::ALL.len()]);
            properties.select(PropertyTab::ALL[pick % PropertyTab::ALL.len()]);
            prop_assert_eq!(ribbon.iter().filter(|(_, active)| *active).count(), 1);
            prop_assert_eq!(properties.iter().filter(|(_, active)| *active).count(), 1);
        }
    }

    #[test]
    fn view_tabs_never_empty(ops in prop::collection::vec(tab_op_strategy(), 1..50)) {
        let mut tabs = ViewTabs::default();

        for op in ops {
            let ids: Vec<u64> = tabs.tabs().iter().map(|t| t.id()).collect();
            match op {
                TabOp::Add => {
                    tabs.add();
                }
                TabOp::Select(i) => {
                    let _ = tabs.select(ids[i % ids.len()]);
                }
                TabOp::Close(i) => {
                    let before = tabs.len();
                    let result = tabs.close(ids[i % ids.len()]);
                    if before == 1 {
                        prop_assert!(result.is_err());
                    }
                }
            }
            prop_assert!(tabs.len() >= 1);
            prop_assert!(tabs.active().is_some());
        }
    }
}

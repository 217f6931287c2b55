use anyhow::{anyhow, Result};
use cioes::state::{MessageKind, ModelTree, PanelRole, ResizeHandle, StatusSlot, ViewportMode};
use cioes::{AppState, ApplicationCoordinator, Command, CommandDispatcher, LayoutCoordinator, ThemeCoordinator};
use std::collections::HashMap;

/// In-memory stand-in for eframe's persistent storage
#[derive(Default)]
struct MemoryStorage {
    data: HashMap<String, String>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

fn latest(state: &AppState) -> Result<(MessageKind, String)> {
    let message = state.messages.latest().ok_or_else(|| anyhow!("message log is empty"))?;
    Ok((message.kind(), message.text().to_string()))
}

#[test]
fn test_closing_last_view_tab_is_refused() -> Result<()> {
    let mut state = AppState::new();
    assert_eq!(state.view_tabs.len(), 1);
    let only = state.view_tabs.active_id();

    ApplicationCoordinator::close_view_tab(&mut state, only);

    assert_eq!(state.view_tabs.len(), 1);
    assert_eq!(state.view_tabs.active_id(), only);
    assert_eq!(latest(&state)?, (MessageKind::Warning, "至少需要保留一个视图".to_string()));
    Ok(())
}

#[test]
fn test_root_click_toggles_and_keeps_selection() -> Result<()> {
    let mut tree = ModelTree::new();
    let root = tree.add_branch(None, "根");
    let leaf = tree.add_leaf(Some(root), "叶");

    let mut state = AppState::new();
    state.tree = tree;

    ApplicationCoordinator::handle_tree_click(&mut state, root);
    assert!(state.tree.is_expanded(root));
    assert!(state.tree.is_selected(root));

    ApplicationCoordinator::handle_tree_click(&mut state, root);
    assert!(!state.tree.is_expanded(root));
    assert!(state.tree.is_selected(root));
    assert!(!state.tree.is_selected(leaf));
    assert_eq!(state.status.get(StatusSlot::Selection), "根");
    Ok(())
}

#[test]
fn test_message_log_keeps_fifty_and_renders_ten() -> Result<()> {
    let mut state = AppState::new();
    for i in 0..55 {
        state.messages.info(format!("消息 {}", i));
    }

    assert_eq!(state.messages.len(), 50);
    let retained: Vec<String> = state.messages.iter().map(|m| m.text().to_string()).collect();
    for evicted in 0..5 {
        assert!(!retained.contains(&format!("消息 {}", evicted)));
    }

    let rendered: Vec<String> = state.messages.rendered().map(|m| m.text().to_string()).collect();
    let expected: Vec<String> = (45..55).rev().map(|i| format!("消息 {}", i)).collect();
    assert_eq!(rendered, expected);
    Ok(())
}

#[test]
fn test_left_panel_drag_past_max_persists_max() -> Result<()> {
    let mut storage = MemoryStorage::default();
    let mut state = AppState::new();

    let (_, max) = PanelRole::LeftPanel.bounds();
    assert!(LayoutCoordinator::begin_drag(&mut state, ResizeHandle::LEFT_PANEL, 280.0, 280.0, None));
    LayoutCoordinator::drag(&mut state, 280.0 + 1000.0);
    LayoutCoordinator::end_drag(&mut state);
    LayoutCoordinator::persist_pending(&mut state, &mut storage);

    assert_eq!(state.layout.size(PanelRole::LeftPanel), Some(max));
    assert_eq!(storage.data.get("leftPanelWidth").map(String::as_str), Some("500px"));
    Ok(())
}

#[test]
fn test_reload_restores_right_panel_width() -> Result<()> {
    let mut storage = MemoryStorage::default();
    eframe::Storage::set_string(&mut storage, "rightPanelWidth", "400px".to_string());

    let mut state = AppState::new();
    LayoutCoordinator::restore_from_storage(&mut state, Some(&storage));

    assert_eq!(state.layout.size(PanelRole::RightPanel), Some(400.0));
    Ok(())
}

#[test]
fn test_resize_survives_restart() -> Result<()> {
    let mut storage = MemoryStorage::default();

    let mut first = AppState::new();
    LayoutCoordinator::begin_drag(&mut first, ResizeHandle::MESSAGE_SECTION, 600.0, 250.0, Some(350.0));
    LayoutCoordinator::drag(&mut first, 500.0);
    LayoutCoordinator::end_drag(&mut first);
    LayoutCoordinator::persist_pending(&mut first, &mut storage);

    let mut second = AppState::new();
    LayoutCoordinator::restore_from_storage(&mut second, Some(&storage));
    assert_eq!(second.layout.size(PanelRole::MessagePanel), Some(350.0));
    assert_eq!(second.layout.size(PanelRole::PropertyPanel), Some(250.0));
    Ok(())
}

#[test]
fn test_theme_choice_survives_restart() -> Result<()> {
    let mut storage = MemoryStorage::default();
    let mut state = AppState::with_theme(&ThemeCoordinator::load_theme_from_storage(Some(&storage)));
    ThemeCoordinator::toggle_theme(&mut state, Some(&mut storage));

    let restored = AppState::with_theme(&ThemeCoordinator::load_theme_from_storage(Some(&storage)));
    assert_eq!(restored.theme.current_theme_name(), state.theme.current_theme_name());
    Ok(())
}

#[test]
fn test_delete_from_tree_menu_needs_confirmation() -> Result<()> {
    let mut state = AppState::new();
    let node = state.tree.find("法兰").ok_or_else(|| anyhow!("node missing"))?;

    assert!(ApplicationCoordinator::open_tree_menu(&mut state, node, [10.0, 20.0]));
    ApplicationCoordinator::click_menu_entry(&mut state, 1);
    assert!(!state.context_menu.is_open());
    assert!(state.pending_confirmation().is_some());
    let before = state.messages.len();

    ApplicationCoordinator::decline(&mut state);
    assert!(state.pending_confirmation().is_none());
    assert_eq!(state.messages.len(), before);

    state.context_menu.begin_event();
    ApplicationCoordinator::open_tree_menu(&mut state, node, [10.0, 20.0]);
    ApplicationCoordinator::click_menu_entry(&mut state, 1);
    ApplicationCoordinator::confirm(&mut state);
    assert_eq!(latest(&state)?, (MessageKind::Warning, "删除节点: 法兰".to_string()));
    Ok(())
}

#[test]
fn test_canvas_menu_runs_command() -> Result<()> {
    let mut state = AppState::new();

    assert!(ApplicationCoordinator::open_canvas_menu(&mut state, [300.0, 200.0]));
    ApplicationCoordinator::click_menu_entry(&mut state, 1);

    assert!(!state.context_menu.is_open());
    assert_eq!(state.status.get(StatusSlot::Mode), "平移");
    Ok(())
}

#[test]
fn test_same_label_commands_are_distinct() -> Result<()> {
    let same_label: Vec<Command> = Command::ALL.iter().copied().filter(|c| c.label() == "管点").collect();
    assert!(same_label.len() >= 2);

    let mut ids: Vec<&str> = same_label.iter().map(|c| c.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), same_label.len());
    Ok(())
}

#[test]
fn test_unknown_command_id_reports_info() -> Result<()> {
    let mut state = AppState::new();
    CommandDispatcher::dispatch_id(&mut state, "engine.mesh");
    assert_eq!(latest(&state)?, (MessageKind::Info, "功能 \"engine.mesh\" 待实现".to_string()));
    Ok(())
}

#[test]
fn test_quad_viewport_command_updates_view_slot() -> Result<()> {
    let mut state = AppState::new();
    CommandDispatcher::dispatch(&mut state, Command::QuadViewport);
    assert_eq!(state.viewport.mode(), ViewportMode::Quad);
    assert_eq!(state.status.get(StatusSlot::View), "四视口");
    Ok(())
}

#[test]
fn test_close_window_is_requested_only_after_confirm() -> Result<()> {
    let mut state = AppState::new();
    CommandDispatcher::dispatch(&mut state, Command::CloseWindow);
    assert!(state.take_window_requests().is_empty());

    ApplicationCoordinator::confirm(&mut state);
    assert_eq!(state.take_window_requests().len(), 1);
    Ok(())
}

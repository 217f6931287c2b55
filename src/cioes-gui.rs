//! CIOES-SP GUI Application
//!
//! Desktop shell of the CIOES-SP offshore pipeline stress analysis tool, built
//! on egui. The shell features:
//! - A ribbon toolbar whose every button runs a catalogue command
//! - Model tree, display layers, property panel and message log in side
//!   panels whose sizes persist across sessions
//! - View tabs over a single, double or quad viewport canvas
//! - Light and dark themes with persistent preference
//!
//! All widget state, the command catalogue and the coordinators live in the
//! `cioes` library. This binary only draws them:
//! - `ui/` - Panel rendering and interaction capture
//! - `utils/` - Formatting, memory read-out and font setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use env_logger::Env;

mod ui;
mod utils;

use cioes::app::PRODUCT_TITLE;
use cioes::command::WindowRequest;
use cioes::{AppState, ApplicationCoordinator, CommandDispatcher, LayoutCoordinator, ThemeCoordinator};
use ui::input::keyboard;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::resize_handle::ResizeInteraction;

/// Clears the persisted panel sizes before the first frame.
const RESET_LAYOUT_FLAG: &str = "--reset-layout";

/// Main application entry point that initializes and launches the CIOES-SP shell.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut reset_layout = false;
    for arg in std::env::args().skip(1) {
        if arg == RESET_LAYOUT_FLAG {
            reset_layout = true;
        } else {
            log::warn!("ignoring unknown argument {:?}", arg);
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title(PRODUCT_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        PRODUCT_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(CioesApp::new(cc, reset_layout)))),
    )
}

/// The CIOES-SP application.
///
/// Delegates almost everything:
/// - `ApplicationCoordinator` and `CommandDispatcher` run the workflows
/// - `LayoutCoordinator` and `ThemeCoordinator` handle persistence
/// - `PanelManager` lays out and renders the panels
struct CioesApp {
    /// Centralized application state
    state: AppState,
    /// Set by `--reset-layout`; the store is only writable from a frame
    pending_layout_reset: bool,
    /// The user confirmed closing, so the next close request goes through
    close_confirmed: bool,
}

impl CioesApp {
    /// Creates the shell with theme and panel sizes restored from persistent storage.
    fn new(cc: &eframe::CreationContext, reset_layout: bool) -> Self {
        utils::fonts::install_cjk_fonts(&cc.egui_ctx);

        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let mut state = AppState::with_theme(&theme_name);
        if !reset_layout {
            LayoutCoordinator::restore_from_storage(&mut state, cc.storage);
        }
        ApplicationCoordinator::startup(&mut state);

        Self {
            state,
            pending_layout_reset: reset_layout,
            close_confirmed: false,
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, frame: &mut eframe::Frame) {
        let state = &mut self.state;
        match interaction {
            PanelInteraction::CommandTriggered(command) => CommandDispatcher::dispatch(state, command),
            PanelInteraction::ThemeToggleRequested => {
                let storage = frame.storage_mut().map(|s| s as &mut dyn eframe::Storage);
                ThemeCoordinator::toggle_theme(state, storage);
            }
            PanelInteraction::RibbonTabSelected(tab) => ApplicationCoordinator::select_ribbon_tab(state, tab),
            PanelInteraction::TreeNodeClicked(node) => ApplicationCoordinator::handle_tree_click(state, node),
            PanelInteraction::TreeMenuRequested { node, position } => {
                ApplicationCoordinator::open_tree_menu(state, node, position);
            }
            PanelInteraction::CanvasMenuRequested { position } => {
                ApplicationCoordinator::open_canvas_menu(state, position);
            }
            PanelInteraction::MenuEntryClicked(index) => ApplicationCoordinator::click_menu_entry(state, index),
            PanelInteraction::MenuDismissed => state.context_menu.click_outside(),
            PanelInteraction::VisibilityToggled(index) => ApplicationCoordinator::toggle_visibility(state, index),
            PanelInteraction::VisibilitySelected(index) => ApplicationCoordinator::select_visibility(state, index),
            PanelInteraction::PropertyTabSelected(tab) => ApplicationCoordinator::select_property_tab(state, tab),
            PanelInteraction::PropertyCommitted(index) => ApplicationCoordinator::commit_property(state, index),
            PanelInteraction::ViewTabSelected(id) => ApplicationCoordinator::select_view_tab(state, id),
            PanelInteraction::ViewTabClosed(id) => ApplicationCoordinator::close_view_tab(state, id),
            PanelInteraction::ConfirmAccepted => ApplicationCoordinator::confirm(state),
            PanelInteraction::ConfirmDeclined => ApplicationCoordinator::decline(state),
            PanelInteraction::Resize(ResizeInteraction::Started {
                handle,
                pointer,
                current_size,
                adjacent_size,
            }) => {
                LayoutCoordinator::begin_drag(state, handle, pointer, current_size, adjacent_size);
            }
            PanelInteraction::Resize(ResizeInteraction::Dragged(pointer)) => LayoutCoordinator::drag(state, pointer),
            PanelInteraction::Resize(ResizeInteraction::Released) => LayoutCoordinator::end_drag(state),
        }
    }

    /// Routes key presses to the keymap.
    ///
    /// Shortcuts are skipped while a text field has focus or a confirmation
    /// is waiting for an answer.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() || self.state.pending_confirmation().is_some() {
            return;
        }

        for (key, modifiers) in keyboard::collect_key_presses(ctx) {
            ApplicationCoordinator::handle_key(&mut self.state, key, modifiers);
        }
    }

    /// Turns the native close button into the close-window confirmation.
    fn intercept_close_request(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.close_confirmed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            CommandDispatcher::dispatch(&mut self.state, cioes::Command::CloseWindow);
        }
    }

    /// Forwards queued window requests to the windowing layer.
    fn drain_window_requests(&mut self, ctx: &egui::Context) {
        for request in self.state.take_window_requests() {
            let command = match request {
                WindowRequest::Minimize => egui::ViewportCommand::Minimized(true),
                WindowRequest::Maximize => {
                    let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                    egui::ViewportCommand::Maximized(!maximized)
                }
                WindowRequest::Close => {
                    self.close_confirmed = true;
                    egui::ViewportCommand::Close
                }
            };
            ctx.send_viewport_cmd(command);
        }
    }
}

impl eframe::App for CioesApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        LayoutCoordinator::persist_pending(&mut self.state, storage);
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Handle the window close button and keyboard shortcuts
    /// 3. Render all panels via PanelManager and handle their interactions
    /// 4. Persist finished resize gestures
    /// 5. Forward window requests
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if std::mem::take(&mut self.pending_layout_reset) {
            let storage = frame.storage_mut().map(|s| s as &mut dyn eframe::Storage);
            LayoutCoordinator::reset_layout(&mut self.state, storage);
        }

        self.state.context_menu.begin_event();
        self.intercept_close_request(ctx);
        self.handle_keyboard(ctx);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, frame);
        }

        if let Some(storage) = frame.storage_mut() {
            LayoutCoordinator::persist_pending(&mut self.state, storage);
        }

        self.drain_window_requests(ctx);
    }
}

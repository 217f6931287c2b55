//! Centralized application state for the CIOES-SP shell.
//!
//! This module implements the State pattern by composing focused state components
//! that each manage one widget of the shell. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations
//!
//! Widgets never talk to each other directly. The message log and the status
//! bar are the shared sinks every workflow writes its feedback to.

use crate::command::{Confirmation, WindowRequest};
use crate::state::{
    ContextMenuState, InteractionState, LayoutState, MessageLog, ModelTree, PropertyPanelState,
    RibbonTab, StatusBar, TabSet, ThemeState, ViewTabs, ViewportState, VisibilityState,
};

/// Main application state composed of focused state components.
///
/// One instance is owned by the running application and passed by reference
/// to every coordinator and panel.
#[derive(Debug, Clone)]
pub struct AppState {
    // ===== Shared Sinks =====
    /// Rolling user-facing message log
    pub messages: MessageLog,

    /// Status bar read-outs
    pub status: StatusBar,

    // ===== Widgets =====
    /// Model tree expansion and selection
    pub tree: ModelTree,

    /// Panel sizes and persistence queue
    pub layout: LayoutState,

    /// Active resize drag
    pub interaction: InteractionState,

    /// Active ribbon tab
    pub ribbon: TabSet<RibbonTab>,

    /// Property tabs, fields and pin
    pub properties: PropertyPanelState,

    /// Open view tabs
    pub view_tabs: ViewTabs,

    /// Open context menu
    pub context_menu: ContextMenuState,

    /// Display layer visibility
    pub visibility: VisibilityState,

    /// Viewport layout, orientation and toggles
    pub viewport: ViewportState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Destructive action waiting for the user's answer
    pending_confirmation: Option<Confirmation>,

    /// Requests for the windowing layer, drained once per frame
    window_requests: Vec<WindowRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_theme("")
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(theme_name: &str) -> Self {
        let theme = if theme_name.is_empty() {
            ThemeState::new()
        } else {
            ThemeState::with_theme(theme_name)
        };

        Self {
            messages: MessageLog::new(),
            status: StatusBar::new(),
            tree: ModelTree::default_project(),
            layout: LayoutState::new(),
            interaction: InteractionState::new(),
            ribbon: TabSet::new(),
            properties: PropertyPanelState::new(),
            view_tabs: ViewTabs::default(),
            context_menu: ContextMenuState::new(),
            visibility: VisibilityState::default(),
            viewport: ViewportState::new(),
            theme,
            pending_confirmation: None,
            window_requests: Vec::new(),
        }
    }

    // ===== Confirmation =====

    pub fn pending_confirmation(&self) -> Option<Confirmation> {
        self.pending_confirmation
    }

    /// Prompt text of the pending confirmation, if any.
    pub fn confirmation_prompt(&self) -> Option<String> {
        self.pending_confirmation.map(|c| c.prompt(&self.tree))
    }

    /// Installs a confirmation, returning the one it replaces.
    pub fn replace_confirmation(&mut self, confirmation: Confirmation) -> Option<Confirmation> {
        self.pending_confirmation.replace(confirmation)
    }

    pub fn take_confirmation(&mut self) -> Option<Confirmation> {
        self.pending_confirmation.take()
    }

    // ===== Window Requests =====

    pub fn request_window(&mut self, request: WindowRequest) {
        self.window_requests.push(request);
    }

    /// Drains the queued window requests.
    pub fn take_window_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.window_requests)
    }
}

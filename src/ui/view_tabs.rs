//! View tab strip UI rendering

use eframe::egui;
use egui::RichText;
use cioes::{AppState, Command, ThemeColors};

/// Result of view tab strip interactions.
pub enum ViewTabsInteraction {
    Selected(u64),
    Closed(u64),
    /// The "+" button was clicked
    CommandTriggered(Command),
}

/// Renders the row of view tabs with close buttons and the add button.
pub fn render_view_tabs(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<ViewTabsInteraction> {
    let mut interaction = None;
    let active = state.view_tabs.active_id();

    ui.horizontal(|ui| {
        for tab in state.view_tabs.tabs() {
            let is_active = tab.id() == active;
            let text = if is_active {
                RichText::new(tab.title()).strong().color(colors.accent)
            } else {
                RichText::new(tab.title())
            };
            if ui.selectable_label(is_active, text).clicked() {
                interaction = Some(ViewTabsInteraction::Selected(tab.id()));
            }
            if ui.small_button("✕").on_hover_text("关闭视图").clicked() {
                interaction = Some(ViewTabsInteraction::Closed(tab.id()));
            }
            ui.separator();
        }

        if ui
            .small_button("+")
            .on_hover_text(Command::AddViewTab.label())
            .clicked()
        {
            interaction = Some(ViewTabsInteraction::CommandTriggered(Command::AddViewTab));
        }
    });

    interaction
}

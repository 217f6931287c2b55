//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the status slots and memory usage.

use eframe::egui;
use egui::RichText;
use cioes::{AppState, ThemeColors};
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `colors` - Current theme palette
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        for (label, value) in state.status.entries() {
            ui.label(RichText::new(format!("{}:", label)).color(colors.text_dim));
            ui.label(RichText::new(value).strong());
            ui.label(RichText::new("|").color(colors.border));
        }

        if let Some(latest) = state.messages.latest() {
            ui.label(RichText::new(latest.text()).color(colors.message(latest.kind())));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let memory_text = format_memory_mb(get_current_memory_mb());
            ui.label(RichText::new(memory_text).color(colors.text_dim));
        });
    });
}

//! Visibility control panel UI rendering

use eframe::egui;
use egui::{RichText, ScrollArea};
use cioes::{AppState, Command, ThemeColors};

/// Result of visibility panel interactions.
pub enum VisibilityPanelInteraction {
    /// A layer's checkbox was clicked
    Toggled(usize),
    /// A layer's name was clicked
    Selected(usize),
    /// A toolbar button was clicked
    CommandTriggered(Command),
}

/// Renders the display layer list with its toolbar.
pub fn render_visibility_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<VisibilityPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("显隐控制").strong().color(colors.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for command in [
                Command::HideAllLayers,
                Command::ShowAllLayers,
                Command::AddVisibilityItem,
                Command::VisibilitySettings,
            ] {
                if ui.small_button(command.label()).clicked() {
                    interaction = Some(VisibilityPanelInteraction::CommandTriggered(command));
                }
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("visibility_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, item) in state.visibility.items().iter().enumerate() {
                ui.horizontal(|ui| {
                    let mut shown = item.is_shown();
                    if ui.checkbox(&mut shown, "").clicked() {
                        interaction = Some(VisibilityPanelInteraction::Toggled(index));
                    }

                    let selected = state.visibility.selected() == Some(index);
                    let text = if item.is_shown() {
                        RichText::new(item.name())
                    } else {
                        RichText::new(item.name()).color(colors.text_dim)
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        interaction = Some(VisibilityPanelInteraction::Selected(index));
                    }
                });
            }
        });

    interaction
}

//! Property panel UI rendering
//!
//! Field values are edited in place; an edit is reported once, when the
//! field loses focus with a changed value.

use eframe::egui;
use egui::RichText;
use cioes::state::{PropertyTab, TabKind};
use cioes::{AppState, Command, ThemeColors};

/// Result of property panel interactions.
pub enum PropertyPanelInteraction {
    TabSelected(PropertyTab),
    /// Field `index` was edited and committed
    FieldCommitted(usize),
    CommandTriggered(Command),
}

/// Renders the property panel: header with pin, tabs and the field grid
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable application state; text edits write field values directly
/// * `colors` - Current theme palette
pub fn render_property_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<PropertyPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("属性").strong().color(colors.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let pinned = state.properties.is_pinned();
            if ui
                .selectable_label(pinned, "📌")
                .on_hover_text(Command::TogglePanelPin.label())
                .clicked()
            {
                interaction = Some(PropertyPanelInteraction::CommandTriggered(Command::TogglePanelPin));
            }
        });
    });

    ui.horizontal(|ui| {
        for (tab, active) in state.properties.tabs().iter() {
            if ui.selectable_label(active, tab.title()).clicked() {
                interaction = Some(PropertyPanelInteraction::TabSelected(tab));
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("property_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("property_grid")
                .num_columns(2)
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (index, field) in state.properties.fields_mut().iter_mut().enumerate() {
                        ui.label(RichText::new(field.label).color(colors.text_dim));
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut field.value).desired_width(f32::INFINITY),
                        );
                        if response.changed() {
                            ui.data_mut(|d| d.insert_temp(response.id, true));
                        }
                        let edited = ui.data(|d| d.get_temp::<bool>(response.id)).unwrap_or(false);
                        if response.lost_focus() && edited {
                            ui.data_mut(|d| d.remove::<bool>(response.id));
                            interaction = Some(PropertyPanelInteraction::FieldCommitted(index));
                        }
                        ui.end_row();
                    }
                });
        });

    interaction
}

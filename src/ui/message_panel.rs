//! Message log panel UI rendering
//!
//! Only the newest entries are drawn; older ones stay in the log.

use eframe::egui;
use egui::RichText;
use cioes::{AppState, Command, ThemeColors};

/// Renders the message log, newest first.
///
/// Returns the clear command when its button is clicked.
pub fn render_message_panel(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<Command> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("消息").strong().color(colors.text));
        ui.label(RichText::new(format!("({})", state.messages.len())).color(colors.text_dim));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button(Command::ClearMessages.label()).clicked() {
                interaction = Some(Command::ClearMessages);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("message_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in state.messages.rendered() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(message.kind().icon()).color(colors.message(message.kind())));
                    ui.label(RichText::new(message.time_label()).monospace().color(colors.text_dim));
                    ui.label(message.text());
                });
            }
        });

    interaction
}

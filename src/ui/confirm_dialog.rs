//! Confirmation dialog rendering
//!
//! Pending destructive actions are shown as a modal; clicking outside it or
//! pressing Escape declines.

use eframe::egui;
use egui::RichText;
use cioes::{AppState, ThemeColors};

/// The user's answer to the pending confirmation.
pub enum ConfirmAnswer {
    Accepted,
    Declined,
}

/// Renders the modal for the pending confirmation, if any.
pub fn render_confirm_dialog(ctx: &egui::Context, state: &AppState, colors: &ThemeColors) -> Option<ConfirmAnswer> {
    let prompt = state.confirmation_prompt()?;
    let mut answer = None;

    let modal = egui::Modal::new(egui::Id::new("confirm_dialog")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.label(RichText::new("确认").strong().color(colors.text));
        ui.separator();
        ui.label(prompt);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("确定").clicked() {
                answer = Some(ConfirmAnswer::Accepted);
            }
            if ui.button("取消").clicked() {
                answer = Some(ConfirmAnswer::Declined);
            }
        });
    });

    if answer.is_none() && modal.should_close() {
        answer = Some(ConfirmAnswer::Declined);
    }

    answer
}

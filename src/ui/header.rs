//! Header UI rendering
//!
//! Handles the title bar (quick access, theme toggle, window controls) and
//! the ribbon toolbar below it.

use eframe::egui;
use egui::RichText;
use cioes::app::PRODUCT_TITLE;
use cioes::command::QUICK_ACCESS;
use cioes::state::{RibbonTab, TabKind};
use cioes::{AppState, Command, ThemeColors};

/// Result of user interaction with the header
pub enum HeaderInteraction {
    /// A ribbon, quick-access or window-control button was clicked
    CommandTriggered(Command),
    /// A ribbon tab header was clicked
    TabSelected(RibbonTab),
    /// The theme toggle was clicked
    ThemeToggleRequested,
}

/// Renders the title bar with quick access buttons and window controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `colors` - Current theme palette
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_title_bar(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(PRODUCT_TITLE).strong().color(colors.title_text));
        ui.separator();

        for command in QUICK_ACCESS {
            let button = egui::Button::new(RichText::new(command.label()).color(colors.title_text)).frame(false);
            if ui.add(button).on_hover_text(command.id()).clicked() {
                interaction = Some(HeaderInteraction::CommandTriggered(command));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for command in [Command::CloseWindow, Command::MaximizeWindow, Command::MinimizeWindow] {
                let glyph = match command {
                    Command::CloseWindow => "✕",
                    Command::MaximizeWindow => "□",
                    _ => "_",
                };
                let button = egui::Button::new(RichText::new(glyph).color(colors.title_text)).frame(false);
                if ui.add(button).on_hover_text(command.label()).clicked() {
                    interaction = Some(HeaderInteraction::CommandTriggered(command));
                }
            }

            ui.separator();

            let dark = state.theme.current().is_some_and(|theme| theme.is_dark());
            let glyph = if dark { "☀" } else { "🌙" };
            let button = egui::Button::new(RichText::new(glyph).color(colors.title_text)).frame(false);
            if ui.add(button).on_hover_text("切换主题").clicked() {
                interaction = Some(HeaderInteraction::ThemeToggleRequested);
            }
        });
    });

    interaction
}

/// Renders the ribbon: a row of tab headers and the active tab's buttons
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `colors` - Current theme palette
pub fn render_ribbon(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for (tab, active) in state.ribbon.iter() {
            let text = if active {
                RichText::new(tab.title()).strong().color(colors.accent)
            } else {
                RichText::new(tab.title())
            };
            if ui.selectable_label(active, text).clicked() {
                interaction = Some(HeaderInteraction::TabSelected(tab));
            }
        }
    });

    ui.separator();

    ui.horizontal_wrapped(|ui| {
        for command in Command::for_tab(state.ribbon.active()) {
            if ui.button(command.label()).on_hover_text(command.id()).clicked() {
                interaction = Some(HeaderInteraction::CommandTriggered(command));
            }
        }
    });

    interaction
}

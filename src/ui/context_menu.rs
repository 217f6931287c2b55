//! Context menu overlay rendering
//!
//! The open menu is drawn as a foreground area at its anchor. Any pointer
//! press outside the area dismisses it.

use eframe::egui;
use cioes::state::MenuEntry;
use cioes::{AppState, ThemeColors};

/// Result of context menu interactions.
pub enum ContextMenuInteraction {
    /// Entry `index` of the open menu was clicked
    EntryClicked(usize),
    /// The pointer was pressed somewhere else
    Dismissed,
}

/// Renders the open context menu, if any.
pub fn render_context_menu(ctx: &egui::Context, state: &AppState, colors: &ThemeColors) -> Option<ContextMenuInteraction> {
    let menu = state.context_menu.open_menu()?;
    let mut interaction = None;

    let area = egui::Area::new(egui::Id::new("context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(menu.position[0], menu.position[1]))
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style())
                .stroke(egui::Stroke::new(1.0, colors.border))
                .show(ui, |ui| {
                    ui.set_min_width(120.0);
                    for (index, entry) in menu.entries().iter().enumerate() {
                        match entry {
                            MenuEntry::Item { label, .. } => {
                                let button = egui::Button::new(*label).frame(false);
                                if ui.add_sized([ui.available_width(), 20.0], button).clicked() {
                                    interaction = Some(ContextMenuInteraction::EntryClicked(index));
                                }
                            }
                            MenuEntry::Separator => {
                                ui.separator();
                            }
                        }
                    }
                });
        });

    if interaction.is_none() {
        let pressed_outside = ctx.input(|i| {
            i.pointer.any_pressed()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| !area.response.rect.contains(pos))
        });
        if pressed_outside {
            interaction = Some(ContextMenuInteraction::Dismissed);
        }
    }

    interaction
}

//! Model tree panel UI rendering
//!
//! Shows the project hierarchy as indented rows. Collapsed nodes keep their
//! children; they are simply not laid out.

use eframe::egui;
use egui::{RichText, ScrollArea};
use cioes::state::NodeId;
use cioes::{AppState, Command, ThemeColors};

const INDENT: f32 = 14.0;

/// Result of tree panel interactions that need to be handled by the application.
pub enum TreePanelInteraction {
    /// A node header was clicked
    NodeClicked(NodeId),
    /// A node header was right-clicked
    MenuRequested { node: NodeId, position: [f32; 2] },
    /// A toolbar button was clicked
    CommandTriggered(Command),
}

/// Renders the model tree section: title, toolbar and rows.
pub fn render_model_tree_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    colors: &ThemeColors,
) -> Option<TreePanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("模型树").strong().color(colors.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for command in [Command::RefreshTree, Command::CollapseTree, Command::ExpandTree] {
                if ui.small_button(command.label()).clicked() {
                    interaction = Some(TreePanelInteraction::CommandTriggered(command));
                }
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("model_tree_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in state.tree.visible_rows() {
                let Some(label) = state.tree.label(row.node) else {
                    continue;
                };
                let marker = if state.tree.is_leaf(row.node) {
                    "•"
                } else if state.tree.is_expanded(row.node) {
                    "⏷"
                } else {
                    "⏵"
                };

                ui.horizontal(|ui| {
                    ui.add_space(row.depth as f32 * INDENT);
                    let selected = state.tree.is_selected(row.node);
                    let response = ui.selectable_label(selected, format!("{} {}", marker, label));

                    if response.clicked() {
                        interaction = Some(TreePanelInteraction::NodeClicked(row.node));
                    }
                    if response.secondary_clicked() {
                        let pos = response
                            .interact_pointer_pos()
                            .unwrap_or(response.rect.left_bottom());
                        interaction = Some(TreePanelInteraction::MenuRequested {
                            node: row.node,
                            position: [pos.x, pos.y],
                        });
                    }
                });
            }
        });

    interaction
}

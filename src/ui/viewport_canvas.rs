//! Viewport canvas UI rendering
//!
//! The model itself is drawn by the analysis engine, which is not part of the
//! shell. Each viewport cell shows a placeholder grid, an axis triad and its
//! orientation.

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke};
use cioes::state::ViewportMode;
use cioes::{AppState, Command, ThemeColors};

const GRID_SPACING: f32 = 40.0;
const AXIS_LENGTH: f32 = 40.0;

/// Result of viewport interactions.
pub enum ViewportInteraction {
    /// A toolbar button was clicked
    CommandTriggered(Command),
    /// The canvas was right-clicked
    MenuRequested { position: [f32; 2] },
}

/// Renders the viewport toolbar and the canvas below it.
pub fn render_viewport(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<ViewportInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for (command, mode) in [
            (Command::SingleViewport, ViewportMode::Single),
            (Command::DoubleViewport, ViewportMode::Double),
            (Command::QuadViewport, ViewportMode::Quad),
        ] {
            if ui.selectable_label(state.viewport.mode() == mode, command.label()).clicked() {
                interaction = Some(ViewportInteraction::CommandTriggered(command));
            }
        }
        ui.separator();

        for command in [Command::FitView, Command::ResetView] {
            if ui.button(command.label()).clicked() {
                interaction = Some(ViewportInteraction::CommandTriggered(command));
            }
        }
        ui.separator();

        if ui.selectable_label(state.viewport.axes_enabled(), Command::ToggleAxes.label()).clicked() {
            interaction = Some(ViewportInteraction::CommandTriggered(Command::ToggleAxes));
        }
        if ui.selectable_label(state.viewport.grid_enabled(), Command::ToggleGrid.label()).clicked() {
            interaction = Some(ViewportInteraction::CommandTriggered(Command::ToggleGrid));
        }
        if ui.button(Command::ViewSettings.label()).clicked() {
            interaction = Some(ViewportInteraction::CommandTriggered(Command::ViewSettings));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "{} | {}",
                    state.viewport.display().label(),
                    state.viewport.interaction().label()
                ))
                .color(colors.text_dim),
            );
        });
    });

    let (canvas_rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());
    for (index, cell) in split_cells(canvas_rect, state.viewport.mode()).into_iter().enumerate() {
        paint_cell(ui.painter(), cell, index, state, colors);
    }

    if response.secondary_clicked() {
        let pos = response.interact_pointer_pos().unwrap_or(canvas_rect.center());
        interaction = Some(ViewportInteraction::MenuRequested {
            position: [pos.x, pos.y],
        });
    }

    interaction
}

/// Splits the canvas into the cells of `mode`.
fn split_cells(rect: Rect, mode: ViewportMode) -> Vec<Rect> {
    let gap = 2.0;
    match mode {
        ViewportMode::Single => vec![rect],
        ViewportMode::Double => {
            let half = (rect.width() - gap) / 2.0;
            vec![
                Rect::from_min_size(rect.min, egui::vec2(half, rect.height())),
                Rect::from_min_size(rect.min + egui::vec2(half + gap, 0.0), egui::vec2(half, rect.height())),
            ]
        }
        ViewportMode::Quad => {
            let size = egui::vec2((rect.width() - gap) / 2.0, (rect.height() - gap) / 2.0);
            [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
                .into_iter()
                .map(|(col, row)| {
                    Rect::from_min_size(
                        rect.min + egui::vec2(col * (size.x + gap), row * (size.y + gap)),
                        size,
                    )
                })
                .collect()
        }
    }
}

fn paint_cell(painter: &egui::Painter, cell: Rect, index: usize, state: &AppState, colors: &ThemeColors) {
    let painter = painter.with_clip_rect(cell);
    painter.rect_filled(cell, 0.0, colors.canvas_background);
    painter.rect_stroke(cell, 0.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Inside);

    if state.viewport.grid_enabled() {
        let stroke = Stroke::new(1.0, colors.grid);
        let mut x = cell.left() + GRID_SPACING;
        while x < cell.right() {
            painter.vline(x, cell.y_range(), stroke);
            x += GRID_SPACING;
        }
        let mut y = cell.top() + GRID_SPACING;
        while y < cell.bottom() {
            painter.hline(cell.x_range(), y, stroke);
            y += GRID_SPACING;
        }
    }

    if state.viewport.axes_enabled() {
        let origin = cell.left_bottom() + egui::vec2(30.0, -30.0);
        let axes: [(egui::Vec2, Color32, &str); 3] = [
            (egui::vec2(AXIS_LENGTH, 0.0), colors.axis_x, "X"),
            (egui::vec2(0.0, -AXIS_LENGTH), colors.axis_y, "Y"),
            (egui::vec2(-AXIS_LENGTH * 0.5, AXIS_LENGTH * 0.5), colors.axis_z, "Z"),
        ];
        for (direction, color, name) in axes {
            painter.line_segment([origin, origin + direction], Stroke::new(2.0, color));
            painter.text(
                origin + direction * 1.2,
                egui::Align2::CENTER_CENTER,
                name,
                egui::FontId::proportional(12.0),
                color,
            );
        }
    }

    painter.text(
        cell.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("视口 {} · {}视图", index + 1, state.viewport.orientation().label()),
        egui::FontId::proportional(13.0),
        colors.text_dim,
    );
}

//! Panel orchestration and layout management.
//!
//! Lays out the shell: title bar and ribbon on top, status bar at the
//! bottom, the model tree and visibility sections on the left, the property
//! and message sections on the right, and the viewport in the centre. Panel
//! sizes come from the layout state; the resize handles only report drags.

use eframe::egui;
use cioes::state::{NodeId, PanelRole, PropertyTab, ResizeHandle, RibbonTab};
use cioes::{AppState, Command, ThemeColors};
use crate::ui::confirm_dialog::{self, ConfirmAnswer};
use crate::ui::context_menu::{self, ContextMenuInteraction};
use crate::ui::header::{self, HeaderInteraction};
use crate::ui::model_tree_panel::{self, TreePanelInteraction};
use crate::ui::property_panel::{self, PropertyPanelInteraction};
use crate::ui::resize_handle::{self, ResizeInteraction, HANDLE_THICKNESS};
use crate::ui::view_tabs::{self, ViewTabsInteraction};
use crate::ui::viewport_canvas::{self, ViewportInteraction};
use crate::ui::visibility_panel::{self, VisibilityPanelInteraction};
use crate::ui::{message_panel, status_bar};

/// Widths used until the user drags a side panel.
const DEFAULT_LEFT_WIDTH: f32 = 280.0;
const DEFAULT_RIGHT_WIDTH: f32 = 320.0;

/// Share of the stacked height given to the upper section by default.
const MODEL_TREE_RATIO: f32 = 0.65;
const PROPERTY_RATIO: f32 = 0.55;

/// Result of panel interactions that need to be handled by the coordinators.
pub enum PanelInteraction {
    CommandTriggered(Command),
    ThemeToggleRequested,
    RibbonTabSelected(RibbonTab),
    TreeNodeClicked(NodeId),
    TreeMenuRequested { node: NodeId, position: [f32; 2] },
    CanvasMenuRequested { position: [f32; 2] },
    MenuEntryClicked(usize),
    MenuDismissed,
    VisibilityToggled(usize),
    VisibilitySelected(usize),
    PropertyTabSelected(PropertyTab),
    PropertyCommitted(usize),
    ViewTabSelected(u64),
    ViewTabClosed(u64),
    ConfirmAccepted,
    ConfirmDeclined,
    Resize(ResizeInteraction),
}

impl From<HeaderInteraction> for PanelInteraction {
    fn from(interaction: HeaderInteraction) -> Self {
        match interaction {
            HeaderInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
            HeaderInteraction::TabSelected(tab) => PanelInteraction::RibbonTabSelected(tab),
            HeaderInteraction::ThemeToggleRequested => PanelInteraction::ThemeToggleRequested,
        }
    }
}

impl From<TreePanelInteraction> for PanelInteraction {
    fn from(interaction: TreePanelInteraction) -> Self {
        match interaction {
            TreePanelInteraction::NodeClicked(node) => PanelInteraction::TreeNodeClicked(node),
            TreePanelInteraction::MenuRequested { node, position } => {
                PanelInteraction::TreeMenuRequested { node, position }
            }
            TreePanelInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
        }
    }
}

impl From<VisibilityPanelInteraction> for PanelInteraction {
    fn from(interaction: VisibilityPanelInteraction) -> Self {
        match interaction {
            VisibilityPanelInteraction::Toggled(index) => PanelInteraction::VisibilityToggled(index),
            VisibilityPanelInteraction::Selected(index) => PanelInteraction::VisibilitySelected(index),
            VisibilityPanelInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
        }
    }
}

impl From<PropertyPanelInteraction> for PanelInteraction {
    fn from(interaction: PropertyPanelInteraction) -> Self {
        match interaction {
            PropertyPanelInteraction::TabSelected(tab) => PanelInteraction::PropertyTabSelected(tab),
            PropertyPanelInteraction::FieldCommitted(index) => PanelInteraction::PropertyCommitted(index),
            PropertyPanelInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
        }
    }
}

impl From<ViewTabsInteraction> for PanelInteraction {
    fn from(interaction: ViewTabsInteraction) -> Self {
        match interaction {
            ViewTabsInteraction::Selected(id) => PanelInteraction::ViewTabSelected(id),
            ViewTabsInteraction::Closed(id) => PanelInteraction::ViewTabClosed(id),
            ViewTabsInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
        }
    }
}

impl From<ViewportInteraction> for PanelInteraction {
    fn from(interaction: ViewportInteraction) -> Self {
        match interaction {
            ViewportInteraction::CommandTriggered(command) => PanelInteraction::CommandTriggered(command),
            ViewportInteraction::MenuRequested { position } => PanelInteraction::CanvasMenuRequested { position },
        }
    }
}

impl From<ContextMenuInteraction> for PanelInteraction {
    fn from(interaction: ContextMenuInteraction) -> Self {
        match interaction {
            ContextMenuInteraction::EntryClicked(index) => PanelInteraction::MenuEntryClicked(index),
            ContextMenuInteraction::Dismissed => PanelInteraction::MenuDismissed,
        }
    }
}

impl From<ConfirmAnswer> for PanelInteraction {
    fn from(answer: ConfirmAnswer) -> Self {
        match answer {
            ConfirmAnswer::Accepted => PanelInteraction::ConfirmAccepted,
            ConfirmAnswer::Declined => PanelInteraction::ConfirmDeclined,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation. Interactions are returned in
    /// the order they must be handled: overlay dismissal before anything a
    /// panel underneath asks for.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions: Vec<PanelInteraction> = Vec::new();
        let colors = state.theme.colors();

        // Overlays first; they read the state left by the previous frame
        interactions.extend(context_menu::render_context_menu(ctx, state, &colors).map(Into::into));
        interactions.extend(confirm_dialog::render_confirm_dialog(ctx, state, &colors).map(Into::into));

        egui::TopBottomPanel::top("title_bar")
            .frame(egui::Frame::default().fill(colors.title_bar).inner_margin(egui::Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                interactions.extend(header::render_title_bar(ui, state, &colors).map(Into::into));
            });

        egui::TopBottomPanel::top("ribbon")
            .frame(egui::Frame::default().fill(colors.ribbon_background).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                interactions.extend(header::render_ribbon(ui, state, &colors).map(Into::into));
            });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::default().fill(colors.panel_header).inner_margin(egui::Margin::symmetric(8, 2)))
            .show(ctx, |ui| {
                status_bar::render_status_bar(ui, state, &colors);
            });

        Self::render_left_panel(ctx, state, &colors, &mut interactions);
        Self::render_right_panel(ctx, state, &colors, &mut interactions);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors.panel_background).inner_margin(egui::Margin::same(4)))
            .show(ctx, |ui| {
                interactions.extend(view_tabs::render_view_tabs(ui, state, &colors).map(Into::into));
                ui.separator();
                interactions.extend(viewport_canvas::render_viewport(ui, state, &colors).map(Into::into));
            });

        interactions
    }

    /// Model tree above the visibility list, width handle on the right edge.
    fn render_left_panel(
        ctx: &egui::Context,
        state: &mut AppState,
        colors: &ThemeColors,
        interactions: &mut Vec<PanelInteraction>,
    ) {
        let width = state.layout.size_or(PanelRole::LeftPanel, DEFAULT_LEFT_WIDTH);
        let frame = egui::Frame::default().fill(colors.panel_background).inner_margin(egui::Margin {
            left: 4,
            right: HANDLE_THICKNESS as i8,
            top: 4,
            bottom: 4,
        });

        egui::SidePanel::left("left_panel")
            .exact_width(width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                let content = ui.max_rect();
                let available = ui.available_height() - HANDLE_THICKNESS;
                let (tree_height, visibility_height) = state.layout.section_heights(
                    PanelRole::ModelTree,
                    PanelRole::VisibilityControl,
                    available,
                    MODEL_TREE_RATIO,
                );

                show_section(ui, tree_height, |ui| {
                    interactions.extend(model_tree_panel::render_model_tree_panel(ui, state, colors).map(Into::into));
                });

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), HANDLE_THICKNESS),
                    egui::Sense::hover(),
                );
                interactions.extend(
                    resize_handle::render_resize_handle(
                        ui,
                        rect,
                        ResizeHandle::VISIBILITY_SECTION,
                        visibility_height,
                        Some(tree_height),
                        colors,
                    )
                    .map(PanelInteraction::Resize),
                );

                show_section(ui, visibility_height, |ui| {
                    interactions.extend(visibility_panel::render_visibility_panel(ui, state, colors).map(Into::into));
                });

                let edge = egui::Rect::from_min_max(
                    egui::pos2(content.right(), content.top()),
                    egui::pos2(content.right() + HANDLE_THICKNESS, content.bottom()),
                );
                interactions.extend(
                    resize_handle::render_resize_handle(ui, edge, ResizeHandle::LEFT_PANEL, width, None, colors)
                        .map(PanelInteraction::Resize),
                );
            });
    }

    /// Property panel above the message log, width handle on the left edge.
    fn render_right_panel(
        ctx: &egui::Context,
        state: &mut AppState,
        colors: &ThemeColors,
        interactions: &mut Vec<PanelInteraction>,
    ) {
        let width = state.layout.size_or(PanelRole::RightPanel, DEFAULT_RIGHT_WIDTH);
        let frame = egui::Frame::default().fill(colors.panel_background).inner_margin(egui::Margin {
            left: HANDLE_THICKNESS as i8,
            right: 4,
            top: 4,
            bottom: 4,
        });

        egui::SidePanel::right("right_panel")
            .exact_width(width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                let content = ui.max_rect();
                let available = ui.available_height() - HANDLE_THICKNESS;
                let (property_height, message_height) = state.layout.section_heights(
                    PanelRole::PropertyPanel,
                    PanelRole::MessagePanel,
                    available,
                    PROPERTY_RATIO,
                );

                show_section(ui, property_height, |ui| {
                    interactions.extend(property_panel::render_property_panel(ui, state, colors).map(Into::into));
                });

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), HANDLE_THICKNESS),
                    egui::Sense::hover(),
                );
                interactions.extend(
                    resize_handle::render_resize_handle(
                        ui,
                        rect,
                        ResizeHandle::MESSAGE_SECTION,
                        message_height,
                        Some(property_height),
                        colors,
                    )
                    .map(PanelInteraction::Resize),
                );

                show_section(ui, message_height, |ui| {
                    interactions.extend(
                        message_panel::render_message_panel(ui, state, colors).map(PanelInteraction::CommandTriggered),
                    );
                });

                let edge = egui::Rect::from_min_max(
                    egui::pos2(content.left() - HANDLE_THICKNESS, content.top()),
                    egui::pos2(content.left(), content.bottom()),
                );
                interactions.extend(
                    resize_handle::render_resize_handle(ui, edge, ResizeHandle::RIGHT_PANEL, width, None, colors)
                        .map(PanelInteraction::Resize),
                );
            });
    }
}

/// Gives `add_contents` a block of exactly `height` points.
fn show_section(ui: &mut egui::Ui, height: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let width = ui.available_width();
    ui.allocate_ui(egui::vec2(width, height), |ui| {
        ui.set_min_size(egui::vec2(width, height));
        ui.set_max_height(height);
        add_contents(ui);
    });
}

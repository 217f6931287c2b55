//! Viewport presentation state.
//!
//! No geometry lives here: the analysis engine that would draw the model is
//! an external collaborator. This tracks only what the shell displays about
//! the viewport (layout, orientation, toggles).

/// How many viewports the canvas is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportMode {
    Single,
    Double,
    Quad,
}

impl ViewportMode {
    pub const ALL: [ViewportMode; 3] = [ViewportMode::Single, ViewportMode::Double, ViewportMode::Quad];

    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Single => "单",
            ViewportMode::Double => "双",
            ViewportMode::Quad => "四",
        }
    }

    /// Number of viewport cells.
    pub fn cells(self) -> usize {
        match self {
            ViewportMode::Single => 1,
            ViewportMode::Double => 2,
            ViewportMode::Quad => 4,
        }
    }
}

/// Camera orientation presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewOrientation {
    Isometric,
    Top,
    Front,
    Right,
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl ViewOrientation {
    pub fn label(self) -> &'static str {
        match self {
            ViewOrientation::Isometric => "轴测",
            ViewOrientation::Top => "顶",
            ViewOrientation::Front => "前",
            ViewOrientation::Right => "右",
            ViewOrientation::Deg0 => "0°",
            ViewOrientation::Deg90 => "90°",
            ViewOrientation::Deg180 => "180°",
            ViewOrientation::Deg270 => "270°",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Wireframe,
    Solid,
}

impl DisplayMode {
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Wireframe => "线框",
            DisplayMode::Solid => "实体",
        }
    }
}

/// Pointer interaction mode on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    Select,
    Pan,
    Zoom,
}

impl InteractionMode {
    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Select => "选择",
            InteractionMode::Pan => "平移",
            InteractionMode::Zoom => "缩放",
        }
    }
}

/// State of the central canvas.
#[derive(Debug, Clone)]
pub struct ViewportState {
    mode: ViewportMode,
    orientation: ViewOrientation,
    display: DisplayMode,
    interaction: InteractionMode,
    grid_enabled: bool,
    axes_enabled: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self {
            mode: ViewportMode::Single,
            orientation: ViewOrientation::Isometric,
            display: DisplayMode::Solid,
            interaction: InteractionMode::Select,
            grid_enabled: true,
            axes_enabled: true,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn orientation(&self) -> ViewOrientation {
        self.orientation
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    pub fn interaction(&self) -> InteractionMode {
        self.interaction
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn axes_enabled(&self) -> bool {
        self.axes_enabled
    }

    pub fn set_mode(&mut self, mode: ViewportMode) {
        self.mode = mode;
    }

    pub fn set_orientation(&mut self, orientation: ViewOrientation) {
        self.orientation = orientation;
    }

    pub fn set_display(&mut self, display: DisplayMode) {
        self.display = display;
    }

    pub fn set_interaction(&mut self, interaction: InteractionMode) {
        self.interaction = interaction;
    }

    /// Flips the grid, returning the new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.grid_enabled = !self.grid_enabled;
        self.grid_enabled
    }

    /// Flips the axes, returning the new state.
    pub fn toggle_axes(&mut self) -> bool {
        self.axes_enabled = !self.axes_enabled;
        self.axes_enabled
    }
}

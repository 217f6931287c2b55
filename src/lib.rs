//! CIOES-SP: the application shell of a pipeline stress analysis tool.
//!
//! The library holds everything that is not drawing: widget state, the
//! command catalogue and its dispatcher, the application coordinators and
//! the themes. The `cioes-gui` binary renders it with egui.

pub mod app;
pub mod command;
pub mod error;
pub mod state;
pub mod theme;

pub use app::{AppState, ApplicationCoordinator, LayoutCoordinator, SettingsCoordinator, ThemeCoordinator};
pub use command::{Command, CommandDispatcher};
pub use error::{LengthError, ViewTabError};
pub use theme::{Theme, ThemeColors, ThemeManager};

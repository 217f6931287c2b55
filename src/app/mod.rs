//! Application-level modules for the CIOES-SP shell.
//!
//! This module contains the centralized state and the coordinators that run
//! workflows across its components.

mod app_state;
mod application_coordinator;
mod layout_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::{ApplicationCoordinator, PRODUCT_TITLE};
pub use layout_coordinator::LayoutCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;

//! Commands: the catalogue of actions, their dispatch and key bindings.

mod catalog;
mod confirmation;
mod dispatcher;
pub mod keymap;

pub use catalog::{Command, Effect, WindowRequest, QUICK_ACCESS};
pub use confirmation::Confirmation;
pub use dispatcher::CommandDispatcher;

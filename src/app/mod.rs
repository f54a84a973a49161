//! Application-level modules for the ruler demo.
//!
//! This module contains the centralized state and the coordinators that
//! persist and apply it.

mod app_state;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;

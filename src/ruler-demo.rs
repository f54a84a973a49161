//! Sliding ruler demo application.
//!
//! An eframe window with a draggable ruler. The application is built with a
//! modular architecture:
//! - `app/` - Application state and persistence coordinators
//! - `state/` - Slider value and derived ruler geometry
//! - `ui/` - Panel rendering and input handling

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    sliding_ruler::logging::init()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 240.0])
            .with_title("Sliding Ruler"),
        ..Default::default()
    };

    eframe::run_native(
        "Sliding Ruler",
        options,
        Box::new(|cc| Ok(Box::new(RulerDemoApp::new(cc)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run demo: {err}"))
}

struct RulerDemoApp {
    state: AppState,
}

impl RulerDemoApp {
    /// Creates the app with settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let settings = SettingsCoordinator::load_ruler_settings(cc.storage);
        tracing::info!(style = %settings.style, theme = %settings.theme, "starting ruler demo");
        Self {
            state: AppState::with_settings(settings),
        }
    }
}

impl eframe::App for RulerDemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_ruler_settings(storage, &self.state.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);
        PanelManager::render_all_panels(ctx, &mut self.state);
    }
}

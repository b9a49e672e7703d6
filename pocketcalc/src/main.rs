//! PocketCalc - a four-function calculator
//!
//! Digits and operators go in, one result comes out.

mod app;

use app::PocketCalcApp;
use eframe::NativeOptions;
use pocketcore::storage::{self, LAYOUT_ENV};
use pocketcore::{PocketTheme, Preferences};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let prefs_path = storage::preferences_path();
    let prefs = Preferences::load_or_default(&prefs_path)
        .with_layout_override(std::env::var(LAYOUT_ENV).ok().as_deref());
    tracing::info!(layout = prefs.layout.name(), "starting calculator");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 560.0])
            .with_min_inner_size([240.0, 240.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            PocketTheme::default().apply(&cc.egui_ctx);
            Box::new(PocketCalcApp::new(cc, prefs, prefs_path))
        }),
    )
}

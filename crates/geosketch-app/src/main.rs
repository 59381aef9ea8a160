//! Geosketch main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geosketch_app=debug,geosketch_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Geosketch");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Geosketch"),
        ..Default::default()
    };

    eframe::run_native(
        "geosketch",
        native_options,
        Box::new(|cc| Ok(Box::new(geosketch_app::GeosketchApp::new(cc)))),
    )
}

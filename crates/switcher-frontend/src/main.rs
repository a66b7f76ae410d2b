//! View Switcher main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switcher_frontend=debug,switcher_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting View Switcher");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("View Switcher"),
        ..Default::default()
    };

    eframe::run_native(
        "View Switcher",
        native_options,
        Box::new(|cc| Ok(Box::new(switcher_frontend::ViewSwitcherApp::new(cc)))),
    )
}

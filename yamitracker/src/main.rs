#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use yamitracker::{PanelApp, WindowConfig};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,panel_core=debug"))
        .init();

    let config = WindowConfig::default();
    log::info!("Starting {}", config.title);

    eframe::run_native(
        config.title,
        config.native_options(),
        Box::new(|cc| Ok(Box::new(PanelApp::new(cc)))),
    )
}

// The browser build starts from `yamitracker::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}

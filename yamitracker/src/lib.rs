mod app;
pub mod config;

pub use app::PanelApp;
pub use config::WindowConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // A second init (hot reload) keeps the first logger
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    let config = WindowConfig::default();
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config.canvas_id))
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", config.canvas_id)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(PanelApp::new(cc)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

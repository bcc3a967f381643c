/// Window and mount settings for the panel app.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: &'static str,
    pub app_id: &'static str,
    pub initial_size: [f32; 2],
    pub min_size: [f32; 2],
    /// Canvas element the web build mounts on.
    pub canvas_id: &'static str,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Yamaha PSR-E333 Synthesizer - Yamitracker",
            app_id: "yamitracker",
            initial_size: [1100.0, 640.0],
            min_size: [1000.0, 600.0],
            canvas_id: "yamitracker-canvas",
        }
    }
}

impl WindowConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size(self.initial_size)
                .with_min_inner_size(self.min_size)
                .with_title(self.title)
                .with_app_id(self.app_id),
            ..Default::default()
        }
    }
}

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(236, 240, 241); // #ecf0f1
pub const PANEL_TEXT: Color32 = Color32::from_rgb(236, 240, 241);
pub const SLATE: Color32 = Color32::from_rgb(44, 62, 80); // #2c3e50
pub const SLATE_LIGHT: Color32 = Color32::from_rgb(52, 73, 94); // #34495e
pub const ACCENT: Color32 = Color32::from_rgb(52, 152, 219); // #3498db
pub const ACCENT_DARK: Color32 = Color32::from_rgb(41, 128, 185); // #2980b9
pub const BORDER: Color32 = Color32::from_rgb(189, 195, 199); // #bdc3c7

pub const WHITE_KEY_IDLE: Color32 = Color32::WHITE;
pub const WHITE_KEY_ACTIVE: Color32 = ACCENT;
pub const WHITE_KEY_BORDER: Color32 = BORDER;
pub const WHITE_KEY_ACTIVE_BORDER: Color32 = ACCENT_DARK;

pub const BLACK_KEY_IDLE: Color32 = Color32::BLACK;
pub const BLACK_KEY_ACTIVE: Color32 = ACCENT_DARK;
pub const BLACK_KEY_BORDER: Color32 = SLATE;
pub const BLACK_KEY_ACTIVE_BORDER: Color32 = Color32::from_rgb(28, 90, 125); // #1c5a7d

/// Light window theme with the blue accent on selections and slider fills.
pub fn panel_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT_DARK);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(panel_visuals());
}

use egui;
use panel_core::controls::{OCTAVE_RANGE, VOLUME_RANGE};
use panel_core::{Instrument, Panel, PanelEvent};

use crate::keyboard::PianoKeyboard;
use crate::style;

const STATUS_BAR_HEIGHT: f32 = 28.0;
const MAX_KEYBOARD_HEIGHT: f32 = 200.0;
const MIN_KEYBOARD_HEIGHT: f32 = 80.0;

/// UI-only state that lives across frames.
#[derive(Debug, Default)]
pub struct UiState {
    /// Key currently held by the pointer.
    pub mouse_note: Option<u8>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What one frame of the panel produced, with the widget responses for
/// hosts that need their geometry.
pub struct PanelLayout {
    pub events: Vec<PanelEvent>,
    pub controls: ControlResponses,
    pub keyboard: egui::Response,
}

pub struct ControlResponses {
    pub volume: egui::Response,
    pub instrument: egui::Response,
    /// Preset entries, present while the combo popup is open.
    pub instrument_items: Option<Vec<egui::Response>>,
    pub octave: egui::Response,
}

/// Render display, controls, keyboard and status bar top to bottom.
/// Returns the interactions of this frame for the caller to apply.
pub fn render_panel(ui: &mut egui::Ui, panel: &Panel, state: &mut UiState) -> Vec<PanelEvent> {
    layout_panel(ui, panel, state).events
}

pub fn layout_panel(ui: &mut egui::Ui, panel: &Panel, state: &mut UiState) -> PanelLayout {
    let mut events = Vec::new();
    ui.spacing_mut().item_spacing = egui::vec2(8.0, 6.0);

    render_display(ui, panel);
    let controls = render_controls(ui, panel, &mut events);

    let kb_height = (ui.available_height() - STATUS_BAR_HEIGHT - ui.spacing().item_spacing.y)
        .clamp(MIN_KEYBOARD_HEIGHT, MAX_KEYBOARD_HEIGHT);
    let kb_size = egui::vec2(ui.available_width(), kb_height);
    let (kb_rect, kb_response) = ui.allocate_exact_size(kb_size, egui::Sense::click_and_drag());
    let mut keyboard = PianoKeyboard {
        rect: keyboard_rect(kb_rect),
        keys: panel.keyboard(),
        mouse_note: &mut state.mouse_note,
    };
    events.extend(keyboard.paint_and_interact(ui, &kb_response));

    render_status_bar(ui, panel);
    PanelLayout {
        events,
        controls,
        keyboard: kb_response,
    }
}

/// Keys sit inside the allocated area with a margin.
fn keyboard_rect(allocated: egui::Rect) -> egui::Rect {
    allocated.shrink(10.0)
}

fn render_display(ui: &mut egui::Ui, panel: &Panel) {
    egui::Frame::default()
        .fill(style::SLATE)
        .stroke(egui::Stroke::new(2.0, style::SLATE_LIGHT))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(15))
        .outer_margin(egui::Margin::same(5))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(panel.display_text())
                        .size(24.0)
                        .strong()
                        .color(style::PANEL_TEXT),
                );
            });
        });
}

fn render_controls(
    ui: &mut egui::Ui,
    panel: &Panel,
    events: &mut Vec<PanelEvent>,
) -> ControlResponses {
    ui.horizontal(|ui| {
        let volume = group_box(ui, "Volume", |ui| {
            ui.label(panel.volume_label());
            let prev = panel.volume() as i32;
            let mut value = prev;
            let response = ui.add(
                egui::Slider::new(
                    &mut value,
                    *VOLUME_RANGE.start() as i32..=*VOLUME_RANGE.end() as i32,
                )
                .show_value(false)
                .trailing_fill(true),
            );
            if value != prev {
                events.push(PanelEvent::VolumeChanged(value));
            }
            response
        });

        let (instrument, instrument_items) = group_box(ui, "Instrument", |ui| {
            let current = panel.instrument();
            let mut index = current.index();
            let combo = egui::ComboBox::from_id_salt("instrument")
                .selected_text(current.name())
                .width(120.0)
                .show_ui(ui, |ui: &mut egui::Ui| {
                    Instrument::VARIANTS
                        .iter()
                        .enumerate()
                        .map(|(i, variant)| ui.selectable_value(&mut index, i, variant.name()))
                        .collect::<Vec<_>>()
                });
            if index != current.index() {
                events.push(PanelEvent::InstrumentChanged(index));
            }
            (combo.response, combo.inner)
        });

        let octave = group_box(ui, "Octave", |ui| {
            ui.label(panel.octave_label());
            let prev = panel.octave() as i32;
            let mut value = prev;
            let response = ui.add(
                egui::Slider::new(
                    &mut value,
                    *OCTAVE_RANGE.start() as i32..=*OCTAVE_RANGE.end() as i32,
                )
                .show_value(false),
            );
            if value != prev {
                events.push(PanelEvent::OctaveChanged(value));
            }
            response
        });

        ControlResponses {
            volume,
            instrument,
            instrument_items,
            octave,
        }
    })
    .inner
}

/// White rounded box with an accent title strip.
fn group_box<R>(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(2.0, style::BORDER))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format!(" {} ", title))
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(style::ACCENT),
                );
                add_contents(ui)
            })
            .inner
        })
        .inner
}

fn render_status_bar(ui: &mut egui::Ui, panel: &Panel) {
    egui::Frame::default()
        .fill(style::SLATE)
        .inner_margin(egui::Margin::same(5))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(panel.status_text()).color(egui::Color32::WHITE));
            });
        });
}

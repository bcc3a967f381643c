use crate::controls::{clamp_octave, clamp_volume, DEFAULT_OCTAVE, DEFAULT_VOLUME};
use crate::instrument::Instrument;
use crate::keys::{KeyState, Keyboard};

/// Model name shown in the display label.
pub const MODEL_NAME: &str = "Yamaha PSR-E333";
/// Shown after the model name until an instrument is picked.
pub const APP_NAME: &str = "Yamitracker";
pub const INITIAL_STATUS: &str = "Ready";

fn display_line(suffix: &str) -> String {
    format!("{} - {}", MODEL_NAME, suffix)
}

/// User interactions the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    NoteOn(u8),
    NoteOff(u8),
    VolumeChanged(i32),
    InstrumentChanged(usize),
    OctaveChanged(i32),
}

/// Integration points for a sound backend. Called after the panel state has
/// been updated, with the stored (clamped) value.
pub trait PanelHooks {
    fn note_on(&mut self, note: u8);
    fn note_off(&mut self, note: u8);
    fn volume(&mut self, value: u8);
    fn program_change(&mut self, instrument: Instrument);
    fn octave(&mut self, offset: i8);
}

/// Hooks that only log what a backend would receive.
#[derive(Debug, Default)]
pub struct LogHooks;

impl PanelHooks for LogHooks {
    fn note_on(&mut self, note: u8) {
        log::debug!("Note pressed: {}", note);
    }

    fn note_off(&mut self, note: u8) {
        log::debug!("Note released: {}", note);
    }

    fn volume(&mut self, value: u8) {
        log::debug!("Volume changed to: {}", value);
    }

    fn program_change(&mut self, instrument: Instrument) {
        log::debug!("Instrument changed to: {}", instrument.name());
    }

    fn octave(&mut self, offset: i8) {
        log::debug!("Octave offset: {}", offset);
    }
}

/// State of the whole control panel: display, controls, keys and status line.
///
/// Labels are stored as the text the widgets show, so the UI layer renders
/// them verbatim.
#[derive(Debug, Clone)]
pub struct Panel {
    display_text: String,
    volume: u8,
    volume_label: String,
    instrument: Instrument,
    octave: i8,
    octave_label: String,
    keyboard: Keyboard,
    status_text: String,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            display_text: display_line(APP_NAME),
            volume: DEFAULT_VOLUME,
            volume_label: DEFAULT_VOLUME.to_string(),
            instrument: Instrument::default(),
            octave: DEFAULT_OCTAVE,
            octave_label: DEFAULT_OCTAVE.to_string(),
            keyboard: Keyboard::new(),
            status_text: INITIAL_STATUS.to_string(),
        }
    }

    pub fn apply(&mut self, event: PanelEvent, hooks: &mut dyn PanelHooks) {
        match event {
            PanelEvent::NoteOn(note) => self.note_pressed(note, hooks),
            PanelEvent::NoteOff(note) => self.note_released(note, hooks),
            PanelEvent::VolumeChanged(value) => self.volume_changed(value, hooks),
            PanelEvent::InstrumentChanged(index) => self.instrument_changed(index, hooks),
            PanelEvent::OctaveChanged(value) => self.octave_changed(value, hooks),
        }
    }

    pub fn note_pressed(&mut self, note: u8, hooks: &mut dyn PanelHooks) {
        self.keyboard.set(note, KeyState::Active);
        self.status_text = format!("Playing note: {}", note);
        hooks.note_on(note);
    }

    pub fn note_released(&mut self, note: u8, hooks: &mut dyn PanelHooks) {
        self.keyboard.set(note, KeyState::Idle);
        hooks.note_off(note);
    }

    pub fn volume_changed(&mut self, value: i32, hooks: &mut dyn PanelHooks) {
        self.volume = clamp_volume(value);
        self.volume_label = self.volume.to_string();
        hooks.volume(self.volume);
    }

    pub fn instrument_changed(&mut self, index: usize, hooks: &mut dyn PanelHooks) {
        self.instrument = Instrument::from_index(index);
        self.display_text = display_line(self.instrument.name());
        hooks.program_change(self.instrument);
    }

    pub fn octave_changed(&mut self, value: i32, hooks: &mut dyn PanelHooks) {
        self.octave = clamp_octave(value);
        self.octave_label = self.octave.to_string();
        hooks.octave(self.octave);
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn volume_label(&self) -> &str {
        &self.volume_label
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    pub fn octave_label(&self) -> &str {
        &self.octave_label
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

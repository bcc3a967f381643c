pub mod keyboard;
pub mod layout;
pub mod style;

pub use keyboard::PianoKeyboard;
pub use layout::{layout_panel, render_panel, ControlResponses, PanelLayout, UiState};

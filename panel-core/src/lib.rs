pub mod controls;
pub mod instrument;
pub mod keys;
pub mod panel;

pub use instrument::Instrument;
pub use keys::{key_layout, KeyKind, KeySlot, KeyState, Keyboard};
pub use panel::{LogHooks, Panel, PanelEvent, PanelHooks};

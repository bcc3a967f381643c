use eframe::egui;
use panel_core::{LogHooks, Panel, PanelEvent, PanelHooks};
use panel_ui::{render_panel, style, UiState};

pub struct PanelApp {
    panel: Panel,
    state: UiState,
    hooks: Box<dyn PanelHooks>,
}

impl PanelApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        style::apply(&cc.egui_ctx);
        Self::with_hooks(Box::new(LogHooks))
    }

    pub fn with_hooks(hooks: Box<dyn PanelHooks>) -> Self {
        Self {
            panel: Panel::new(),
            state: UiState::new(),
            hooks,
        }
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    fn process_events(&mut self, events: Vec<PanelEvent>) {
        for event in events {
            self.panel.apply(event, self.hooks.as_mut());
        }
    }

    /// One frame: draw, then apply what the user did.
    fn show(&mut self, ctx: &egui::Context) {
        let events = egui::CentralPanel::default()
            .show(ctx, |ui| render_panel(ui, &self.panel, &mut self.state))
            .inner;

        // Key colors and labels change on the next frame
        if !events.is_empty() {
            self.process_events(events);
            ctx.request_repaint();
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::keys::{KeyKind, KeyState};
    use panel_core::Instrument;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedLog(Rc<RefCell<Vec<String>>>);

    impl PanelHooks for SharedLog {
        fn note_on(&mut self, note: u8) {
            self.0.borrow_mut().push(format!("on {}", note));
        }
        fn note_off(&mut self, note: u8) {
            self.0.borrow_mut().push(format!("off {}", note));
        }
        fn volume(&mut self, value: u8) {
            self.0.borrow_mut().push(format!("volume {}", value));
        }
        fn program_change(&mut self, instrument: Instrument) {
            self.0.borrow_mut().push(format!("program {}", instrument.name()));
        }
        fn octave(&mut self, offset: i8) {
            self.0.borrow_mut().push(format!("octave {}", offset));
        }
    }

    #[test]
    fn events_are_applied_in_order() {
        let log = SharedLog::default();
        let mut app = PanelApp::with_hooks(Box::new(log.clone()));
        app.process_events(vec![
            PanelEvent::NoteOn(60),
            PanelEvent::NoteOff(60),
            PanelEvent::NoteOn(61),
            PanelEvent::InstrumentChanged(3),
        ]);
        assert_eq!(
            *log.0.borrow(),
            vec!["on 60", "off 60", "on 61", "program Guitar"]
        );
        assert_eq!(app.panel().status_text(), "Playing note: 61");
        assert_eq!(app.panel().display_text(), "Yamaha PSR-E333 - Guitar");
        assert_eq!(
            app.panel().keyboard().state(60, KeyKind::White),
            Some(KeyState::Idle)
        );
        assert_eq!(
            app.panel().keyboard().state(61, KeyKind::White),
            Some(KeyState::Active)
        );
    }

    #[test]
    fn idle_frame_leaves_panel_untouched() {
        let log = SharedLog::default();
        let mut app = PanelApp::with_hooks(Box::new(log.clone()));
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        assert!(log.0.borrow().is_empty());
        assert_eq!(app.panel().status_text(), "Ready");
    }
}

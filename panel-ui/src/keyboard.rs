use egui;
use panel_core::keys::{key_layout, KeyKind, KeyState, Keyboard, NUM_WHITE_KEYS};
use panel_core::PanelEvent;

use crate::style;

/// Black keys relative to white keys (25x120 over 40x200).
const BLACK_KEY_WIDTH_RATIO: f32 = 0.625;
const BLACK_KEY_HEIGHT_RATIO: f32 = 0.6;

pub struct PianoKeyboard<'a> {
    pub rect: egui::Rect,
    pub keys: &'a Keyboard,
    pub mouse_note: &'a mut Option<u8>,
}

struct KeyRect {
    note: u8,
    kind: KeyKind,
    rect: egui::Rect,
}

impl<'a> PianoKeyboard<'a> {
    pub fn paint_and_interact(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        let keys = self.compute_layout();
        let painter = ui.painter_at(self.rect);

        // White keys first, black keys are drawn over them
        for key in keys.iter().filter(|k| k.kind == KeyKind::White) {
            let (fill, border) = match self.keys.state(key.note, key.kind) {
                Some(KeyState::Active) => (style::WHITE_KEY_ACTIVE, style::WHITE_KEY_ACTIVE_BORDER),
                _ => (style::WHITE_KEY_IDLE, style::WHITE_KEY_BORDER),
            };
            let rounding = egui::CornerRadius {
                nw: 0,
                ne: 0,
                sw: 5,
                se: 5,
            };
            painter.rect_filled(key.rect, rounding, fill);
            painter.rect_stroke(
                key.rect,
                rounding,
                egui::Stroke::new(1.0, border),
                egui::StrokeKind::Inside,
            );
        }

        for key in keys.iter().filter(|k| k.kind == KeyKind::Black) {
            let (fill, border) = match self.keys.state(key.note, key.kind) {
                Some(KeyState::Active) => (style::BLACK_KEY_ACTIVE, style::BLACK_KEY_ACTIVE_BORDER),
                _ => (style::BLACK_KEY_IDLE, style::BLACK_KEY_BORDER),
            };
            let rounding = egui::CornerRadius {
                nw: 0,
                ne: 0,
                sw: 3,
                se: 3,
            };
            painter.rect_filled(key.rect, rounding, fill);
            painter.rect_stroke(
                key.rect,
                rounding,
                egui::Stroke::new(1.0, border),
                egui::StrokeKind::Inside,
            );
        }

        // Mouse: one held note at a time, sliding across keys retriggers
        if response.is_pointer_button_down_on() {
            if let Some(note) = response.interact_pointer_pos().and_then(|pos| key_at(&keys, pos)) {
                if *self.mouse_note != Some(note) {
                    if let Some(old) = self.mouse_note.take() {
                        events.push(PanelEvent::NoteOff(old));
                    }
                    *self.mouse_note = Some(note);
                    events.push(PanelEvent::NoteOn(note));
                }
            }
        } else if let Some(note) = self.mouse_note.take() {
            events.push(PanelEvent::NoteOff(note));
        } else if response.contains_pointer() {
            // Press and release inside one frame never show up as "down"
            if let Some(note) = quick_click_pos(ui).and_then(|pos| key_at(&keys, pos)) {
                events.push(PanelEvent::NoteOn(note));
                events.push(PanelEvent::NoteOff(note));
            }
        }

        events
    }

    fn compute_layout(&self) -> Vec<KeyRect> {
        let white_key_width = self.rect.width() / NUM_WHITE_KEYS as f32;
        let black_key_width = white_key_width * BLACK_KEY_WIDTH_RATIO;
        let black_key_height = self.rect.height() * BLACK_KEY_HEIGHT_RATIO;

        key_layout()
            .into_iter()
            .map(|slot| {
                let rect = match slot.kind {
                    KeyKind::White => egui::Rect::from_min_size(
                        egui::pos2(
                            self.rect.left() + slot.white_index as f32 * white_key_width,
                            self.rect.top(),
                        ),
                        egui::vec2(white_key_width, self.rect.height()),
                    ),
                    // Centered on the boundary after its white key
                    KeyKind::Black => egui::Rect::from_min_size(
                        egui::pos2(
                            self.rect.left() + (slot.white_index + 1) as f32 * white_key_width
                                - black_key_width / 2.0,
                            self.rect.top(),
                        ),
                        egui::vec2(black_key_width, black_key_height),
                    ),
                };
                KeyRect {
                    note: slot.note,
                    kind: slot.kind,
                    rect,
                }
            })
            .collect()
    }
}

/// Position of a primary press that was also released during this frame.
fn quick_click_pos(ui: &egui::Ui) -> Option<egui::Pos2> {
    ui.input(|i| {
        let mut press = None;
        for event in &i.events {
            if let egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } = event
            {
                if *pressed {
                    press = Some(*pos);
                } else if press.is_some() {
                    return press;
                }
            }
        }
        None
    })
}

/// Black keys overlap white keys, so they are tested first.
fn key_at(keys: &[KeyRect], pos: egui::Pos2) -> Option<u8> {
    keys.iter()
        .filter(|k| k.kind == KeyKind::Black)
        .chain(keys.iter().filter(|k| k.kind == KeyKind::White))
        .find(|k| k.rect.contains(pos))
        .map(|k| k.note)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keyboard<'a>(keys: &'a Keyboard, mouse_note: &'a mut Option<u8>) -> PianoKeyboard<'a> {
        PianoKeyboard {
            rect: egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1000.0, 200.0)),
            keys,
            mouse_note,
        }
    }

    #[test]
    fn layout_has_35_keys() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        assert_eq!(keys.len(), 35);
    }

    #[test]
    fn white_keys_tile_the_full_width() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        let white: Vec<_> = keys.iter().filter(|k| k.kind == KeyKind::White).collect();
        assert!((white.first().unwrap().rect.left() - 0.0).abs() < 0.01);
        assert!(
            (white.last().unwrap().rect.right() - 1000.0).abs() < 0.01,
            "last white key right edge: {}",
            white.last().unwrap().rect.right()
        );
        for pair in white.windows(2) {
            assert!((pair[0].rect.right() - pair[1].rect.left()).abs() < 0.01);
        }
        for key in &white {
            assert!((key.rect.width() - 40.0).abs() < 0.01);
            assert!((key.rect.height() - 200.0).abs() < 0.01);
        }
    }

    #[test]
    fn black_keys_are_narrower_and_shorter() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        for key in keys.iter().filter(|k| k.kind == KeyKind::Black) {
            assert!((key.rect.width() - 25.0).abs() < 0.01);
            assert!((key.rect.height() - 120.0).abs() < 0.01);
        }
    }

    #[test]
    fn black_keys_straddle_the_boundary_after_their_slot() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        // First black key follows slot 0, boundary at x = 40
        let first_black = keys.iter().find(|k| k.kind == KeyKind::Black).unwrap();
        assert_eq!(first_black.note, 49);
        assert!((first_black.rect.center().x - 40.0).abs() < 0.01);
    }

    #[test]
    fn no_key_leaves_the_keyboard_rect() {
        let kb = Keyboard::new();
        let mut mn = None;
        let board = make_keyboard(&kb, &mut mn);
        let bounds = board.rect.expand(0.01);
        for key in board.compute_layout() {
            assert!(bounds.contains_rect(key.rect), "key {} out of bounds", key.note);
        }
    }

    #[test]
    fn hit_test_prefers_black_keys() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        // Upper part of the boundary between white slots 0 and 1
        assert_eq!(key_at(&keys, egui::pos2(40.0, 10.0)), Some(49));
        // Lower part of the same boundary only hits white keys
        assert_eq!(key_at(&keys, egui::pos2(39.0, 190.0)), Some(48));
        assert_eq!(key_at(&keys, egui::pos2(999.0, 100.0)), Some(72));
    }

    #[test]
    fn hit_test_outside_returns_none() {
        let kb = Keyboard::new();
        let mut mn = None;
        let keys = make_keyboard(&kb, &mut mn).compute_layout();
        assert_eq!(key_at(&keys, egui::pos2(-5.0, 100.0)), None);
        assert_eq!(key_at(&keys, egui::pos2(500.0, 250.0)), None);
    }

    #[test]
    fn layout_handles_offset_rect() {
        let kb = Keyboard::new();
        let mut mn = None;
        let board = PianoKeyboard {
            rect: egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(1000.0, 200.0)),
            keys: &kb,
            mouse_note: &mut mn,
        };
        let keys = board.compute_layout();
        assert!((keys[0].rect.left() - 100.0).abs() < 0.01);
        for key in &keys {
            assert!((key.rect.top() - 50.0).abs() < 0.01);
        }
    }

    #[test]
    fn layout_handles_zero_size_rect() {
        let kb = Keyboard::new();
        let mut mn = None;
        let board = PianoKeyboard {
            rect: egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(0.0, 0.0)),
            keys: &kb,
            mouse_note: &mut mn,
        };
        assert_eq!(board.compute_layout().len(), 35);
    }
}

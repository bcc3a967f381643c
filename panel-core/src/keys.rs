use std::collections::BTreeMap;

/// MIDI note of the leftmost white key (C3).
pub const FIRST_NOTE: u8 = 48;
/// Two octaves of white keys plus one.
pub const NUM_WHITE_KEYS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyKind {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Idle,
    Active,
}

/// One key in left-to-right widget order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub note: u8,
    pub kind: KeyKind,
    /// For white keys, their own slot. For black keys, the white slot they follow.
    pub white_index: usize,
}

/// Whether a black key sits after white slot `slot`.
pub fn has_black_key_after(slot: usize) -> bool {
    slot + 1 < NUM_WHITE_KEYS && matches!(slot % 12, 0 | 2 | 5 | 7 | 9)
}

/// Walk the white slots, inserting a black key after each slot that gets one.
pub fn key_layout() -> Vec<KeySlot> {
    let mut keys = Vec::new();
    for slot in 0..NUM_WHITE_KEYS {
        let note = FIRST_NOTE + slot as u8;
        keys.push(KeySlot {
            note,
            kind: KeyKind::White,
            white_index: slot,
        });
        if has_black_key_after(slot) {
            keys.push(KeySlot {
                note: note + 1,
                kind: KeyKind::Black,
                white_index: slot,
            });
        }
    }
    keys
}

/// Visual state of every key, one map per rank.
#[derive(Debug, Clone)]
pub struct Keyboard {
    white: BTreeMap<u8, KeyState>,
    black: BTreeMap<u8, KeyState>,
}

impl Keyboard {
    pub fn new() -> Self {
        let mut white = BTreeMap::new();
        let mut black = BTreeMap::new();
        for key in key_layout() {
            match key.kind {
                KeyKind::White => white.insert(key.note, KeyState::Idle),
                KeyKind::Black => black.insert(key.note, KeyState::Idle),
            };
        }
        Self { white, black }
    }

    fn rank(&self, kind: KeyKind) -> &BTreeMap<u8, KeyState> {
        match kind {
            KeyKind::White => &self.white,
            KeyKind::Black => &self.black,
        }
    }

    pub fn state(&self, note: u8, kind: KeyKind) -> Option<KeyState> {
        self.rank(kind).get(&note).copied()
    }

    pub fn contains(&self, note: u8) -> bool {
        self.white.contains_key(&note) || self.black.contains_key(&note)
    }

    /// Set every key carrying `note`. Returns false if no key does.
    pub fn set(&mut self, note: u8, state: KeyState) -> bool {
        let mut hit = false;
        for rank in [&mut self.white, &mut self.black] {
            if let Some(s) = rank.get_mut(&note) {
                *s = state;
                hit = true;
            }
        }
        hit
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn active_notes(&self) -> Vec<u8> {
        let mut notes: Vec<u8> = self
            .white
            .iter()
            .chain(self.black.iter())
            .filter(|(_, s)| **s == KeyState::Active)
            .map(|(n, _)| *n)
            .collect();
        notes.sort_unstable();
        notes.dedup();
        notes
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

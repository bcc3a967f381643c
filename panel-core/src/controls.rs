use std::ops::RangeInclusive;

pub const VOLUME_RANGE: RangeInclusive<u8> = 0..=127;
pub const DEFAULT_VOLUME: u8 = 100;

pub const OCTAVE_RANGE: RangeInclusive<i8> = -2..=2;
pub const DEFAULT_OCTAVE: i8 = 0;

/// Clamp a raw slider value into the volume range.
pub fn clamp_volume(value: i32) -> u8 {
    value.clamp(*VOLUME_RANGE.start() as i32, *VOLUME_RANGE.end() as i32) as u8
}

/// Clamp a raw slider value into the octave offset range.
pub fn clamp_octave(value: i32) -> i8 {
    value.clamp(*OCTAVE_RANGE.start() as i32, *OCTAVE_RANGE.end() as i32) as i8
}

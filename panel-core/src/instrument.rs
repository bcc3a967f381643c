/// Voice presets offered by the instrument selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Piano,
    ElectricPiano,
    Organ,
    Guitar,
    Bass,
    Strings,
    Brass,
    Synth,
}

impl Instrument {
    /// Presets in combo-box order.
    pub const VARIANTS: &'static [Instrument] = &[
        Instrument::Piano,
        Instrument::ElectricPiano,
        Instrument::Organ,
        Instrument::Guitar,
        Instrument::Bass,
        Instrument::Strings,
        Instrument::Brass,
        Instrument::Synth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Piano => "Piano",
            Instrument::ElectricPiano => "Electric Piano",
            Instrument::Organ => "Organ",
            Instrument::Guitar => "Guitar",
            Instrument::Bass => "Bass",
            Instrument::Strings => "Strings",
            Instrument::Brass => "Brass",
            Instrument::Synth => "Synth",
        }
    }

    /// Out-of-range indices clamp to the last preset.
    pub fn from_index(index: usize) -> Self {
        Self::VARIANTS[index.min(Self::VARIANTS.len() - 1)]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Default for Instrument {
    fn default() -> Self {
        Self::VARIANTS[0]
    }
}

//! Packing primitives for 32-bit RGBA words.
//!
//! Every color type in this crate stores its channels packed into one
//! `u32`: red in bits 31-24, green in 23-16, blue in 15-8, alpha in 7-0.
//! Serializing the word with [`u32::to_be_bytes`] therefore yields the
//! R,G,B,A byte order that image interop expects.

/// One of the four 8-bit components of a packed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// Bit offset of this channel within the packed word.
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::Red => 24,
            Self::Green => 16,
            Self::Blue => 8,
            Self::Alpha => 0,
        }
    }

    #[must_use]
    pub const fn mask(self) -> u32 {
        0xFF << self.shift()
    }
}

/// Packs four channel bytes into a word.
#[must_use]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

/// Inverse of [`pack`], in R,G,B,A order.
#[must_use]
pub const fn unpack(word: u32) -> [u8; 4] {
    [
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    ]
}

#[must_use]
pub const fn get(word: u32, channel: Channel) -> u8 {
    (word >> channel.shift()) as u8
}

/// Replaces the 8 bits belonging to `channel`, leaving the other 24
/// bits untouched.
#[must_use]
pub const fn set(word: u32, channel: Channel, value: u8) -> u32 {
    (word & !channel.mask()) | ((value as u32) << channel.shift())
}

/// Maps a channel byte onto the unit interval.
#[must_use]
pub fn normalize(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

/// Maps a unit-interval value back onto a channel byte.
///
/// The value is clamped to `[0.0, 1.0]` first (NaN counts as 0), then
/// `value * 255` is truncated. Truncation round-trips [`normalize`]
/// exactly for every byte.
#[must_use]
pub fn denormalize(value: f64) -> u8 {
    if value >= 1.0 {
        u8::MAX
    } else if value > 0.0 {
        (value * 255.0) as u8
    } else {
        // Negative, zero, or NaN.
        0
    }
}

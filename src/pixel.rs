use crate::channel::{self, Channel};

/// A packed 32-bit RGBA pixel, the element type of an
/// [`Image`](crate::Image) buffer.
///
/// The channel byte layout is described in the [`channel`] module. The
/// packed word and the channel accessors are always consistent: each
/// setter rewrites only its own 8 bits.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Pixel {
    bits: u32,
}

impl Pixel {
    pub const WHITE: Self = Self::from_bits(0xFFFF_FFFF);
    pub const BLACK: Self = Self::from_bits(0x0000_00FF);
    pub const CLEAR: Self = Self::from_bits(0x0000_0000);
    pub const RED: Self = Self::from_bits(0xFF00_00FF);
    pub const ORANGE: Self = Self::from_bits(0xFF80_00FF);
    pub const YELLOW: Self = Self::from_bits(0xFFFF_00FF);
    pub const GREEN: Self = Self::from_bits(0x00FF_00FF);
    pub const TEAL: Self = Self::from_bits(0x00FF_80FF);
    pub const BLUE: Self = Self::from_bits(0x0000_FFFF);
    pub const MAGENTA: Self = Self::from_bits(0xFF00_FFFF);
    pub const CYAN: Self = Self::from_bits(0x00FF_FFFF);

    /// The flat surface normal, for normal-map buffers.
    pub const NORMAL: Self = Self::from_bits(0x8080_FFFF);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    #[must_use]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_bits(channel::pack(r, g, b, a))
    }

    /// Builds a pixel from normalized channel values.
    ///
    /// Out-of-range values clamp per [`channel::denormalize`].
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_channels(
            channel::denormalize(r),
            channel::denormalize(g),
            channel::denormalize(b),
            channel::denormalize(a),
        )
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// The channel bytes in R,G,B,A order.
    #[must_use]
    pub const fn channel_array(self) -> [u8; 4] {
        channel::unpack(self.bits)
    }

    #[must_use]
    pub const fn red_bits(self) -> u8 {
        channel::get(self.bits, Channel::Red)
    }

    #[must_use]
    pub const fn green_bits(self) -> u8 {
        channel::get(self.bits, Channel::Green)
    }

    #[must_use]
    pub const fn blue_bits(self) -> u8 {
        channel::get(self.bits, Channel::Blue)
    }

    #[must_use]
    pub const fn alpha_bits(self) -> u8 {
        channel::get(self.bits, Channel::Alpha)
    }

    pub fn set_red_bits(&mut self, value: u8) {
        self.bits = channel::set(self.bits, Channel::Red, value);
    }

    pub fn set_green_bits(&mut self, value: u8) {
        self.bits = channel::set(self.bits, Channel::Green, value);
    }

    pub fn set_blue_bits(&mut self, value: u8) {
        self.bits = channel::set(self.bits, Channel::Blue, value);
    }

    pub fn set_alpha_bits(&mut self, value: u8) {
        self.bits = channel::set(self.bits, Channel::Alpha, value);
    }

    #[must_use]
    pub fn red(self) -> f64 {
        channel::normalize(self.red_bits())
    }

    #[must_use]
    pub fn green(self) -> f64 {
        channel::normalize(self.green_bits())
    }

    #[must_use]
    pub fn blue(self) -> f64 {
        channel::normalize(self.blue_bits())
    }

    #[must_use]
    pub fn alpha(self) -> f64 {
        channel::normalize(self.alpha_bits())
    }

    pub fn set_red(&mut self, value: f64) {
        self.set_red_bits(channel::denormalize(value));
    }

    pub fn set_green(&mut self, value: f64) {
        self.set_green_bits(channel::denormalize(value));
    }

    pub fn set_blue(&mut self, value: f64) {
        self.set_blue_bits(channel::denormalize(value));
    }

    pub fn set_alpha(&mut self, value: f64) {
        self.set_alpha_bits(channel::denormalize(value));
    }

    #[must_use]
    pub fn with_red(self, value: f64) -> Self {
        Self::new(value, self.green(), self.blue(), self.alpha())
    }

    #[must_use]
    pub fn with_green(self, value: f64) -> Self {
        Self::new(self.red(), value, self.blue(), self.alpha())
    }

    #[must_use]
    pub fn with_blue(self, value: f64) -> Self {
        Self::new(self.red(), self.green(), value, self.alpha())
    }

    #[must_use]
    pub fn with_alpha(self, value: f64) -> Self {
        Self::new(self.red(), self.green(), self.blue(), value)
    }

    /// RGB scaled by alpha; alpha itself is unchanged.
    #[must_use]
    pub fn premultiplied(self) -> Self {
        let a = self.alpha();
        Self::new(self.red() * a, self.green() * a, self.blue() * a, a)
    }

    /// Composites `other` over `self` with straight-alpha inputs.
    ///
    /// An opaque `other` fully occludes `self`. The operation is
    /// order-dependent; see [`crate::Color::mixed`] for the same formula
    /// at the API surface.
    #[must_use]
    pub fn mixed(self, other: Self) -> Self {
        let keep = 1.0 - other.alpha();
        Self::new(
            self.red() * self.alpha() * keep + other.red() * other.alpha(),
            self.green() * self.alpha() * keep + other.green() * other.alpha(),
            self.blue() * self.alpha() * keep + other.blue() * other.alpha(),
            self.alpha() * keep + other.alpha(),
        )
    }

    pub fn mix(&mut self, other: Self) {
        *self = self.mixed(other);
    }
}

impl std::fmt::Debug for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pixel(#{:08X})", self.bits)
    }
}

impl From<u32> for Pixel {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.bits
    }
}

impl From<crate::Color> for Pixel {
    fn from(color: crate::Color) -> Self {
        Self::from_bits(color.bits())
    }
}

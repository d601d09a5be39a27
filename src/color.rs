use rand::Rng;

use crate::channel::{self, Channel};

/// Hue, saturation, and value, each on the unit interval.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue, saturation, and lightness, each on the unit interval.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A packed 32-bit RGBA color.
///
/// `Color` shares its bit layout with [`Pixel`](crate::Pixel), red in
/// bits 31-24 down to alpha in bits 7-0, and adds the conversions an
/// API surface wants: HSV and HSL views, compositing, and a named
/// palette. Conversions between the two types are bit-identical.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Color {
    bits: u32,
}

impl Color {
    pub const CLEAR: Self = Self::from_bits(0x0000_0000);
    pub const WHITE: Self = Self::from_bits(0xFFFF_FFFF);
    pub const BLACK: Self = Self::from_bits(0x0000_00FF);

    pub const RED: Self = Self::from_bits(0xFF00_00FF);
    pub const ORANGE: Self = Self::from_bits(0xFF80_00FF);
    pub const YELLOW: Self = Self::from_bits(0xFFFF_00FF);
    pub const GREEN: Self = Self::from_bits(0x00FF_00FF);
    pub const TEAL: Self = Self::from_bits(0x00FF_80FF);
    pub const CYAN: Self = Self::from_bits(0x00FF_FFFF);
    pub const SKY: Self = Self::from_bits(0x0080_FFFF);
    pub const BLUE: Self = Self::from_bits(0x0000_FFFF);
    pub const PURPLE: Self = Self::from_bits(0x8000_FFFF);
    pub const MAGENTA: Self = Self::from_bits(0xFF00_FFFF);
    pub const HOT_PINK: Self = Self::from_bits(0xFF00_80FF);
    pub const PINK: Self = Self::from_bits(0xFF80_BFFF);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    #[must_use]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_bits(channel::pack(r, g, b, a))
    }

    /// Builds a color from normalized channel values, clamped per
    /// [`channel::denormalize`].
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
    pub fn gray(white: f64, alpha: f64) -> Self {
        Self::new(white, white, white, alpha)
    }

    #[must_use]
    pub fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(hsv.h, hsv.s, hsv.v);
        Self::new(r, g, b, alpha)
    }

    #[must_use]
    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::new(r, g, b, alpha)
    }

    /// A color with uniformly random channel bytes and the given alpha
    /// byte.
    #[must_use]
    pub fn random(alpha: u8) -> Self {
        let mut rng = rand::thread_rng();
        Self::from_channels(rng.gen(), rng.gen(), rng.gen(), alpha)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

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

    /// The HSV view of this color's RGB channels.
    ///
    /// Degenerate colors (all channels equal) report hue 0 and
    /// saturation 0 rather than NaN.
    #[must_use]
    pub fn hsv(self) -> Hsv {
        let (h, s, v) = rgb_to_hsv(self.red(), self.green(), self.blue());
        Hsv { h, s, v }
    }

    /// The HSL view of this color's RGB channels, with the same
    /// degenerate-input rule as [`Color::hsv`].
    #[must_use]
    pub fn hsl(self) -> Hsl {
        let (h, s, l) = rgb_to_hsl(self.red(), self.green(), self.blue());
        Hsl { h, s, l }
    }

    /// RGB scaled by alpha; alpha itself is unchanged.
    #[must_use]
    pub fn premultiplied(self) -> Self {
        let a = self.alpha();
        Self::new(self.red() * a, self.green() * a, self.blue() * a, a)
    }

    /// Composites `other` over `self` with straight-alpha inputs:
    ///
    /// ```text
    /// out.c = self.c * self.a * (1 - other.a) + other.c * other.a
    /// out.a = self.a * (1 - other.a) + other.a
    /// ```
    ///
    /// An opaque `other` fully occludes `self`; the operation is not
    /// commutative.
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

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color(#{:08X})", self.bits)
    }
}

impl From<u32> for Color {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.bits
    }
}

impl From<crate::Pixel> for Color {
    fn from(pixel: crate::Pixel) -> Self {
        Self::from_bits(pixel.bits())
    }
}

impl std::ops::Mul<f64> for Color {
    type Output = Self;

    /// Scales RGB by `rhs`, leaving alpha unchanged.
    fn mul(self, rhs: f64) -> Self {
        Self::new(
            self.red() * rhs,
            self.green() * rhs,
            self.blue() * rhs,
            self.alpha(),
        )
    }
}

/// Decomposes a hue in `[0, 6)` into an RGB triple from chroma `c` and
/// secondary component `x`, one arm per 60-degree sector.
fn sector_rgb(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = (h * 6.0).rem_euclid(6.0);
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = sector_rgb(h, c, x);
    (r + m, g + m, b + m)
}

fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, max);
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (sector / 6.0, delta / max, max)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = (h * 6.0).rem_euclid(6.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = sector_rgb(h, c, x);
    (r + m, g + m, b + m)
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (sector / 6.0, delta / (1.0 - (2.0 * l - 1.0).abs()), l)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // Tolerance for conversions that pass through 8-bit channels; one
    // quantization step is 1/255.
    const QUANTIZED_EPS: f64 = 2.5e-3;

    #[test]
    fn pure_red_hsv_is_exact() {
        let hsv = Color::new(1.0, 0.0, 0.0, 1.0).hsv();
        assert_eq!(hsv, Hsv { h: 0.0, s: 1.0, v: 1.0 });
    }

    #[test]
    fn sector_boundaries_are_exact() {
        // Fully saturated boundary hues hit exact channel bytes, so the
        // round trip through a Color does not lose anything.
        for (i, expected) in [
            [255u8, 0, 0, 255],
            [255, 255, 0, 255],
            [0, 255, 0, 255],
            [0, 255, 255, 255],
            [0, 0, 255, 255],
            [255, 0, 255, 255],
        ]
        .into_iter()
        .enumerate()
        {
            let h = i as f64 / 6.0;
            let color = Color::from_hsv(Hsv { h, s: 1.0, v: 1.0 }, 1.0);
            assert_eq!(color.channel_array(), expected, "sector {i}");

            let hsv = color.hsv();
            assert_relative_eq!(hsv.h, h, epsilon = 1e-12);
            assert_eq!(hsv.s, 1.0);
            assert_eq!(hsv.v, 1.0);
        }
    }

    #[test]
    fn hsv_round_trip_f64() {
        for sector in 0..6 {
            for frac in [0.0, 0.21, 0.5, 0.83] {
                let h = (sector as f64 + frac) / 6.0;
                for s in [0.2, 0.65, 1.0] {
                    for v in [0.4, 1.0] {
                        let (r, g, b) = hsv_to_rgb(h, s, v);
                        let (h2, s2, v2) = rgb_to_hsv(r, g, b);
                        assert_relative_eq!(h2, h, epsilon = 1e-9);
                        assert_relative_eq!(s2, s, epsilon = 1e-9);
                        assert_relative_eq!(v2, v, epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn hsl_round_trip_f64() {
        for sector in 0..6 {
            for frac in [0.0, 0.21, 0.5, 0.83] {
                let h = (sector as f64 + frac) / 6.0;
                for s in [0.2, 0.65, 1.0] {
                    for l in [0.25, 0.5, 0.75] {
                        let (r, g, b) = hsl_to_rgb(h, s, l);
                        let (h2, s2, l2) = rgb_to_hsl(r, g, b);
                        assert_relative_eq!(h2, h, epsilon = 1e-9);
                        assert_relative_eq!(s2, s, epsilon = 1e-9);
                        assert_relative_eq!(l2, l, epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn hsv_round_trip_quantized() {
        for sector in 0..6 {
            for frac in [0.1, 0.5, 0.9] {
                let h = (sector as f64 + frac) / 6.0;
                let color = Color::from_hsv(Hsv { h, s: 1.0, v: 1.0 }, 1.0);
                let hsv = color.hsv();
                assert_relative_eq!(hsv.h, h, epsilon = QUANTIZED_EPS);
                assert_relative_eq!(hsv.s, 1.0, epsilon = QUANTIZED_EPS);
                assert_relative_eq!(hsv.v, 1.0, epsilon = QUANTIZED_EPS);
            }
        }
    }

    #[test]
    fn hsv_degenerate_inputs() {
        let gray = Color::gray(0.5, 1.0).hsv();
        assert_eq!((gray.h, gray.s), (0.0, 0.0));

        let black = Color::BLACK.hsv();
        assert_eq!(black, Hsv { h: 0.0, s: 0.0, v: 0.0 });

        // Desaturated colors keep their value channel.
        assert_eq!(Color::WHITE.hsv().v, 1.0);
        assert_eq!(Color::WHITE.hsl().l, 1.0);
    }

    #[test]
    fn hsl_lightness_midpoint() {
        let hsl = Color::RED.hsl();
        assert_relative_eq!(hsl.l, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hsl.s, 1.0, epsilon = 1e-12);
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn blue_over_white() {
        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        let blue = Color::new(0.0, 0.0, 1.0, 0.5);

        let out = white.mixed(blue);
        assert_eq!(out.channel_array(), [128, 128, 255, 255]);

        assert_relative_eq!(out.red(), 0.5, epsilon = QUANTIZED_EPS);
        assert_relative_eq!(out.green(), 0.5, epsilon = QUANTIZED_EPS);
        assert_eq!(out.blue(), 1.0);
        assert_eq!(out.alpha(), 1.0);
    }

    #[test]
    fn opaque_overlay_occludes() {
        let base = Color::new(0.3, 0.9, 0.1, 0.7);
        assert_eq!(base.mixed(Color::MAGENTA), Color::MAGENTA);
    }

    #[test]
    fn clear_overlay_keeps_opaque_base() {
        let base = Color::from_channels(31, 64, 200, 255);
        assert_eq!(base.mixed(Color::CLEAR), base);
    }

    #[test]
    fn mixing_is_order_dependent() {
        let a = Color::new(1.0, 0.0, 0.0, 0.5);
        let b = Color::new(0.0, 0.0, 1.0, 0.8);
        assert_ne!(a.mixed(b), b.mixed(a));
    }

    #[test]
    fn scaling_leaves_alpha() {
        let color = Color::new(1.0, 0.5, 0.25, 0.5) * 0.5;
        assert_eq!(color.alpha_bits(), 127);
        assert_eq!(color.red_bits(), 127);

        // Scaling clamps instead of wrapping.
        let bright = Color::new(0.8, 0.8, 0.8, 1.0) * 10.0;
        assert_eq!(bright.channel_array(), [255, 255, 255, 255]);
    }

    #[test]
    fn palette_agrees_with_pixel_palette() {
        assert_eq!(Color::RED.bits(), crate::Pixel::RED.bits());
        assert_eq!(Color::TEAL.bits(), crate::Pixel::TEAL.bits());
        assert_eq!(u32::from(Color::from(crate::Pixel::ORANGE)), 0xFF80_00FF);
    }

    #[test]
    fn random_respects_alpha() {
        for _ in 0..32 {
            assert_eq!(Color::random(77).alpha_bits(), 77);
        }
    }
}

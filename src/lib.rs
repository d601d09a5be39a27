//! Value types for pixel data, color math, and window geometry.
//!
//! Everything in this crate is plain data: packed RGBA [`Pixel`]s and
//! [`Color`]s (red in bits 31-24 down to alpha in bits 7-0), owned
//! [`Image`] buffers, window geometry, and monitor [`GammaRamp`]s. A
//! windowing wrapper builds on these types; none of them call into a
//! native library. The interop contract is a byte layout:
//! [`Image::to_rgba_bytes`] emits `width * height * 4` bytes, row-major,
//! R,G,B,A per pixel.

pub mod channel;
pub mod limits;

mod color;
mod geometry;
mod image;
mod pixel;
mod ramp;

pub use self::{
    color::{Color, Hsl, Hsv},
    geometry::{ContentScale, Extent, Margins, Point, Rect, Unit},
    image::{Error as ImageError, Image},
    pixel::Pixel,
    ramp::{Error as RampError, GammaRamp, GammaStop},
};

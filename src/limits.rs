//! Static limits and constraints.

/// The largest width or height an [`Image`](crate::Image) can have.
pub const IMAGE_EXTENT_MAX: u32 = 8192;

/// The number of stops in a generated gamma ramp. Some display drivers
/// reject any other size.
pub const GAMMA_RAMP_SIZE: usize = 256;

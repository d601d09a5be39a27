use crate::limits::GAMMA_RAMP_SIZE;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the gamma exponent must be finite and greater than zero")]
    InvalidExponent,
    #[error("a gamma ramp needs at least two stops")]
    TooFewStops,
    #[error("gamma ramp channel planes must have equal lengths")]
    PlaneMismatch,
}

/// One entry of a gamma ramp: a 16-bit response level per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaStop {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl GammaStop {
    /// A stop with the same level on all three channels.
    #[must_use]
    pub const fn gray(level: u16) -> Self {
        Self {
            red: level,
            green: level,
            blue: level,
        }
    }
}

/// A monitor gamma ramp: the per-channel response curve a display
/// applies to output levels.
///
/// This is the value half of gamma control; handing the ramp to a
/// display belongs to the native wrapper layer, which marshals the
/// three channel planes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaRamp {
    stops: Vec<GammaStop>,
}

impl GammaRamp {
    pub fn from_stops(stops: Vec<GammaStop>) -> Result<Self, Error> {
        if stops.len() < 2 {
            return Err(Error::TooFewStops);
        }
        Ok(Self { stops })
    }

    /// Rebuilds a ramp from the three channel planes a native monitor
    /// query reports.
    pub fn from_planes(red: &[u16], green: &[u16], blue: &[u16]) -> Result<Self, Error> {
        if red.len() != green.len() || green.len() != blue.len() {
            return Err(Error::PlaneMismatch);
        }

        Self::from_stops(
            red.iter()
                .zip(green)
                .zip(blue)
                .map(|((&red, &green), &blue)| GammaStop { red, green, blue })
                .collect(),
        )
    }

    /// The identity ramp: output level equals input level.
    pub fn linear(size: usize) -> Result<Self, Error> {
        if size < 2 {
            return Err(Error::TooFewStops);
        }

        let last = (size - 1) as f32;
        Ok(Self {
            stops: (0..size)
                .map(|i| GammaStop::gray(level(i as f32 / last, 1.0)))
                .collect(),
        })
    }

    /// The power-law ramp that applying gamma `exponent` produces:
    /// `level[i] = min(1, (i / (n-1)) ^ (1/exponent)) * 65535`, rounded,
    /// over [`GAMMA_RAMP_SIZE`] stops.
    ///
    /// A non-finite or non-positive exponent is rejected instead of
    /// letting NaN reach the curve.
    pub fn from_exponent(exponent: f32) -> Result<Self, Error> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(Error::InvalidExponent);
        }

        let inverse = 1.0 / exponent;
        let last = (GAMMA_RAMP_SIZE - 1) as f32;
        Ok(Self {
            stops: (0..GAMMA_RAMP_SIZE)
                .map(|i| GammaStop::gray(level(i as f32 / last, inverse)))
                .collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[must_use]
    pub fn stops(&self) -> &[GammaStop] {
        &self.stops
    }

    #[must_use]
    pub fn red_plane(&self) -> Vec<u16> {
        self.stops.iter().map(|stop| stop.red).collect()
    }

    #[must_use]
    pub fn green_plane(&self) -> Vec<u16> {
        self.stops.iter().map(|stop| stop.green).collect()
    }

    #[must_use]
    pub fn blue_plane(&self) -> Vec<u16> {
        self.stops.iter().map(|stop| stop.blue).collect()
    }
}

fn level(input: f32, inverse_exponent: f32) -> u16 {
    let value = input.powf(inverse_exponent);
    (value * 65535.0 + 0.5).min(65535.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ramp_endpoints() {
        let ramp = GammaRamp::linear(256).unwrap();
        assert_eq!(ramp.len(), 256);
        assert_eq!(ramp.stops()[0], GammaStop::gray(0));
        assert_eq!(ramp.stops()[255], GammaStop::gray(65535));
        assert_eq!(ramp.stops()[128], GammaStop::gray(32896));
    }

    #[test]
    fn unit_exponent_is_linear() {
        assert_eq!(
            GammaRamp::from_exponent(1.0).unwrap(),
            GammaRamp::linear(GAMMA_RAMP_SIZE).unwrap()
        );
    }

    #[test]
    fn curve_is_monotonic() {
        for exponent in [0.5, 1.0, 2.2, 4.0] {
            let ramp = GammaRamp::from_exponent(exponent).unwrap();
            assert_eq!(ramp.stops()[0].red, 0);
            assert_eq!(ramp.stops()[255].red, 65535);

            for pair in ramp.stops().windows(2) {
                assert!(pair[0].red <= pair[1].red, "exponent {exponent}");
            }
        }
    }

    #[test]
    fn invalid_exponents_are_rejected() {
        for exponent in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GammaRamp::from_exponent(exponent),
                Err(Error::InvalidExponent)
            ));
        }
    }

    #[test]
    fn planes_round_trip() {
        let ramp = GammaRamp::from_exponent(2.2).unwrap();
        let rebuilt =
            GammaRamp::from_planes(&ramp.red_plane(), &ramp.green_plane(), &ramp.blue_plane())
                .unwrap();
        assert_eq!(rebuilt, ramp);
    }

    #[test]
    fn mismatched_planes_are_rejected() {
        assert!(matches!(
            GammaRamp::from_planes(&[0, 1], &[0, 1, 2], &[0, 1]),
            Err(Error::PlaneMismatch)
        ));
        assert!(matches!(
            GammaRamp::from_planes(&[0], &[0], &[0]),
            Err(Error::TooFewStops)
        ));
    }
}

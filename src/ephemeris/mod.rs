use crate::prelude::{Body, Epoch, Error, Position};

/// Computed altitude and azimuth of a [Body], as seen from a [Position].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HorizontalCoordinates {
    /// True geometric altitude (degrees)
    pub altitude_deg: f64,
    /// True azimuth (degrees, clockwise from true north)
    pub azimuth_deg: f64,
}

/// [EphemerisSource] provides the true altitude and azimuth of a [Body],
/// which is what each sextant altitude is compared to.
/// We do not compute ephemerides ourselves: plug in your preferred
/// astronomical library here.
pub trait EphemerisSource {
    /// Returns the true geometric [HorizontalCoordinates] of this [Body]
    /// seen from `position` at instant `t`. This must be deterministic
    /// for a given (body, position, instant) triplet.
    /// Any failure (body below the horizon, instant not covered..)
    /// should be reported as [Error::Ephemeris]: it is propagated as is.
    fn horizontal_coordinates(
        &self,
        body: &Body,
        position: &Position,
        t: Epoch,
    ) -> Result<HorizontalCoordinates, Error>;
}

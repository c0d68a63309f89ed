//! Intercept method (Marcq Saint-Hilaire)
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::NAUTICAL_MILES_PER_DEGREE,
    correction::total_correction,
    dead_reckoning::advance_position,
    position::normalize_azimuth,
    prelude::{
        Config, CorrectedAltitude, EphemerisSource, Epoch, Error, Motion, Observation, Position,
    },
};

/// Compares a corrected (observed) altitude to the true altitude computed
/// at the assumed position.
/// ## Returns
/// - intercept in nautical miles: positive when the observer is closer
///   to the body than the assumed position (toward), negative otherwise (away).
/// - azimuth (degrees) of the body, passed through.
pub fn compute_intercept(
    corrected_altitude_deg: f64,
    true_altitude_deg: f64,
    true_azimuth_deg: f64,
) -> (f64, f64) {
    (
        (corrected_altitude_deg - true_altitude_deg) * NAUTICAL_MILES_PER_DEGREE,
        true_azimuth_deg,
    )
}

/// Reduced [Sight]: a line of position expressed by its intercept and
/// azimuth from an assumed position.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sight {
    /// Signed intercept (nautical miles), positive toward the body
    pub intercept_nm: f64,
    /// Azimuth of the body (degrees), within [0°, 360°)
    pub azimuth_deg: f64,
    /// Assumed [Position] the intercept refers to
    pub assumed: Position,
    /// Instant of observation
    pub t: Epoch,
    /// Measurement error estimate (degrees), used as an inverse weight
    pub error_deg: Option<f64>,
    /// Platform [Motion] at the time of the sight
    pub motion: Option<Motion>,
}

impl Sight {
    /// Creates a new [Sight]. Azimuth is normalized to [0°, 360°).
    /// Values are only checked when the [Sight] takes part in a fix,
    /// see [Self::validate].
    pub fn new(intercept_nm: f64, azimuth_deg: f64, assumed: Position, t: Epoch) -> Self {
        Self {
            intercept_nm,
            azimuth_deg: normalize_azimuth(azimuth_deg),
            assumed,
            t,
            error_deg: None,
            motion: None,
        }
    }

    /// Copies and returns [Sight] with a measurement error estimate (degrees),
    /// which must be strictly positive.
    pub fn with_error(&self, error_deg: f64) -> Result<Self, Error> {
        if !(error_deg > 0.0 && error_deg.is_finite()) {
            return Err(Error::SightError(error_deg));
        }
        let mut s = *self;
        s.error_deg = Some(error_deg);
        Ok(s)
    }

    /// Copies and returns [Sight] with platform [Motion].
    pub fn with_motion(&self, motion: Motion) -> Self {
        let mut s = *self;
        s.motion = Some(motion);
        s
    }

    /// Verifies this [Sight] can take part in a fix: finite intercept
    /// and azimuth, and a strictly positive error estimate when specified.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.intercept_nm.is_finite() {
            return Err(Error::InterceptRange(self.intercept_nm));
        }
        if !self.azimuth_deg.is_finite() {
            return Err(Error::AzimuthRange(self.azimuth_deg));
        }
        match self.error_deg {
            Some(error_deg) if !(error_deg > 0.0 && error_deg.is_finite()) => {
                Err(Error::SightError(error_deg))
            }
            _ => Ok(()),
        }
    }

    /// Reduces an [Observation]: corrects the sextant altitude, obtains the
    /// true altitude and azimuth at the assumed position from the
    /// [EphemerisSource], then forms the intercept.
    /// ## Input
    /// - observation: [Observation] to reduce
    /// - cfg: [Config] policy options. Environment and limb come from the
    ///   [Observation] itself.
    /// - ephemeris: [EphemerisSource]
    pub fn reduce<E: EphemerisSource>(
        observation: &Observation,
        cfg: &Config,
        ephemeris: &E,
    ) -> Result<(Self, CorrectedAltitude), Error> {
        let body = observation.body();
        let t = observation.epoch();
        let assumed = observation.assumed_position();

        let corrected = total_correction(
            observation.altitude_deg(),
            &body,
            &observation.correction_config(cfg),
        )?;

        let computed = ephemeris.horizontal_coordinates(&body, &assumed, t)?;

        let (intercept_nm, azimuth_deg) = compute_intercept(
            corrected.corrected_deg,
            computed.altitude_deg,
            computed.azimuth_deg,
        );

        debug!(
            "{} ({}) ho={:.4}° hc={:.4}° intercept={:.2}nm zn={:.1}°",
            t, body, corrected.corrected_deg, computed.altitude_deg, intercept_nm, azimuth_deg
        );

        let mut sight = Self::new(intercept_nm, azimuth_deg, assumed, t);
        sight.error_deg = observation.error_deg();
        sight.motion = observation.motion();

        Ok((sight, corrected))
    }

    /// Weight of this [Sight] in a fix: inverse of its error estimate,
    /// 1 when unspecified.
    pub fn weight(&self) -> f64 {
        self.error_deg.map(|error| 1.0 / error).unwrap_or(1.0)
    }

    /// Point of the line of position closest to the assumed position,
    /// `intercept` away along the azimuth (or its reciprocal, when away).
    pub fn intercept_point(&self) -> Position {
        self.assumed.destination(self.azimuth_deg, self.intercept_nm)
    }

    /// Returns both ends of the line of position, `half_length_nm`
    /// on either side of the intercept point, perpendicular to the azimuth.
    pub fn line_of_position(&self, half_length_nm: f64) -> (Position, Position) {
        let point = self.intercept_point();
        (
            point.destination(normalize_azimuth(self.azimuth_deg - 90.0), half_length_nm),
            point.destination(normalize_azimuth(self.azimuth_deg + 90.0), half_length_nm),
        )
    }

    /// Advances (or retards) this line of position to instant `t`, moving
    /// its assumed position along the platform [Motion].
    /// Intercept and azimuth are preserved.
    pub fn advanced_to(&self, t: Epoch, motion: &Motion) -> Result<Self, Error> {
        let assumed = advance_position(
            &self.assumed,
            self.t,
            t,
            motion.speed_knots,
            motion.course_deg,
        )?;
        let mut s = *self;
        s.assumed = assumed;
        s.t = t;
        Ok(s)
    }
}

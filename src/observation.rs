use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    correction::{validate_altitude, validate_atmosphere, validate_height},
    position::normalize_azimuth,
    prelude::{Body, Config, Error, Limb, Position},
};

/// Platform [Motion] over ground: constant speed and course,
/// used to advance lines of position in a running fix.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Motion {
    /// Speed over ground (knots)
    pub speed_knots: f64,
    /// Course over ground (degrees, clockwise from true north)
    pub course_deg: f64,
}

impl Motion {
    /// Creates a new [Motion]. Course is normalized to [0°, 360°).
    pub fn new(speed_knots: f64, course_deg: f64) -> Result<Self, Error> {
        if speed_knots < 0.0 || speed_knots.is_nan() {
            return Err(Error::NegativeSpeed(speed_knots));
        }
        Ok(Self {
            speed_knots,
            course_deg: normalize_azimuth(course_deg),
        })
    }
}

/// Meteorological and observer conditions at the time of the sight.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    /// Air temperature (°C)
    pub temperature_c: f64,
    /// Atmospheric pressure (hPa)
    pub pressure_hpa: f64,
    /// Height of eye (m)
    pub observer_height_m: f64,
}

impl Default for Environment {
    fn default() -> Self {
        let cfg = Config::default();
        Self {
            temperature_c: cfg.temperature_c,
            pressure_hpa: cfg.pressure_hpa,
            observer_height_m: cfg.observer_height_m,
        }
    }
}

/// Raw sextant [Observation]. Immutable once created: every field is
/// validated at construction and by each `with_` method.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    altitude_deg: f64,
    body: Body,
    t: Epoch,
    assumed: Position,
    environment: Environment,
    limb: Limb,
    motion: Option<Motion>,
    error_deg: Option<f64>,
}

impl Observation {
    /// Creates a new [Observation] of this [Body], in standard conditions,
    /// observed from sea level at its center.
    /// ## Input
    /// - altitude_deg: sextant altitude, within [-1°, 90°]
    /// - body: observed [Body]
    /// - t: instant of observation
    /// - assumed: assumed [Position] at that instant
    pub fn new(altitude_deg: f64, body: Body, t: Epoch, assumed: Position) -> Result<Self, Error> {
        validate_altitude(altitude_deg)?;
        let assumed = Position::new(assumed.lat_deg, assumed.long_deg, assumed.height_m)?;
        Ok(Self {
            altitude_deg,
            body,
            t,
            assumed,
            environment: Environment::default(),
            limb: Limb::default(),
            motion: None,
            error_deg: None,
        })
    }

    /// Copies and returns [Observation] with updated [Environment].
    pub fn with_environment(&self, environment: Environment) -> Result<Self, Error> {
        validate_atmosphere(environment.temperature_c, environment.pressure_hpa)?;
        validate_height(environment.observer_height_m)?;
        let mut s = *self;
        s.environment = environment;
        Ok(s)
    }

    /// Copies and returns [Observation] with updated [Limb].
    pub fn with_limb(&self, limb: Limb) -> Self {
        let mut s = *self;
        s.limb = limb;
        s
    }

    /// Copies and returns [Observation] with platform [Motion].
    pub fn with_motion(&self, motion: Motion) -> Self {
        let mut s = *self;
        s.motion = Some(motion);
        s
    }

    /// Copies and returns [Observation] with a measurement error
    /// estimate (degrees), which must be strictly positive.
    pub fn with_error(&self, error_deg: f64) -> Result<Self, Error> {
        if !(error_deg > 0.0 && error_deg.is_finite()) {
            return Err(Error::SightError(error_deg));
        }
        let mut s = *self;
        s.error_deg = Some(error_deg);
        Ok(s)
    }

    /// Raw sextant altitude (degrees)
    pub fn altitude_deg(&self) -> f64 {
        self.altitude_deg
    }

    /// Observed [Body]
    pub fn body(&self) -> Body {
        self.body
    }

    /// Instant of observation
    pub fn epoch(&self) -> Epoch {
        self.t
    }

    /// Assumed [Position]
    pub fn assumed_position(&self) -> Position {
        self.assumed
    }

    /// Observation [Environment]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Observed [Limb]
    pub fn limb(&self) -> Limb {
        self.limb
    }

    /// Platform [Motion], if any
    pub fn motion(&self) -> Option<Motion> {
        self.motion
    }

    /// Measurement error estimate (degrees), if any
    pub fn error_deg(&self) -> Option<f64> {
        self.error_deg
    }

    /// Correction [Config] for this [Observation]: its own environment and
    /// limb, on top of the policy options (refraction, navigation mode,
    /// sextant errors, solver) of `base`.
    pub fn correction_config(&self, base: &Config) -> Config {
        let mut cfg = base.clone();
        cfg.temperature_c = self.environment.temperature_c;
        cfg.pressure_hpa = self.environment.pressure_hpa;
        cfg.observer_height_m = self.environment.observer_height_m;
        cfg.limb = self.limb;
        cfg
    }
}

#[cfg(test)]
mod test {
    use super::{Environment, Motion, Observation};
    use crate::prelude::{Body, Config, Epoch, Error, Limb, NavigationMode, Position};

    fn epoch() -> Epoch {
        Epoch::from_gregorian_utc_hms(2023, 6, 15, 12, 0, 0)
    }

    #[test]
    fn observation_construction() {
        let assumed = Position::from_lat_long(40.0, -74.0).unwrap();
        let obs = Observation::new(45.0, Body::Sun, epoch(), assumed)
            .unwrap()
            .with_limb(Limb::Lower)
            .with_error(0.1)
            .unwrap()
            .with_motion(Motion::new(10.0, 45.0).unwrap());

        assert_eq!(obs.altitude_deg(), 45.0);
        assert_eq!(obs.body(), Body::Sun);
        assert_eq!(obs.epoch(), epoch());
        assert_eq!(obs.assumed_position(), assumed);
        assert_eq!(obs.limb(), Limb::Lower);
        assert_eq!(obs.error_deg(), Some(0.1));
        assert_eq!(obs.motion(), Some(Motion::new(10.0, 45.0).unwrap()));
        assert_eq!(obs.environment(), Environment::default());
    }

    #[test]
    fn observation_rejections() {
        let assumed = Position::from_lat_long(40.0, -74.0).unwrap();

        assert_eq!(
            Observation::new(95.0, Body::Sun, epoch(), assumed),
            Err(Error::AltitudeRange(95.0))
        );

        let invalid = Position {
            lat_deg: 95.0,
            long_deg: 0.0,
            height_m: 0.0,
        };
        assert_eq!(
            Observation::new(45.0, Body::Sun, epoch(), invalid),
            Err(Error::LatitudeRange(95.0))
        );

        let obs = Observation::new(45.0, Body::Sun, epoch(), assumed).unwrap();

        assert_eq!(obs.with_error(0.0), Err(Error::SightError(0.0)));
        assert_eq!(obs.with_error(-0.1), Err(Error::SightError(-0.1)));

        let environment = Environment {
            temperature_c: 10.0,
            pressure_hpa: 1010.0,
            observer_height_m: -1.0,
        };
        assert_eq!(
            obs.with_environment(environment),
            Err(Error::NegativeHeight(-1.0))
        );
    }

    #[test]
    fn motion_validation() {
        assert_eq!(Motion::new(-1.0, 0.0), Err(Error::NegativeSpeed(-1.0)));
        let motion = Motion::new(12.0, -90.0).unwrap();
        assert_eq!(motion.course_deg, 270.0);
    }

    #[test]
    fn observation_correction_config() {
        let assumed = Position::from_lat_long(40.0, -74.0).unwrap();
        let environment = Environment {
            temperature_c: 25.0,
            pressure_hpa: 1020.0,
            observer_height_m: 15.0,
        };

        let obs = Observation::new(30.0, Body::Moon, epoch(), assumed)
            .unwrap()
            .with_environment(environment)
            .unwrap()
            .with_limb(Limb::Upper);

        let base = Config::aviation_preset().with_refraction(false);
        let cfg = obs.correction_config(&base);

        assert_eq!(cfg.temperature_c, 25.0);
        assert_eq!(cfg.pressure_hpa, 1020.0);
        assert_eq!(cfg.observer_height_m, 15.0);
        assert_eq!(cfg.limb, Limb::Upper);
        assert_eq!(cfg.navigation_mode, NavigationMode::Aviation);
        assert!(!cfg.apply_refraction);
    }
}

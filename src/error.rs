use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sextant altitudes are only meaningful from slightly below the
    /// horizon up to the zenith.
    #[error("altitude {0}° is not in valid range [-1°, 90°]")]
    AltitudeRange(f64),

    #[error("temperature {0}°C is not in valid range [-100°C, 100°C]")]
    TemperatureRange(f64),

    #[error("pressure {0} hPa is not in valid range [800 hPa, 1200 hPa]")]
    PressureRange(f64),

    #[error("observer height {0} m cannot be negative")]
    NegativeHeight(f64),

    #[error("latitude {0}° is not in valid range [-90°, 90°]")]
    LatitudeRange(f64),

    #[error("longitude {0}° is not in valid range [-180°, 180°]")]
    LongitudeRange(f64),

    /// Instrument, index and personal errors are each bounded.
    #[error("sextant error {0}° is not in valid range [-1°, 1°]")]
    SextantErrorRange(f64),

    /// Per sight error estimate is used as an inverse weight.
    #[error("sight error estimate {0}° must be strictly positive")]
    SightError(f64),

    #[error("intercept {0} nm is not a finite distance")]
    InterceptRange(f64),

    #[error("azimuth {0}° is not a finite angle")]
    AzimuthRange(f64),

    #[error("platform speed {0} kn cannot be negative")]
    NegativeSpeed(f64),

    #[error("celestial body \"{0}\" is not supported")]
    UnknownBody(String),

    #[error("limb \"{0}\" is not supported (use center, upper or lower)")]
    UnknownLimb(String),

    #[error("navigation mode \"{0}\" is not supported (use marine or aviation)")]
    UnknownNavigationMode(String),

    #[error("fix quality \"{0}\" is not supported (use excellent, good, fair or poor)")]
    UnknownFixQuality(String),

    #[error("confidence level {0} is not in valid range (0, 1)")]
    InvalidConfidence(f64),

    /// Rhumb line advance is not defined close to the poles.
    #[error("cannot advance position at latitude {0}°: |latitude| must not exceed 89.9°")]
    PolarRegion(f64),

    /// A two dimensional fix requires at least two sights.
    #[error("underdetermined fix: {0} sight(s) provided, at least 2 required")]
    Underdetermined(usize),

    /// Failure reported by the [EphemerisSource](crate::prelude::EphemerisSource).
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
}

impl Error {
    /// True when a scalar input fell outside of its documented domain.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::AltitudeRange(_)
                | Self::TemperatureRange(_)
                | Self::PressureRange(_)
                | Self::NegativeHeight(_)
                | Self::LatitudeRange(_)
                | Self::LongitudeRange(_)
                | Self::SextantErrorRange(_)
                | Self::SightError(_)
                | Self::InterceptRange(_)
                | Self::AzimuthRange(_)
                | Self::NegativeSpeed(_)
                | Self::UnknownBody(_)
                | Self::UnknownLimb(_)
                | Self::UnknownNavigationMode(_)
                | Self::UnknownFixQuality(_)
                | Self::InvalidConfidence(_)
        )
    }

    /// True when a derived computation became ill-defined.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::PolarRegion(_))
    }
}

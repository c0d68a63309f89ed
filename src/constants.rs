/// Nautical miles per degree of arc (one nautical mile per arc minute)
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

/// Standard temperature (°C) of the refraction formulas
pub const STANDARD_TEMPERATURE_C: f64 = 10.0;

/// Standard pressure (hPa) of the refraction formulas
pub const STANDARD_PRESSURE_HPA: f64 = 1010.0;

/// Mean semi-diameter of the Sun (degrees)
pub const SUN_SEMI_DIAMETER_DEG: f64 = 16.0 / 60.0;

/// Mean semi-diameter of the Moon (degrees)
pub const MOON_SEMI_DIAMETER_DEG: f64 = 16.0 / 60.0;

/// Dip coefficient, in arc minutes per square root meter of height of eye
pub const DIP_ARCMIN_PER_SQRT_M: f64 = 0.97;

/// Apparent altitude (degrees) below which the low altitude refraction
/// formula applies
pub const LOW_ALTITUDE_REFRACTION_LIMIT_DEG: f64 = 15.0;

/// Highest latitude (degrees) at which we may advance a position
/// along a rhumb line
pub const MAX_DEAD_RECKONING_LATITUDE_DEG: f64 = 89.9;

/// Default Gauss-Newton convergence tolerance (degrees)
pub const DEFAULT_TOLERANCE_DEG: f64 = 1.0E-6;

/// Default Gauss-Newton iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Default error ellipse confidence level
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default condition number of the design matrix beyond which
/// the geometry is considered near-singular
pub const DEFAULT_MAX_CONDITION_NUMBER: f64 = 50.0;

/// Unit variance (nm²) used when a fix has no redundancy
/// and the residuals cannot estimate it
pub const APRIORI_UNIT_VARIANCE_NM2: f64 = 1.0;

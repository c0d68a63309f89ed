#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C},
    prelude::{Error, Limb},
};

mod sextant;
mod solver;

pub use sextant::SextantErrors;
pub use solver::SolverOpts;

/// Platform the observation is taken from. It selects which horizon
/// the altitude is measured against.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavigationMode {
    /// Marine sextant measured against the sea horizon:
    /// the dip of the horizon applies.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "marine"))]
    Marine,
    /// Bubble sextant providing an artificial horizon:
    /// there is no dip correction, whatever the flight altitude.
    #[cfg_attr(feature = "serde", serde(alias = "aviation"))]
    Aviation,
}

impl std::str::FromStr for NavigationMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "marine" => Ok(Self::Marine),
            "aviation" => Ok(Self::Aviation),
            _ => Err(Error::UnknownNavigationMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marine => write!(f, "marine"),
            Self::Aviation => write!(f, "aviation"),
        }
    }
}

fn default_apply_refraction() -> bool {
    true
}

fn default_temperature_c() -> f64 {
    STANDARD_TEMPERATURE_C
}

fn default_pressure_hpa() -> f64 {
    STANDARD_PRESSURE_HPA
}

/// [Config] gathers every option of the altitude correction chain,
/// plus the least squares [SolverOpts].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Subtract atmospheric refraction. Disable this when the altitude was
    /// already corrected, or for exercises ignoring the atmosphere.
    #[cfg_attr(feature = "serde", serde(default = "default_apply_refraction"))]
    pub apply_refraction: bool,
    /// Air temperature (°C), scales refraction.
    #[cfg_attr(feature = "serde", serde(default = "default_temperature_c"))]
    pub temperature_c: f64,
    /// Atmospheric pressure (hPa), scales refraction.
    #[cfg_attr(feature = "serde", serde(default = "default_pressure_hpa"))]
    pub pressure_hpa: f64,
    /// Height of eye above the sea (m), drives the dip of the horizon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub observer_height_m: f64,
    /// [Limb] that was brought onto the horizon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limb: Limb,
    /// [NavigationMode] (marine or aviation horizon).
    #[cfg_attr(feature = "serde", serde(default))]
    pub navigation_mode: NavigationMode,
    /// Systematic [SextantErrors], removed before any other correction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sextant: SextantErrors,
    /// Least squares [SolverOpts].
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverOpts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apply_refraction: default_apply_refraction(),
            temperature_c: default_temperature_c(),
            pressure_hpa: default_pressure_hpa(),
            observer_height_m: 0.0,
            limb: Limb::default(),
            navigation_mode: NavigationMode::default(),
            sextant: SextantErrors::default(),
            solver: SolverOpts::default(),
        }
    }
}

impl Config {
    /// Returns [Config] for bubble sextant observations taken in flight.
    /// You can then customize [Self] as you will.
    pub fn aviation_preset() -> Self {
        let mut s = Self::default();
        s.navigation_mode = NavigationMode::Aviation;
        s
    }

    /// Copies and returns [Config] with updated refraction policy.
    pub fn with_refraction(&self, apply_refraction: bool) -> Self {
        let mut s = self.clone();
        s.apply_refraction = apply_refraction;
        s
    }

    /// Copies and returns [Config] with updated atmospheric conditions.
    pub fn with_atmosphere(&self, temperature_c: f64, pressure_hpa: f64) -> Self {
        let mut s = self.clone();
        s.temperature_c = temperature_c;
        s.pressure_hpa = pressure_hpa;
        s
    }

    /// Copies and returns [Config] with updated height of eye.
    pub fn with_observer_height(&self, observer_height_m: f64) -> Self {
        let mut s = self.clone();
        s.observer_height_m = observer_height_m;
        s
    }

    /// Copies and returns [Config] with updated [Limb].
    pub fn with_limb(&self, limb: Limb) -> Self {
        let mut s = self.clone();
        s.limb = limb;
        s
    }

    /// Copies and returns [Config] with updated [NavigationMode].
    pub fn with_navigation_mode(&self, mode: NavigationMode) -> Self {
        let mut s = self.clone();
        s.navigation_mode = mode;
        s
    }

    /// Copies and returns [Config] with updated [SextantErrors].
    pub fn with_sextant_errors(&self, sextant: SextantErrors) -> Self {
        let mut s = self.clone();
        s.sextant = sextant;
        s
    }

    /// Copies and returns [Config] with updated [SolverOpts].
    pub fn with_solver_opts(&self, solver: SolverOpts) -> Self {
        let mut s = self.clone();
        s.solver = solver;
        s
    }
}

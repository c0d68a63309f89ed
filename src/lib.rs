#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod body;
mod cfg;
mod correction;
mod dead_reckoning;
mod ephemeris;
mod error;
mod intercept;
mod navigation;
mod observation;
mod position;
mod solutions;
mod solver;

// public modules
pub mod constants;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::body::{Body, Star};
    pub use crate::cfg::{Config, NavigationMode, SextantErrors, SolverOpts};
    pub use crate::correction::{dip, limb, refraction, total_correction, CorrectedAltitude, Limb};
    pub use crate::dead_reckoning::advance_position;
    pub use crate::ephemeris::{EphemerisSource, HorizontalCoordinates};
    pub use crate::error::Error;
    pub use crate::intercept::{compute_intercept, Sight};
    pub use crate::navigation::GeometricFactor;
    pub use crate::observation::{Environment, Motion, Observation};
    pub use crate::position::Position;
    pub use crate::solutions::{ErrorEllipse, FixQuality, PositionFix};
    pub use crate::solver::Solver;
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
}

// pub export
pub use error::Error;

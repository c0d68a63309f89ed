//! Sextant altitude corrections
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Body, Config, Error, NavigationMode};

mod dip;
mod limb;
mod refraction;

pub use dip::dip;
pub use limb::{limb, Limb};
pub use refraction::refraction;

pub(crate) use dip::validate_height;
pub(crate) use refraction::{validate_altitude, validate_atmosphere};

/// [CorrectedAltitude] is the true altitude of the body's center, along with
/// every correction term that led to it.
/// Terms are signed so that
/// `corrected = observed + sextant + dip - refraction + limb`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrectedAltitude {
    /// Raw sextant reading (degrees)
    pub observed_deg: f64,
    /// Systematic sextant errors removal (degrees, added)
    pub sextant_deg: f64,
    /// Dip of the horizon (degrees, added)
    pub dip_deg: f64,
    /// Atmospheric refraction (degrees, subtracted)
    pub refraction_deg: f64,
    /// Limb correction (degrees, added)
    pub limb_deg: f64,
    /// Resulting altitude (degrees)
    pub corrected_deg: f64,
}

impl CorrectedAltitude {
    /// Algebraic sum of all corrections (degrees)
    pub fn total_deg(&self) -> f64 {
        self.corrected_deg - self.observed_deg
    }

    /// Apparent altitude (degrees): the reading referred to the
    /// horizon, refraction and limb not yet accounted for.
    pub fn apparent_deg(&self) -> f64 {
        self.observed_deg + self.sextant_deg + self.dip_deg
    }
}

/// Applies the complete correction chain to a raw sextant altitude:
/// sextant errors, then dip (added), refraction of the resulting apparent
/// altitude (subtracted) and finally the limb correction (added),
/// so the result refers to the body's center.
///
/// Every input is validated before any arithmetic takes place.
/// The dip is null in [NavigationMode::Aviation].
pub fn total_correction(
    observed_deg: f64,
    body: &Body,
    cfg: &Config,
) -> Result<CorrectedAltitude, Error> {
    validate_altitude(observed_deg)?;
    validate_atmosphere(cfg.temperature_c, cfg.pressure_hpa)?;
    validate_height(cfg.observer_height_m)?;
    cfg.sextant.validate()?;

    let sextant_deg = -cfg.sextant.total_deg();

    let dip_deg = match cfg.navigation_mode {
        NavigationMode::Marine => dip(cfg.observer_height_m)?,
        NavigationMode::Aviation => 0.0,
    };

    let apparent_deg = observed_deg + sextant_deg + dip_deg;

    let refraction_deg = if cfg.apply_refraction {
        refraction::refraction_deg(apparent_deg, cfg.temperature_c, cfg.pressure_hpa)
    } else {
        0.0
    };

    let limb_deg = cfg.limb.correction_deg(body);

    let corrected_deg = apparent_deg - refraction_deg + limb_deg;

    trace!(
        "{} ({}) hs={:.4}° ie={:.4}° dip={:.4}° r={:.4}° sd={:.4}° ho={:.4}°",
        body,
        cfg.limb,
        observed_deg,
        sextant_deg,
        dip_deg,
        refraction_deg,
        limb_deg,
        corrected_deg
    );

    Ok(CorrectedAltitude {
        observed_deg,
        sextant_deg,
        dip_deg,
        refraction_deg,
        limb_deg,
        corrected_deg,
    })
}

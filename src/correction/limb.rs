use crate::prelude::{Body, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::str::FromStr;

/// Part of the body brought onto the horizon.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Limb {
    /// Center of the body (default). Points (stars, planets) are always
    /// observed this way.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "center"))]
    Center,
    /// Upper edge of the disc
    #[cfg_attr(feature = "serde", serde(alias = "upper"))]
    Upper,
    /// Lower edge of the disc
    #[cfg_attr(feature = "serde", serde(alias = "lower"))]
    Lower,
}

impl Limb {
    /// Correction (degrees) to add to a limb altitude to reach the
    /// center of this [Body].
    pub fn correction_deg(&self, body: &Body) -> f64 {
        let semi_diameter = body.semi_diameter_deg();
        match self {
            Self::Center => 0.0,
            Self::Upper => -semi_diameter,
            Self::Lower => semi_diameter,
        }
    }
}

impl std::str::FromStr for Limb {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "center" | "centre" => Ok(Self::Center),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            _ => Err(Error::UnknownLimb(s.to_string())),
        }
    }
}

impl std::fmt::Display for Limb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// Limb correction (degrees) for the body named `body_name`.
/// Upper limb sights are lowered and lower limb sights raised by the
/// semi-diameter of the Sun or the Moon. Center sights and point-like
/// bodies are not corrected. Naming an unknown body for an upper or lower
/// limb sight is an error.
pub fn limb(body_name: &str, limb: Limb) -> Result<f64, Error> {
    if limb == Limb::Center {
        return Ok(0.0);
    }
    let body = Body::from_str(body_name)?;
    Ok(limb.correction_deg(&body))
}

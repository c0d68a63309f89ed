use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Systematic sextant reading errors, in degrees.
/// Each term is signed: a positive error means the instrument reads high,
/// and the total is subtracted from the raw reading.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SextantErrors {
    /// Error specific to this instrument (arc, graduation)
    #[cfg_attr(feature = "serde", serde(default))]
    pub instrument_deg: f64,
    /// Index mirror misalignment
    #[cfg_attr(feature = "serde", serde(default))]
    pub index_deg: f64,
    /// Observer's own consistent bias
    #[cfg_attr(feature = "serde", serde(default))]
    pub personal_deg: f64,
}

impl SextantErrors {
    /// Total systematic error (degrees)
    pub fn total_deg(&self) -> f64 {
        self.instrument_deg + self.index_deg + self.personal_deg
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for error in [self.instrument_deg, self.index_deg, self.personal_deg] {
            if !(-1.0..=1.0).contains(&error) {
                return Err(Error::SextantErrorRange(error));
            }
        }
        Ok(())
    }
}

//! Least squares solver configuration

use crate::{
    constants::{
        DEFAULT_CONFIDENCE, DEFAULT_MAX_CONDITION_NUMBER, DEFAULT_MAX_ITERATIONS,
        DEFAULT_TOLERANCE_DEG,
    },
    prelude::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

const fn default_tolerance_deg() -> f64 {
    DEFAULT_TOLERANCE_DEG
}

const fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

const fn default_max_condition_number() -> f64 {
    DEFAULT_MAX_CONDITION_NUMBER
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverOpts {
    /// Maximal number of Gauss-Newton iterations. When exhausted,
    /// the last iterate is returned, flagged as not converged.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
    /// Convergence is declared once the position correction
    /// falls below this magnitude (degrees).
    #[cfg_attr(feature = "serde", serde(default = "default_tolerance_deg"))]
    pub tolerance_deg: f64,
    /// Probability enclosed by the error ellipse, within (0, 1).
    #[cfg_attr(feature = "serde", serde(default = "default_confidence"))]
    pub confidence: f64,
    /// Design matrix condition number beyond which the lines of position
    /// are considered near parallel: the fix is then labeled Poor.
    #[cfg_attr(feature = "serde", serde(default = "default_max_condition_number"))]
    pub max_condition_number: f64,
}

impl Default for SolverOpts {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance_deg: default_tolerance_deg(),
            confidence: default_confidence(),
            max_condition_number: default_max_condition_number(),
        }
    }
}

impl SolverOpts {
    /// Copies and returns [SolverOpts] with updated iteration cap.
    pub fn with_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = self.clone();
        s.max_iterations = max_iterations;
        s
    }

    /// Copies and returns [SolverOpts] with updated convergence tolerance.
    pub fn with_tolerance_deg(&self, tolerance_deg: f64) -> Self {
        let mut s = self.clone();
        s.tolerance_deg = tolerance_deg;
        s
    }

    /// Copies and returns [SolverOpts] with updated error ellipse confidence.
    pub fn with_confidence(&self, confidence: f64) -> Self {
        let mut s = self.clone();
        s.confidence = confidence;
        s
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(Error::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}

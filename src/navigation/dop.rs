use nalgebra::DMatrix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::Error;

/// Smallest to largest singular value ratio below which
/// the design matrix is considered rank deficient.
const RANK_DEFICIENCY_RATIO: f64 = 1.0E-9;

/// [GeometricFactor] is the celestial counterpart of the dilution of
/// precision: it only depends on the azimuths of the lines of position.
/// It is 1 for an ideal spread (for example two orthogonal lines, or bodies
/// evenly spread around the horizon) and grows as azimuths cluster:
/// two lines crossing at angle θ yield 1/sin(θ).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometricFactor {
    /// Geometric factor (unitless, >= 1)
    pub factor: f64,
    /// Condition number of the design matrix (largest over
    /// smallest singular value)
    pub condition_number: f64,
    /// Number of lines of position
    pub sights: usize,
}

impl GeometricFactor {
    /// Evaluates the [GeometricFactor] of a set of azimuths (degrees),
    /// before any observation takes place.
    pub fn from_azimuths(azimuths_deg: &[f64]) -> Result<Self, Error> {
        let size = azimuths_deg.len();
        if size < 2 {
            return Err(Error::Underdetermined(size));
        }

        let mut a = DMatrix::<f64>::zeros(size, 2);

        for (i, azimuth_deg) in azimuths_deg.iter().enumerate() {
            let (sin, cos) = azimuth_deg.to_radians().sin_cos();
            a[(i, 0)] = sin;
            a[(i, 1)] = cos;
        }

        Ok(Self::from_design_matrix(&a))
    }

    /// Evaluates the [GeometricFactor] from the singular values of the
    /// unweighted (n x 2) design matrix.
    pub(crate) fn from_design_matrix(a: &DMatrix<f64>) -> Self {
        let sights = a.nrows();
        let singular_values = a.singular_values();

        let (s_max, s_min) = (singular_values.max(), singular_values.min());

        if s_min <= RANK_DEFICIENCY_RATIO * s_max {
            return Self {
                factor: f64::INFINITY,
                condition_number: f64::INFINITY,
                sights,
            };
        }

        // trace((AᵀA)⁻¹) normalized so that ideal geometry yields 1
        let trace = singular_values.iter().map(|s| 1.0 / s.powi(2)).sum::<f64>();

        Self {
            factor: (sights as f64 * trace / 4.0).sqrt(),
            condition_number: s_max / s_min,
            sights,
        }
    }

    /// True when all lines of position are parallel: only the
    /// across-track component of the fix is determined.
    pub fn is_degenerate(&self) -> bool {
        self.factor.is_infinite()
    }
}

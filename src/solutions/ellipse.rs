use nalgebra::{DMatrix, SymmetricEigen};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::normalize_azimuth;

/// Error ellipse of a position fix, at a given confidence level.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorEllipse {
    /// Semi-major axis (nm). Infinite when the lines of position are parallel.
    pub semi_major_nm: f64,
    /// Semi-minor axis (nm)
    pub semi_minor_nm: f64,
    /// Orientation of the major axis (degrees clockwise from north), within [0°, 180°)
    pub orientation_deg: f64,
    /// Probability that the true position lies within this ellipse
    pub confidence: f64,
}

impl ErrorEllipse {
    /// Scale factor applied to the standard deviations so the ellipse
    /// encloses `confidence`: the square root of the chi-square quantile
    /// with 2 degrees of freedom, `sqrt(-2 ln(1 - p))`.
    pub fn scale_factor(confidence: f64) -> f64 {
        (-2.0 * (1.0 - confidence).ln()).sqrt()
    }

    /// Builds the [ErrorEllipse] of covariance `C = σ²·N⁻¹`.
    /// ## Input
    /// - normal: weighted normal matrix N = AᵀWA (2 x 2, east/north)
    /// - variance_nm2: unit variance σ²
    /// - confidence: probability, within (0, 1)
    pub(crate) fn new(normal: &DMatrix<f64>, variance_nm2: f64, confidence: f64) -> Self {
        let scale = Self::scale_factor(confidence);

        // C shares N's eigenvectors, its eigenvalues are σ²/λ
        let eigen = SymmetricEigen::new(normal.clone());

        let (i_min, i_max) = if eigen.eigenvalues[0] <= eigen.eigenvalues[1] {
            (0, 1)
        } else {
            (1, 0)
        };

        let (lambda_min, lambda_max) = (eigen.eigenvalues[i_min], eigen.eigenvalues[i_max]);

        let semi_axis = |lambda: f64| {
            if lambda > 1.0E-12 * lambda_max.abs() && lambda > 0.0 {
                (variance_nm2 / lambda).sqrt() * scale
            } else {
                f64::INFINITY
            }
        };

        let major = eigen.eigenvectors.column(i_min);
        let orientation_deg = normalize_azimuth(major[0].atan2(major[1]).to_degrees()) % 180.0;

        Self {
            semi_major_nm: semi_axis(lambda_min),
            semi_minor_nm: semi_axis(lambda_max),
            orientation_deg,
            confidence,
        }
    }

    /// Ellipse area (nm²)
    pub fn area_nm2(&self) -> f64 {
        std::f64::consts::PI * self.semi_major_nm * self.semi_minor_nm
    }
}

#[cfg(test)]
mod test {
    use super::ErrorEllipse;
    use nalgebra::DMatrix;
    use rstest::*;

    #[rstest]
    #[case(0.95, 2.4477)]
    #[case(0.3935, 1.0)]
    #[case(0.99, 3.0349)]
    fn confidence_scaling(#[case] confidence: f64, #[case] expected: f64) {
        assert!((ErrorEllipse::scale_factor(confidence) - expected).abs() < 1e-3);
    }

    #[test]
    fn circular_ellipse() {
        let normal = DMatrix::<f64>::identity(2, 2);
        let ellipse = ErrorEllipse::new(&normal, 1.0, 0.95);
        assert!((ellipse.semi_major_nm - 2.4477).abs() < 1e-4);
        assert!((ellipse.semi_minor_nm - 2.4477).abs() < 1e-4);
        assert_eq!(ellipse.confidence, 0.95);
    }

    #[rstest]
    #[case(4.0, 1.0, 0.0)]
    #[case(1.0, 4.0, 90.0)]
    fn axis_aligned(#[case] east: f64, #[case] north: f64, #[case] orientation: f64) {
        let normal = DMatrix::<f64>::from_row_slice(2, 2, &[east, 0.0, 0.0, north]);
        let ellipse = ErrorEllipse::new(&normal, 1.0, 0.95);

        let scale = ErrorEllipse::scale_factor(0.95);
        assert!((ellipse.semi_major_nm - scale).abs() < 1e-9);
        assert!((ellipse.semi_minor_nm - 0.5 * scale).abs() < 1e-9);
        assert!((ellipse.orientation_deg - orientation).abs() < 1e-9);
    }

    #[test]
    fn oblique_ellipse() {
        // single precise line along 45°: the major axis runs along 135°
        let (s, c) = 45.0_f64.to_radians().sin_cos();
        let normal = DMatrix::<f64>::from_row_slice(
            2,
            2,
            &[
                4.0 * s * s + 1.0,
                4.0 * s * c,
                4.0 * s * c,
                4.0 * c * c + 1.0,
            ],
        );
        let ellipse = ErrorEllipse::new(&normal, 4.0, 0.95);
        assert!((ellipse.orientation_deg - 135.0).abs() < 1e-6);

        let scale = ErrorEllipse::scale_factor(0.95);
        assert!((ellipse.semi_major_nm - 2.0 * scale).abs() < 1e-9);
        assert!((ellipse.semi_minor_nm - 2.0 / 5.0_f64.sqrt() * scale).abs() < 1e-9);
    }

    #[test]
    fn degenerate_ellipse() {
        let normal = DMatrix::<f64>::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 0.0]);
        let ellipse = ErrorEllipse::new(&normal, 1.0, 0.95);
        assert!(ellipse.semi_major_nm.is_infinite());
        assert!(ellipse.semi_minor_nm.is_finite());
        assert!((ellipse.orientation_deg - 0.0).abs() < 1e-9);
        assert!(ellipse.area_nm2().is_infinite());
    }
}

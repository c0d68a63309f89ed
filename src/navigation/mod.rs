use nalgebra::{DMatrix, DVector};

mod dop;
mod state;

pub use dop::GeometricFactor;
pub(crate) use state::State;

use crate::prelude::{Error, Sight};

/// Relative singular value threshold of the least squares step:
/// smaller singular values are ignored (pseudo inverse).
const SVD_EPSILON_RATIO: f64 = 1.0E-12;

/// Linearized [Navigation] problem around the working position.
#[derive(Debug, Clone)]
pub(crate) struct Navigation {
    /// Unweighted design matrix (n x 2): rows are [sin(az), cos(az)]
    a: DMatrix<f64>,
    /// Sight weights (inverse of error estimates)
    w: DVector<f64>,
    /// Residual vector (nm): sight intercept minus predicted intercept
    b: DVector<f64>,
}

impl Navigation {
    /// Linearizes each [Sight] around the working [State].
    /// The local (east, north) offset of the working position from
    /// each assumed position predicts the intercept
    /// `east * sin(az) + north * cos(az)`.
    pub fn new(state: &State, sights: &[Sight]) -> Result<Self, Error> {
        let size = sights.len();
        if size < 2 {
            return Err(Error::Underdetermined(size));
        }

        let mut a = DMatrix::<f64>::zeros(size, 2);
        let mut w = DVector::<f64>::zeros(size);
        let mut b = DVector::<f64>::zeros(size);

        for (i, sight) in sights.iter().enumerate() {
            let (sin, cos) = sight.azimuth_deg.to_radians().sin_cos();
            let (east_nm, north_nm) = state.position.offset_nm_from(&sight.assumed);

            a[(i, 0)] = sin;
            a[(i, 1)] = cos;
            w[i] = sight.weight();
            b[i] = sight.intercept_nm - (east_nm * sin + north_nm * cos);
        }

        Ok(Self { a, w, b })
    }

    /// Resolves the weighted least squares step, returning the (east, north)
    /// correction in nautical miles. The SVD of W^½·A is used rather than
    /// inverting the normal equations: near parallel lines of position
    /// then only affect the along-track component.
    /// Returns None when the decomposition does not yield a correction.
    pub fn solve(&self) -> Option<(f64, f64)> {
        let sqrt_w = self.w.map(f64::sqrt);

        let mut a_w = self.a.clone();
        for (i, mut row) in a_w.row_iter_mut().enumerate() {
            row *= sqrt_w[i];
        }

        let b_w = self.b.component_mul(&sqrt_w);

        let svd = a_w.svd(true, true);
        let eps = svd.singular_values.max() * SVD_EPSILON_RATIO;

        let dx = svd.solve(&b_w, eps).ok()?;
        if dx[0].is_finite() && dx[1].is_finite() {
            Some((dx[0], dx[1]))
        } else {
            None
        }
    }

    /// Returns the design matrix
    pub fn design_matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Returns the sight weights
    pub fn weights(&self) -> &DVector<f64> {
        &self.w
    }

    /// Returns the residuals (nm)
    pub fn residuals(&self) -> &DVector<f64> {
        &self.b
    }

    /// Weighted normal matrix AᵀWA
    pub fn normal_matrix(&self) -> DMatrix<f64> {
        let at_w = self.a.transpose() * DMatrix::from_diagonal(&self.w);
        at_w * &self.a
    }

    /// Weighted residual sum of squares Σ w·r²
    pub fn weighted_square_sum(&self) -> f64 {
        self.b
            .iter()
            .zip(self.w.iter())
            .map(|(r, w)| w * r.powi(2))
            .sum()
    }
}

//! Position fix solutions
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Position};

mod ellipse;
pub(crate) mod validator;

pub use ellipse::ErrorEllipse;

/// Categorical [FixQuality], from accuracy and geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FixQuality {
    /// Accuracy below 1 nm and geometric factor below 2
    Excellent,
    /// Accuracy below 3 nm and geometric factor below 4
    Good,
    /// Accuracy below 8 nm
    Fair,
    /// Anything else, or near parallel lines of position
    Poor,
}

impl FixQuality {
    /// Grades a fix from its accuracy (nm) and geometric factor.
    /// These thresholds are stable.
    pub fn grade(accuracy_nm: f64, geometric_factor: f64) -> Self {
        if accuracy_nm < 1.0 && geometric_factor < 2.0 {
            Self::Excellent
        } else if accuracy_nm < 3.0 && geometric_factor < 4.0 {
            Self::Good
        } else if accuracy_nm < 8.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl std::fmt::Display for FixQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

impl std::str::FromStr for FixQuality {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            _ => Err(Error::UnknownFixQuality(s.to_string())),
        }
    }
}

/// [PositionFix] resolved from two or more sights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionFix {
    /// Instant this fix refers to: latest sight, or running fix reference
    pub t: Epoch,
    /// Estimated [Position]
    pub position: Position,
    /// Accuracy estimate (nm): weighted root mean square of the residuals
    pub accuracy_nm: f64,
    /// [ErrorEllipse] at the configured confidence level
    pub ellipse: ErrorEllipse,
    /// [FixQuality] label
    pub quality: FixQuality,
    /// Geometric factor, see [GeometricFactor](crate::prelude::GeometricFactor)
    pub geometric_factor: f64,
    /// Design matrix condition number
    pub condition_number: f64,
    /// Residual of each sight (nm), in input order: intercept minus
    /// the intercept predicted from the fix
    pub residuals_nm: Vec<f64>,
    /// False when the iteration cap was reached before convergence
    pub converged: bool,
    /// Number of Gauss-Newton iterations performed
    pub iterations: usize,
    /// Number of sights used
    pub sights: usize,
}

impl PositionFix {
    /// Largest residual magnitude (nm)
    pub fn max_residual_nm(&self) -> f64 {
        self.residuals_nm
            .iter()
            .fold(0.0_f64, |max, r| max.max(r.abs()))
    }
}

#[cfg(test)]
mod test {
    use super::FixQuality;
    use rstest::*;
    use std::str::FromStr;

    #[rstest]
    #[case(0.5, 1.0, FixQuality::Excellent)]
    #[case(0.99, 1.99, FixQuality::Excellent)]
    #[case(0.5, 2.0, FixQuality::Good)]
    #[case(1.0, 1.0, FixQuality::Good)]
    #[case(2.99, 3.99, FixQuality::Good)]
    #[case(0.5, 4.0, FixQuality::Fair)]
    #[case(3.0, 1.0, FixQuality::Fair)]
    #[case(7.99, 100.0, FixQuality::Fair)]
    #[case(8.0, 1.0, FixQuality::Poor)]
    #[case(20.0, 1.0, FixQuality::Poor)]
    fn quality_thresholds(#[case] accuracy: f64, #[case] factor: f64, #[case] expected: FixQuality) {
        assert_eq!(FixQuality::grade(accuracy, factor), expected);
    }

    #[test]
    fn quality_parsing() {
        for quality in [
            FixQuality::Excellent,
            FixQuality::Good,
            FixQuality::Fair,
            FixQuality::Poor,
        ] {
            let parsed = FixQuality::from_str(&quality.to_string()).unwrap();
            assert_eq!(parsed, quality);
        }
        assert_eq!(FixQuality::from_str(" good ").unwrap(), FixQuality::Good);
        assert!(FixQuality::from_str("perfect").is_err());
        assert!(FixQuality::Excellent < FixQuality::Poor);
    }
}

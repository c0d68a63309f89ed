use log::warn;

use crate::{
    cfg::SolverOpts,
    prelude::{FixQuality, GeometricFactor},
};

/// Grades a position fix from its accuracy and geometry.
pub(crate) struct SolutionValidator {
    accuracy_nm: f64,
    geometry: GeometricFactor,
}

impl SolutionValidator {
    pub fn new(accuracy_nm: f64, geometry: GeometricFactor) -> Self {
        Self {
            accuracy_nm,
            geometry,
        }
    }

    /// Near parallel lines of position always grade Poor, whatever the
    /// residuals: the along-track component is barely constrained.
    pub fn quality(&self, opts: &SolverOpts) -> FixQuality {
        if self.geometry.condition_number > opts.max_condition_number {
            warn!(
                "near parallel lines of position: condition number {:.1} exceeds {:.1}",
                self.geometry.condition_number, opts.max_condition_number
            );
            return FixQuality::Poor;
        }
        FixQuality::grade(self.accuracy_nm, self.geometry.factor)
    }
}

#[cfg(test)]
mod test {
    use super::SolutionValidator;
    use crate::{
        cfg::SolverOpts,
        prelude::{FixQuality, GeometricFactor},
    };

    #[test]
    fn condition_number_overrides_grade() {
        let opts = SolverOpts::default();

        let strong = GeometricFactor::from_azimuths(&[0.0, 90.0]).unwrap();
        let validator = SolutionValidator::new(0.1, strong);
        assert_eq!(validator.quality(&opts), FixQuality::Excellent);

        // 10° apart: weak but not degenerate
        let weak = GeometricFactor::from_azimuths(&[0.0, 10.0]).unwrap();
        let validator = SolutionValidator::new(0.1, weak);
        assert_eq!(validator.quality(&opts), FixQuality::Fair);

        // 1° apart: near parallel
        let parallel = GeometricFactor::from_azimuths(&[0.0, 1.0]).unwrap();
        let validator = SolutionValidator::new(0.1, parallel);
        assert_eq!(validator.quality(&opts), FixQuality::Poor);

        let tolerant = SolverOpts {
            max_condition_number: 1.0E3,
            ..Default::default()
        };
        assert_eq!(validator.quality(&tolerant), FixQuality::Fair);
    }
}

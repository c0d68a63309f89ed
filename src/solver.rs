//! Least squares position fix
use itertools::{Itertools, MinMaxResult};
use log::{debug, info, trace, warn};

use crate::{
    constants::APRIORI_UNIT_VARIANCE_NM2,
    navigation::{Navigation, State},
    prelude::{
        Config, Epoch, Error, ErrorEllipse, GeometricFactor, Motion, Position, PositionFix, Sight,
    },
    solutions::validator::SolutionValidator,
};

/// [Solver] resolves [PositionFix]es from reduced [Sight]s.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    /// Solver parametrization, validated on creation
    cfg: Config,
    /// Initial [Position]
    initial: Option<Position>,
}

impl Solver {
    /// Creates a new [Solver].
    /// ## Inputs
    /// - cfg: [Config] preset. Only its solver options are used here.
    /// - initial: possible initial [Position] knowledge. When not provided (None),
    ///   each resolution starts from the mean of the assumed positions.
    pub fn new(cfg: &Config, initial: Option<Position>) -> Result<Self, Error> {
        cfg.solver.validate()?;

        if let Some(initial) = initial {
            info!("initial position {}", initial);
        }

        Ok(Self {
            cfg: cfg.clone(),
            initial,
        })
    }

    /// Returns the [Config] this [Solver] was created with.
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// [PositionFix] resolution attempt: iterates a bounded Gauss-Newton
    /// least squares until the position correction falls below the
    /// configured tolerance. Reaching the iteration cap is not an error:
    /// the last iterate is returned, flagged as not converged.
    /// Near parallel lines of position are not an error either: the
    /// solution is returned, labeled as poor quality.
    /// ## Inputs
    /// - sights: at least two [Sight]s, in any order, all referring to
    ///   the same instant (see [Self::running_fix] otherwise).
    ///   Each [Sight] must pass [Sight::validate].
    pub fn resolve(&self, sights: &[Sight]) -> Result<PositionFix, Error> {
        let size = sights.len();
        if size < 2 {
            return Err(Error::Underdetermined(size));
        }

        for sight in sights {
            sight.validate()?;
        }

        let initial = match self.initial {
            Some(initial) => initial,
            None => Position::mean(sights.iter().map(|sight| &sight.assumed))
                .ok_or(Error::Underdetermined(size))?,
        };

        let t = sights
            .iter()
            .map(|sight| sight.t)
            .reduce(|latest, t| if t > latest { t } else { latest })
            .ok_or(Error::Underdetermined(size))?;

        let opts = &self.cfg.solver;
        let mut state = State::from_position(initial);
        let mut converged = false;

        while state.iteration < opts.max_iterations {
            let nav = Navigation::new(&state, sights)?;

            let Some((dx_nm, dy_nm)) = nav.solve() else {
                warn!("{} - least squares step failed at iteration {}", t, state.iteration);
                break;
            };

            state.update(dx_nm, dy_nm);
            debug!("{} - {}", t, state);

            if state.correction_deg < opts.tolerance_deg {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "{} - not converged after {} iterations (|dx|={:.3E}°)",
                t, state.iteration, state.correction_deg
            );
        }

        // final residuals and geometry, at the solution
        let nav = Navigation::new(&state, sights)?;

        let residuals_nm = nav.residuals().iter().copied().collect::<Vec<_>>();

        for (sight, residual) in sights.iter().zip(residuals_nm.iter()) {
            trace!(
                "{} - zn={:.1}° intercept={:.3}nm residual={:.3}nm w={:.3}",
                sight.t,
                sight.azimuth_deg,
                sight.intercept_nm,
                residual,
                sight.weight()
            );
        }

        let weighted_square_sum = nav.weighted_square_sum();
        let weight_sum = nav.weights().sum();

        let accuracy_nm = (weighted_square_sum / weight_sum).sqrt();

        let variance_nm2 = if size > 2 {
            weighted_square_sum / (size - 2) as f64
        } else {
            APRIORI_UNIT_VARIANCE_NM2
        };

        let geometry = GeometricFactor::from_design_matrix(nav.design_matrix());

        let ellipse = ErrorEllipse::new(&nav.normal_matrix(), variance_nm2, opts.confidence);

        let quality = SolutionValidator::new(accuracy_nm, geometry).quality(opts);

        debug!(
            "{} - fix {} accuracy={:.3}nm gf={:.3} quality={}",
            t, state.position, accuracy_nm, geometry.factor, quality
        );

        Ok(PositionFix {
            t,
            position: state.position,
            accuracy_nm,
            ellipse,
            quality,
            geometric_factor: geometry.factor,
            condition_number: geometry.condition_number,
            residuals_nm,
            converged,
            iterations: state.iteration,
            sights: size,
        })
    }

    /// Running fix: each [Sight] is advanced (or retarded) to the reference
    /// instant, moving its assumed position along the platform [Motion],
    /// then the fix is resolved.
    /// ## Inputs
    /// - sights: at least two [Sight]s, observed at different instants
    /// - track: platform [Motion], used for [Sight]s that do not
    ///   carry their own
    /// - reference: instant of the fix. Defaults to the latest sight.
    pub fn running_fix(
        &self,
        sights: &[Sight],
        track: Motion,
        reference: Option<Epoch>,
    ) -> Result<PositionFix, Error> {
        let size = sights.len();
        if size < 2 {
            return Err(Error::Underdetermined(size));
        }

        for sight in sights {
            sight.validate()?;
        }

        let (first, last) = match sights.iter().map(|sight| sight.t).minmax() {
            MinMaxResult::NoElements => return Err(Error::Underdetermined(size)),
            MinMaxResult::OneElement(t) => (t, t),
            MinMaxResult::MinMax(first, last) => (first, last),
        };

        let reference = reference.unwrap_or(last);

        debug!(
            "running fix: {} sight(s) from {} to {}, reference {}",
            size, first, last, reference
        );

        let advanced = sights
            .iter()
            .map(|sight| {
                let motion = sight.motion.unwrap_or(track);
                sight.advanced_to(reference, &motion)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let mut fix = self.resolve(&advanced)?;
        fix.t = reference;
        Ok(fix)
    }
}

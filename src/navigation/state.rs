use crate::{constants::NAUTICAL_MILES_PER_DEGREE, prelude::Position};

/// Working [State] of the Gauss-Newton iteration
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct State {
    /// Current position estimate
    pub position: Position,
    /// Number of iterations performed so far
    pub iteration: usize,
    /// Magnitude of the latest position correction (degrees)
    pub correction_deg: f64,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "iter={} lat={:.6}° long={:.6}° |dx|={:.3E}°",
            self.iteration, self.position.lat_deg, self.position.long_deg, self.correction_deg
        )
    }
}

impl State {
    /// Creates initial [State] from a priori [Position]
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            iteration: 0,
            correction_deg: f64::INFINITY,
        }
    }

    /// Applies a local (east, north) correction, expressed in nautical miles.
    pub fn update(&mut self, dx_nm: f64, dy_nm: f64) {
        self.position = self.position.displaced_nm(dx_nm, dy_nm);
        self.correction_deg = dx_nm.hypot(dy_nm) / NAUTICAL_MILES_PER_DEGREE;
        self.iteration += 1;
    }
}

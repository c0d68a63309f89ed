mod fuzz;

pub use ephemeris::{GeographicEphemeris, NullEph};

use log::LevelFilter;
use std::sync::Once;

use crate::prelude::{Epoch, Position, Sight};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference instant of the test scenarios
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2023, 6, 15, 12, 0, 0)
}

/// Builds a [Sight] that exactly agrees with the linearized model:
/// its intercept is the offset of `truth` from `assumed`,
/// projected onto the azimuth.
pub fn synthetic_sight(truth: &Position, assumed: &Position, azimuth_deg: f64, t: Epoch) -> Sight {
    let (east_nm, north_nm) = truth.offset_nm_from(assumed);
    let (sin, cos) = azimuth_deg.to_radians().sin_cos();
    Sight::new(east_nm * sin + north_nm * cos, azimuth_deg, *assumed, t)
}

/// Horizontal distance (nm) between two nearby positions
pub fn distance_nm(a: &Position, b: &Position) -> f64 {
    let (east_nm, north_nm) = a.offset_nm_from(b);
    east_nm.hypot(north_nm)
}

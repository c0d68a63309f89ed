use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    prelude::{FixQuality, GeometricFactor, Position, Solver},
    tests::{distance_nm, init_logger, reference_epoch, synthetic_sight},
};

#[test]
fn randomized_fixes() {
    init_logger();

    let mut rng = SmallRng::seed_from_u64(0x5e47);
    let solver = Solver::default();
    let t = reference_epoch();

    for _ in 0..200 {
        let truth = Position::from_lat_long(
            rng.random_range(-60.0..60.0),
            rng.random_range(-180.0..180.0),
        )
        .unwrap();

        let size = rng.random_range(3..=6);
        let base_azimuth = rng.random_range(0.0..360.0);

        let sights = (0..size)
            .map(|i| {
                // evenly spread bodies, give or take 15°
                let azimuth = base_azimuth
                    + 360.0 * i as f64 / size as f64
                    + rng.random_range(-15.0..15.0);

                let assumed = truth.displaced_nm(
                    rng.random_range(-20.0..20.0),
                    rng.random_range(-20.0..20.0),
                );

                synthetic_sight(&truth, &assumed, azimuth, t)
            })
            .collect::<Vec<_>>();

        let fix = solver.resolve(&sights).unwrap();

        debug!(
            "truth={} fix={} iter={} gf={:.3}",
            truth, fix.position, fix.iterations, fix.geometric_factor
        );

        assert!(fix.converged);
        assert!(distance_nm(&fix.position, &truth) < 0.05);
        assert!(fix.geometric_factor < 2.0);
        assert_eq!(fix.quality, FixQuality::Excellent);
    }
}

#[test]
fn randomized_geometry() {
    let mut rng = SmallRng::seed_from_u64(0x6f);

    for _ in 0..200 {
        let first = rng.random_range(0.0..360.0);
        let crossing = rng.random_range(1.0..179.0_f64);

        let gf = GeometricFactor::from_azimuths(&[first, first + crossing]).unwrap();
        let expected = 1.0 / crossing.to_radians().sin();

        assert!((gf.factor - expected).abs() < 1e-6 * expected);
    }
}

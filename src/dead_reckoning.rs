//! Dead reckoning along a rhumb line
use hifitime::Epoch;

use crate::{
    constants::{MAX_DEAD_RECKONING_LATITUDE_DEG, NAUTICAL_MILES_PER_DEGREE},
    position::wrap_longitude,
    prelude::{Error, Position},
};

/// Moves `position` along the rhumb line `course_deg` (0° = north, clockwise),
/// at constant `speed_knots`, for the time elapsed between `from` and `to`.
/// When `to` precedes `from`, the position is moved backward (retarded)
/// along the reciprocal course.
///
/// Fails with [Error::PolarRegion] above 89.9° of latitude where the
/// longitude change is not defined, and with [Error::NegativeSpeed]
/// for a negative speed.
pub fn advance_position(
    position: &Position,
    from: Epoch,
    to: Epoch,
    speed_knots: f64,
    course_deg: f64,
) -> Result<Position, Error> {
    if speed_knots < 0.0 || speed_knots.is_nan() {
        return Err(Error::NegativeSpeed(speed_knots));
    }
    if position.lat_deg.abs() > MAX_DEAD_RECKONING_LATITUDE_DEG {
        return Err(Error::PolarRegion(position.lat_deg));
    }

    let elapsed_hours = (to - from).to_seconds() / 3600.0;

    let distance_nm = speed_knots * elapsed_hours.abs();

    // retarding runs along the reciprocal course
    let course_rad = if elapsed_hours < 0.0 {
        (course_deg + 180.0).to_radians()
    } else {
        course_deg.to_radians()
    };

    let dlat_deg = distance_nm * course_rad.cos() / NAUTICAL_MILES_PER_DEGREE;

    let dlong_deg = distance_nm * course_rad.sin()
        / (NAUTICAL_MILES_PER_DEGREE * position.lat_deg.to_radians().cos());

    let lat_deg = position.lat_deg + dlat_deg;
    if lat_deg.abs() > 90.0 {
        return Err(Error::PolarRegion(lat_deg));
    }

    Ok(Position {
        lat_deg,
        long_deg: wrap_longitude(position.long_deg + dlong_deg),
        height_m: position.height_m,
    })
}

#[cfg(test)]
mod test {
    use super::advance_position;
    use crate::prelude::{Epoch, Error, Position};
    use hifitime::Unit;
    use rstest::*;

    fn epoch() -> Epoch {
        Epoch::from_gregorian_utc_hms(2023, 6, 15, 12, 0, 0)
    }

    #[rstest]
    #[case(0.0, 1.0, 0.0)]
    #[case(90.0, 0.0, 1.0)]
    #[case(180.0, -1.0, 0.0)]
    #[case(270.0, 0.0, -1.0)]
    fn cardinal_courses(#[case] course: f64, #[case] north: f64, #[case] east: f64) {
        let origin = Position::from_lat_long(0.0, 10.0).unwrap();
        let t0 = epoch();
        let t1 = t0 + 1.0 * Unit::Hour;

        // 60 nm in one hour: one degree at the equator
        let moved = advance_position(&origin, t0, t1, 60.0, course).unwrap();

        assert!((moved.lat_deg - north).abs() < 1e-9);
        assert!((moved.long_deg - 10.0 - east).abs() < 1e-9);
    }

    #[test]
    fn longitude_scaling_with_latitude() {
        let origin = Position::from_lat_long(60.0, 0.0).unwrap();
        let t0 = epoch();
        let t1 = t0 + 30.0 * Unit::Minute;

        let moved = advance_position(&origin, t0, t1, 12.0, 90.0).unwrap();

        // 6 nm east at 60°N is twice as many minutes of longitude
        assert!((moved.lat_deg - 60.0).abs() < 1e-9);
        assert!((moved.long_deg - 0.2).abs() < 1e-9);
    }

    #[test]
    fn backward_in_time() {
        let origin = Position::from_lat_long(40.0, -74.0).unwrap();
        let t0 = epoch();
        let t1 = t0 + 2.0 * Unit::Hour;

        let forward = advance_position(&origin, t0, t1, 10.0, 45.0).unwrap();
        let backward = advance_position(&origin, t1, t0, 10.0, 45.0).unwrap();

        assert!(forward.lat_deg > origin.lat_deg);
        assert!(backward.lat_deg < origin.lat_deg);
        assert!(((forward.lat_deg - origin.lat_deg) + (backward.lat_deg - origin.lat_deg)).abs() < 1e-12);
        assert!(((forward.long_deg - origin.long_deg) + (backward.long_deg - origin.long_deg)).abs() < 1e-12);
    }

    #[test]
    fn no_motion() {
        let origin = Position::from_lat_long(40.0, -74.0).unwrap();
        let t0 = epoch();

        let same = advance_position(&origin, t0, t0 + 1.0 * Unit::Hour, 0.0, 123.0).unwrap();
        assert_eq!(same, origin);

        let same = advance_position(&origin, t0, t0, 20.0, 123.0).unwrap();
        assert_eq!(same, origin);
    }

    #[test]
    fn polar_region() {
        let t0 = epoch();
        let t1 = t0 + 1.0 * Unit::Hour;

        let origin = Position::from_lat_long(89.95, 0.0).unwrap();
        let err = advance_position(&origin, t0, t1, 10.0, 90.0).unwrap_err();
        assert_eq!(err, Error::PolarRegion(89.95));
        assert!(err.is_domain_error());

        let origin = Position::from_lat_long(-89.91, 0.0).unwrap();
        assert!(advance_position(&origin, t0, t1, 10.0, 90.0).is_err());

        let origin = Position::from_lat_long(89.9, 0.0).unwrap();
        assert!(advance_position(&origin, t0, t1, 10.0, 90.0).is_ok());
    }

    #[test]
    fn crossing_the_antimeridian() {
        let origin = Position::from_lat_long(0.0, 179.5).unwrap();
        let t0 = epoch();
        let moved = advance_position(&origin, t0, t0 + 1.0 * Unit::Hour, 60.0, 90.0).unwrap();
        assert!((moved.long_deg + 179.5).abs() < 1e-9);
    }

    #[test]
    fn negative_speed() {
        let origin = Position::from_lat_long(0.0, 0.0).unwrap();
        let t0 = epoch();
        assert_eq!(
            advance_position(&origin, t0, t0, -1.0, 0.0),
            Err(Error::NegativeSpeed(-1.0))
        );
    }
}

use crate::{constants::NAUTICAL_MILES_PER_DEGREE, prelude::Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wraps a longitude difference (or longitude) to [-180°, 180°)
pub(crate) fn wrap_longitude(long_deg: f64) -> f64 {
    (long_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Normalizes an angle to [0°, 360°)
pub(crate) fn normalize_azimuth(azimuth_deg: f64) -> f64 {
    let azimuth = azimuth_deg.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if azimuth >= 360.0 {
        0.0
    } else {
        azimuth
    }
}

/// Geodetic [Position] on the Earth.
/// Latitude is positive north, longitude positive east.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Latitude in decimal degrees, within [-90°, 90°]
    pub lat_deg: f64,
    /// Longitude in decimal degrees, within [-180°, 180°]
    pub long_deg: f64,
    /// Height above the reference surface (m)
    pub height_m: f64,
}

impl Position {
    /// Creates a new validated [Position].
    pub fn new(lat_deg: f64, long_deg: f64, height_m: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(Error::LatitudeRange(lat_deg));
        }
        if !(-180.0..=180.0).contains(&long_deg) {
            return Err(Error::LongitudeRange(long_deg));
        }
        Ok(Self {
            lat_deg,
            long_deg,
            height_m,
        })
    }

    /// Creates a new [Position] on the reference surface.
    pub fn from_lat_long(lat_deg: f64, long_deg: f64) -> Result<Self, Error> {
        Self::new(lat_deg, long_deg, 0.0)
    }

    /// Local (east, north) offset in nautical miles of `self` as seen from
    /// `origin`, using mid-latitude sailing.
    pub fn offset_nm_from(&self, origin: &Self) -> (f64, f64) {
        let mid_lat_rad = ((self.lat_deg + origin.lat_deg) / 2.0).to_radians();
        let dlong_deg = wrap_longitude(self.long_deg - origin.long_deg);
        (
            dlong_deg * NAUTICAL_MILES_PER_DEGREE * mid_lat_rad.cos(),
            (self.lat_deg - origin.lat_deg) * NAUTICAL_MILES_PER_DEGREE,
        )
    }

    /// Moves `self` by a local (east, north) displacement in nautical miles.
    /// The longitude change is scaled by the departure latitude.
    /// Latitude saturates at the poles.
    pub(crate) fn displaced_nm(&self, east_nm: f64, north_nm: f64) -> Self {
        let dlat_deg = north_nm / NAUTICAL_MILES_PER_DEGREE;
        let dlong_deg =
            east_nm / (NAUTICAL_MILES_PER_DEGREE * self.lat_deg.to_radians().cos());

        Self {
            lat_deg: (self.lat_deg + dlat_deg).clamp(-90.0, 90.0),
            long_deg: wrap_longitude(self.long_deg + dlong_deg),
            height_m: self.height_m,
        }
    }

    /// Great circle destination, reached after sailing `distance_nm`
    /// along the initial `bearing_deg` from `self`.
    pub fn destination(&self, bearing_deg: f64, distance_nm: f64) -> Self {
        let (lat_rad, long_rad) = (self.lat_deg.to_radians(), self.long_deg.to_radians());
        let bearing_rad = bearing_deg.to_radians();
        let angle_rad = (distance_nm / NAUTICAL_MILES_PER_DEGREE).to_radians();

        let lat2_rad = (lat_rad.sin() * angle_rad.cos()
            + lat_rad.cos() * angle_rad.sin() * bearing_rad.cos())
        .asin();

        let dlong_rad = (bearing_rad.sin() * angle_rad.sin() * lat_rad.cos())
            .atan2(angle_rad.cos() - lat_rad.sin() * lat2_rad.sin());

        Self {
            lat_deg: lat2_rad.to_degrees(),
            long_deg: wrap_longitude((long_rad + dlong_rad).to_degrees()),
            height_m: self.height_m,
        }
    }

    /// Arithmetic mean of a set of positions, longitudes being averaged
    /// relative to the first one so the antimeridian is handled.
    pub(crate) fn mean<'a>(positions: impl Iterator<Item = &'a Self>) -> Option<Self> {
        let mut first = Option::<Self>::None;
        let (mut lat, mut dlong, mut height, mut count) = (0.0, 0.0, 0.0, 0usize);

        for position in positions {
            let reference = *first.get_or_insert(*position);
            lat += position.lat_deg;
            dlong += wrap_longitude(position.long_deg - reference.long_deg);
            height += position.height_m;
            count += 1;
        }

        let reference = first?;
        let n = count as f64;

        Some(Self {
            lat_deg: lat / n,
            long_deg: wrap_longitude(reference.long_deg + dlong / n),
            height_m: height / n,
        })
    }
}

impl std::fmt::Display for Position {
    /// Formats as degrees, minutes and seconds, for example `40°42'46.08"N, 74°00'21.60"W`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn dms(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
            let total_seconds = (value.abs() * 3600.0 * 100.0).round() / 100.0;
            let degrees = (total_seconds / 3600.0).floor();
            let minutes = ((total_seconds - degrees * 3600.0) / 60.0).floor();
            let seconds = total_seconds - degrees * 3600.0 - minutes * 60.0;
            write!(f, "{}°{:02}'{:05.2}\"", degrees as u32, minutes as u32, seconds)
        }

        dms(f, self.lat_deg)?;
        write!(f, "{}, ", if self.lat_deg >= 0.0 { 'N' } else { 'S' })?;
        dms(f, self.long_deg)?;
        write!(f, "{}", if self.long_deg >= 0.0 { 'E' } else { 'W' })
    }
}

#[cfg(test)]
mod test {
    use super::{normalize_azimuth, wrap_longitude, Position};
    use crate::prelude::Error;
    use rstest::*;

    #[test]
    fn position_validation() {
        assert!(Position::new(40.0, -74.0, 0.0).is_ok());
        assert_eq!(
            Position::new(90.5, 0.0, 0.0),
            Err(Error::LatitudeRange(90.5))
        );
        assert_eq!(
            Position::new(0.0, -181.0, 0.0),
            Err(Error::LongitudeRange(-181.0))
        );
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(180.0, -180.0)]
    #[case(359.0, -1.0)]
    fn longitude_wrapping(#[case] input: f64, #[case] expected: f64) {
        assert!((wrap_longitude(input) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(-90.0, 270.0)]
    #[case(725.0, 5.0)]
    #[case(-1.0E-18, 0.0)]
    fn azimuth_normalization(#[case] input: f64, #[case] expected: f64) {
        let azimuth = normalize_azimuth(input);
        assert!((0.0..360.0).contains(&azimuth));
        assert!((azimuth - expected).abs() < 1e-12);
    }

    #[test]
    fn displacement_and_offset_agree() {
        let origin = Position::from_lat_long(40.0, -74.0).unwrap();
        let moved = origin.displaced_nm(10.0, -5.0);

        assert!((moved.lat_deg - (40.0 - 5.0 / 60.0)).abs() < 1e-12);
        assert!(moved.long_deg > -74.0);

        let (east, north) = moved.offset_nm_from(&origin);
        assert!((north + 5.0).abs() < 1e-9);
        // mid latitude vs departure latitude scaling
        assert!((east - 10.0).abs() < 0.01, "east offset {}", east);
    }

    #[test]
    fn great_circle_destination() {
        let origin = Position::from_lat_long(0.0, 0.0).unwrap();

        let north = origin.destination(0.0, 60.0);
        assert!((north.lat_deg - 1.0).abs() < 1e-9);
        assert!(north.long_deg.abs() < 1e-9);

        let east = origin.destination(90.0, 60.0);
        assert!(east.lat_deg.abs() < 1e-9);
        assert!((east.long_deg - 1.0).abs() < 1e-9);

        let across = Position::from_lat_long(0.0, 179.5).unwrap().destination(90.0, 60.0);
        assert!((across.long_deg + 179.5).abs() < 1e-9);
    }

    #[test]
    fn mean_position_across_antimeridian() {
        let positions = [
            Position::from_lat_long(10.0, 179.0).unwrap(),
            Position::from_lat_long(20.0, -179.0).unwrap(),
        ];
        let mean = Position::mean(positions.iter()).unwrap();
        assert!((mean.lat_deg - 15.0).abs() < 1e-12);
        assert!((mean.long_deg.abs() - 180.0).abs() < 1e-9);

        assert!(Position::mean(std::iter::empty()).is_none());
    }

    #[test]
    fn dms_formatting() {
        let position = Position::from_lat_long(40.7128, -74.0060).unwrap();
        assert_eq!(position.to_string(), "40°42'46.08\"N, 74°00'21.60\"W");

        let position = Position::from_lat_long(-33.5, 151.25).unwrap();
        assert_eq!(position.to_string(), "33°30'00.00\"S, 151°15'00.00\"E");
    }
}

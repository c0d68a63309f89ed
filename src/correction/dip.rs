use crate::{constants::DIP_ARCMIN_PER_SQRT_M, prelude::Error};

pub(crate) fn validate_height(observer_height_m: f64) -> Result<(), Error> {
    if observer_height_m < 0.0 || observer_height_m.is_nan() {
        return Err(Error::NegativeHeight(observer_height_m));
    }
    Ok(())
}

/// Dip of the sea horizon (degrees) for this height of eye (m).
/// Null at sea level.
pub fn dip(observer_height_m: f64) -> Result<f64, Error> {
    validate_height(observer_height_m)?;
    Ok(DIP_ARCMIN_PER_SQRT_M * observer_height_m.sqrt() / 60.0)
}

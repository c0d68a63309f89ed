use crate::{
    constants::{LOW_ALTITUDE_REFRACTION_LIMIT_DEG, STANDARD_PRESSURE_HPA},
    prelude::Error,
};

pub(crate) fn validate_altitude(altitude_deg: f64) -> Result<(), Error> {
    if !(-1.0..=90.0).contains(&altitude_deg) {
        return Err(Error::AltitudeRange(altitude_deg));
    }
    Ok(())
}

pub(crate) fn validate_atmosphere(temperature_c: f64, pressure_hpa: f64) -> Result<(), Error> {
    if !(-100.0..=100.0).contains(&temperature_c) {
        return Err(Error::TemperatureRange(temperature_c));
    }
    if !(800.0..=1200.0).contains(&pressure_hpa) {
        return Err(Error::PressureRange(pressure_hpa));
    }
    Ok(())
}

/// Refraction (degrees) at this apparent altitude, assuming validated inputs.
pub(crate) fn refraction_deg(altitude_deg: f64, temperature_c: f64, pressure_hpa: f64) -> f64 {
    // formulas are only defined over the sextant altitude domain
    let h = altitude_deg.clamp(-1.0, 90.0);

    let refraction_arcmin = if h <= LOW_ALTITUDE_REFRACTION_LIMIT_DEG {
        0.96 / (h + 7.32 / (h + 4.32)).to_radians().tan()
    } else {
        1.02 / h.to_radians().tan()
    };

    let scaling = (pressure_hpa / STANDARD_PRESSURE_HPA) * (273.0 / (273.0 + temperature_c));

    refraction_arcmin * scaling / 60.0
}

/// Atmospheric refraction correction (degrees) to subtract from an
/// apparent altitude to obtain the true altitude.
/// ## Input
/// - altitude_deg: apparent altitude, within [-1°, 90°]
/// - temperature_c: air temperature, within [-100°C, 100°C]
/// - pressure_hpa: atmospheric pressure, within [800, 1200] hPa
pub fn refraction(altitude_deg: f64, temperature_c: f64, pressure_hpa: f64) -> Result<f64, Error> {
    validate_altitude(altitude_deg)?;
    validate_atmosphere(temperature_c, pressure_hpa)?;
    Ok(refraction_deg(altitude_deg, temperature_c, pressure_hpa))
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local solar time and the position of the Sun in the Martian sky.
//!
//! Longitudes are planetographic, measured in degrees **west** of the prime
//! meridian; latitudes are planetographic degrees. Inputs outside the usual
//! ranges are not rejected: every expression here is periodic.

use crate::angle::{acos, asin, atan2, cos, normalize_degrees, normalize_hours, sin, tan};
use crate::angle::{FULL_CIRCLE, HOURS_PER_DAY};

/// Sine of Mars' obliquity used by the declination formula.
const SIN_OBLIQUITY: f64 = 0.425_65;

/// Per-instant quantities shared by every local query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarGeometry {
    /// Airy Mean Time, hours.
    pub mean_solar_time: f64,
    /// Equation of time, degrees.
    pub equation_of_time: f64,
    /// West longitude of the subsolar point, `[0, 360)`.
    pub subsolar_longitude: f64,
    /// Planetographic solar declination, degrees.
    pub declination: f64,
}

impl SolarGeometry {
    pub fn new(mean_solar_time: f64, equation_of_time: f64, solar_longitude: f64) -> Self {
        Self {
            mean_solar_time,
            equation_of_time,
            subsolar_longitude: subsolar_longitude(mean_solar_time, equation_of_time),
            declination: solar_declination(solar_longitude),
        }
    }

    /// Local Mean Solar Time at `lon` (°W), hours in `[0, 24)`.
    pub fn local_mean_solar_time(&self, lon: f64) -> f64 {
        normalize_hours(self.mean_solar_time - lon * HOURS_PER_DAY / FULL_CIRCLE + HOURS_PER_DAY)
    }

    /// Local True Solar Time at `lon` (°W), hours.
    ///
    /// The equation-of-time correction is added after wrapping, so the
    /// result may fall slightly outside `[0, 24)`.
    pub fn local_true_solar_time(&self, lon: f64) -> f64 {
        self.local_mean_solar_time(lon) + self.equation_of_time * HOURS_PER_DAY / FULL_CIRCLE
    }

    /// Hour angle of the Sun at `lon` (°W), degrees, not wrapped.
    #[inline]
    pub fn hour_angle(&self, lon: f64) -> f64 {
        lon - self.subsolar_longitude
    }

    /// Angle between the local vertical and the Sun, degrees `[0, 180]`.
    pub fn zenith_angle(&self, lat: f64, lon: f64) -> f64 {
        let d = self.declination;
        let cos_z = sin(d) * sin(lat) + cos(d) * cos(lat) * cos(self.hour_angle(lon));
        acos(cos_z.clamp(-1.0, 1.0))
    }

    /// Solar elevation above the horizon, degrees.
    #[inline]
    pub fn elevation(&self, lat: f64, lon: f64) -> f64 {
        90.0 - self.zenith_angle(lat, lon)
    }

    /// Compass azimuth of the Sun, degrees clockwise from north, `[0, 360)`.
    pub fn azimuth(&self, lat: f64, lon: f64) -> f64 {
        let h = self.hour_angle(lon);
        let a = atan2(sin(h), cos(lat) * tan(self.declination) - sin(lat) * cos(h));
        normalize_degrees(FULL_CIRCLE + a)
    }
}

/// West longitude of the subsolar point, `[0, 360)`.
#[inline]
pub fn subsolar_longitude(mean_solar_time: f64, equation_of_time: f64) -> f64 {
    normalize_degrees(mean_solar_time * 15.0 + equation_of_time + 180.0)
}

/// Planetographic declination of the Sun, degrees.
#[inline]
pub fn solar_declination(solar_longitude: f64) -> f64 {
    asin(SIN_OBLIQUITY * sin(solar_longitude)) + 0.25 * sin(solar_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Spirit landing, 2004-01-04T04:35Z
    const MST: f64 = 3.577_224_391_512_572_8;
    const EOT: f64 = -12.778_855_165_370_503;
    const LS: f64 = 327.666_274_134_252_94;

    fn spirit() -> SolarGeometry {
        SolarGeometry::new(MST, EOT, LS)
    }

    #[test]
    fn subsolar_point_and_declination() {
        let g = spirit();
        assert!((g.subsolar_longitude - 220.879_510_707_318_1).abs() < 1e-9);
        assert!((g.declination + 13.292_988_094_395_987).abs() < 1e-9);
    }

    #[test]
    fn local_times() {
        let g = spirit();
        assert!((g.local_mean_solar_time(175.472) - 15.879_091_058_179_238).abs() < 1e-9);
        assert!((g.local_true_solar_time(175.472) - 15.027_167_380_487_871).abs() < 1e-9);
    }

    #[test]
    fn lmst_range_and_periodicity() {
        let g = spirit();
        for lon in [-1_000.0, -360.0, -0.5, 0.0, 137.4, 359.99, 360.0, 725.0, 10_000.0] {
            let t = g.local_mean_solar_time(lon);
            assert!((0.0..24.0).contains(&t), "lon={lon} -> {t}");
            let u = g.local_mean_solar_time(lon + 360.0);
            let diff = (t - u).abs();
            assert!(diff < 1e-9 || (24.0 - diff) < 1e-9, "lon={lon}: {t} vs {u}");
        }
    }

    #[test]
    fn ltst_is_not_rewrapped() {
        // Just after local midnight with a negative equation of time.
        let g = SolarGeometry::new(0.1, -12.0, 0.0);
        assert!(g.local_true_solar_time(0.0) < 0.0);
    }

    #[test]
    fn sun_position_at_landing_site() {
        let g = spirit();
        let (lat, lon) = (-14.5684, 175.472);
        assert!((g.zenith_angle(lat, lon) - 44.018_342_740_148).abs() < 1e-9);
        assert!((g.elevation(lat, lon) - 45.981_657_259_852).abs() < 1e-9);
        assert!((g.azimuth(lat, lon) - 265.817_860_380_311_46).abs() < 1e-9);
    }

    #[test]
    fn subsolar_point_has_sun_at_zenith() {
        let g = spirit();
        let z = g.zenith_angle(g.declination, g.subsolar_longitude);
        assert!(z.abs() < 1e-5);
    }

    #[test]
    fn antisolar_point_is_below_horizon() {
        let g = spirit();
        let el = g.elevation(-g.declination, g.subsolar_longitude + 180.0);
        assert!((el + 90.0).abs() < 1e-5);
    }

    #[test]
    fn azimuth_range() {
        let g = spirit();
        for lon in [0.0, 45.0, 220.0, 300.0] {
            for lat in [-80.0, -10.0, 0.0, 30.0, 85.0] {
                let az = g.azimuth(lat, lon);
                assert!((0.0..360.0).contains(&az));
            }
        }
    }
}

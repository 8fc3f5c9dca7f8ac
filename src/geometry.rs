// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Heliocentric positions of Mars and Earth and the Earth–Mars link.
//!
//! Both orbits are treated as coplanar: the separation comes from the law
//! of cosines on the two heliocentric distances and the difference of the
//! heliocentric longitudes, ignoring inclination.
//!
//! The Earth model is deliberately simple: a uniformly advancing mean
//! longitude from the 1996-08-25 ephemeris epoch, and a Keplerian radius
//! whose anomaly advances uniformly from the 2002-01-02 perihelion.

use qtty::Seconds;

use crate::angle::{cos, normalize_degrees, sin, FULL_CIRCLE};
use crate::reference::PhysicalConstants;

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Unit selector for distance queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    #[default]
    AstronomicalUnits,
    Kilometers,
}

impl DistanceUnit {
    /// Express `au` astronomical units in this unit.
    #[inline]
    pub fn from_au(self, au: f64, constants: &PhysicalConstants) -> f64 {
        match self {
            DistanceUnit::AstronomicalUnits => au,
            DistanceUnit::Kilometers => au * constants.astronomical_unit_km,
        }
    }
}

/// Earth–Mars geometry at one instant. Distances in AU, angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EarthMarsGeometry {
    pub mars_distance: f64,
    pub mars_longitude: f64,
    pub earth_distance: f64,
    pub earth_longitude: f64,
    /// Angle Earth–Sun–Mars, `[0, 180]`.
    pub separation_angle: f64,
    pub earth_mars_distance: f64,
    pub light_delay: Seconds,
}

impl EarthMarsGeometry {
    /// * `millis` – Unix milliseconds (UT) of the instant.
    /// * `days_tt` – TT days since J2000.0.
    /// * `mean_anomaly`, `solar_longitude` – Mars orbital angles.
    pub fn compute(
        millis: i64,
        days_tt: f64,
        mean_anomaly: f64,
        solar_longitude: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        let mars_distance = mars_heliocentric_distance(mean_anomaly, constants);
        let mars_longitude = mars_heliocentric_longitude(solar_longitude, days_tt);
        let earth_distance = earth_heliocentric_distance(millis, constants);
        let earth_longitude = earth_heliocentric_longitude(millis, constants);

        let separation_angle = angular_separation(earth_longitude, mars_longitude);
        let earth_mars_distance =
            planet_separation(earth_distance, mars_distance, separation_angle);

        Self {
            mars_distance,
            mars_longitude,
            earth_distance,
            earth_longitude,
            separation_angle,
            earth_mars_distance,
            light_delay: light_time(earth_mars_distance, constants),
        }
    }
}

/// Sun–Mars distance in AU.
pub fn mars_heliocentric_distance(mean_anomaly: f64, constants: &PhysicalConstants) -> f64 {
    let m = mean_anomaly;
    constants.mars_semi_major_axis
        * (1.004_36
            - 0.093_09 * cos(m)
            - 0.004_336 * cos(2.0 * m)
            - 0.000_31 * cos(3.0 * m)
            - 0.000_03 * cos(4.0 * m))
}

/// Mars heliocentric ecliptic longitude, `[0, 360)`.
pub fn mars_heliocentric_longitude(solar_longitude: f64, days_tt: f64) -> f64 {
    let ls = solar_longitude;
    normalize_degrees(ls + 85.061 - 0.015 * sin(71.0 + 2.0 * ls) - 5.5e-6 * days_tt)
}

/// Earth heliocentric longitude, `[0, 360)`.
pub fn earth_heliocentric_longitude(millis: i64, constants: &PhysicalConstants) -> f64 {
    let days = days_between(millis, constants.earth_longitude_epoch_millis);
    normalize_degrees(constants.earth_daily_motion * days + constants.earth_longitude_at_epoch)
}

/// Sun–Earth distance in AU.
pub fn earth_heliocentric_distance(millis: i64, constants: &PhysicalConstants) -> f64 {
    let days = days_between(millis, constants.earth_perihelion_millis);
    let anomaly = days / DAYS_PER_JULIAN_YEAR * FULL_CIRCLE;
    let a = constants.earth_semi_major_axis;
    let e = constants.earth_eccentricity;
    a * (1.0 - e * e) / (1.0 + e * cos(anomaly))
}

/// Difference of two longitudes folded into `[0, 180]`.
#[inline]
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = (lon_a - lon_b).abs();
    if diff > 180.0 {
        FULL_CIRCLE - diff
    } else {
        diff
    }
}

/// Distance between two coplanar bodies at heliocentric distances `r1` and
/// `r2` whose longitudes differ by `separation` degrees.
#[inline]
pub fn planet_separation(r1: f64, r2: f64, separation: f64) -> f64 {
    (r1 * r1 + r2 * r2 - 2.0 * r1 * r2 * cos(separation)).sqrt()
}

/// One-way light time across `distance_au`.
#[inline]
pub fn light_time(distance_au: f64, constants: &PhysicalConstants) -> Seconds {
    Seconds::new(distance_au * constants.astronomical_unit_km * 1_000.0 / constants.speed_of_light)
}

#[inline]
fn days_between(millis: i64, epoch_millis: i64) -> f64 {
    (millis as f64 - epoch_millis as f64) / MILLIS_PER_DAY
}

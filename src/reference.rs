// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference data consumed by the date pipeline.
//!
//! [`ReferenceData`] bundles the leap-second table, the planetary
//! perturbation terms of the Mars equation of centre, and the physical and
//! calendrical constants. [`STANDARD`] is the built-in, process-wide
//! instance; a different bundle (e.g. with a newer leap-second list) can be
//! supplied to [`MarsDate::with_reference`](crate::MarsDate::with_reference).
//!
//! ## References
//! * Allison & McEwen (2000), *Planet. Space Sci.* 48, 215–235
//! * Mars24 Sunclock algorithm notes, NASA GISS
//! * NSSDC Earth fact sheet (semi-major axis, eccentricity)

use std::borrow::Cow;

use crate::leap_seconds::{LeapSecondTable, LEAP_SECONDS};

#[cfg(feature = "serde")]
use crate::error::{MarsClockResult, ReferenceError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One periodic perturbation term `A · cos(0.985626° · ΔtJ2000 / τ + φ)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perturber {
    /// Amplitude in degrees.
    pub amplitude: f64,
    /// Period in Julian years.
    pub period: f64,
    /// Phase in degrees.
    pub phase: f64,
}

impl Perturber {
    pub const fn new(amplitude: f64, period: f64, phase: f64) -> Self {
        Self {
            amplitude,
            period,
            phase,
        }
    }
}

/// Perturbations by Jupiter, Earth and Venus (Allison & McEwen 2000, Table 5).
#[rustfmt::skip]
pub const PERTURBERS: [Perturber; 7] = [
    Perturber::new(0.0071,  2.2353,  49.409),
    Perturber::new(0.0057,  2.7543, 168.173),
    Perturber::new(0.0039,  1.1177, 191.837),
    Perturber::new(0.0037, 15.7866,  21.736),
    Perturber::new(0.0021,  2.1354,  15.704),
    Perturber::new(0.0020,  2.4694,  95.528),
    Perturber::new(0.0018, 32.8493,  49.095),
];

/// Physical and calendrical constants.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicalConstants {
    /// TT − TAI in seconds.
    pub tt_minus_tai: f64,
    /// Kilometres in one astronomical unit.
    pub astronomical_unit_km: f64,
    /// Speed of light in metres per second.
    pub speed_of_light: f64,
    /// Mars semi-major axis in AU.
    pub mars_semi_major_axis: f64,
    /// Earth semi-major axis in AU.
    pub earth_semi_major_axis: f64,
    pub earth_eccentricity: f64,
    /// Mean sols in a Mars year.
    pub sols_per_mars_year: f64,
    /// SI seconds in a mean sol.
    pub seconds_per_sol: f64,
    /// Unix milliseconds at which Mars Year 0 begins.
    pub mars_year_epoch_millis: i64,
    /// First instant for which the leap-second table applies.
    pub leap_second_era_millis: i64,
    /// Epoch of the Earth mean-longitude ephemeris (Unix ms).
    pub earth_longitude_epoch_millis: i64,
    /// Earth heliocentric longitude at that epoch, degrees.
    pub earth_longitude_at_epoch: f64,
    /// Earth mean daily motion, degrees per day.
    pub earth_daily_motion: f64,
    /// A reference Earth perihelion passage (Unix ms).
    pub earth_perihelion_millis: i64,
}

impl PhysicalConstants {
    pub const STANDARD: Self = Self {
        tt_minus_tai: 32.184,
        astronomical_unit_km: 149_597_870.7,
        speed_of_light: 299_792_458.0,
        mars_semi_major_axis: 1.523_679_34,
        earth_semi_major_axis: 1.000_000_11,
        earth_eccentricity: 0.016_710_22,
        sols_per_mars_year: 668.5991,
        seconds_per_sol: 88_775.244,
        mars_year_epoch_millis: -524_102_400_000, // 1953-05-24T00:00:00Z
        leap_second_era_millis: 63_072_000_000,   // 1972-01-01T00:00:00Z
        earth_longitude_epoch_millis: 840_931_200_000, // 1996-08-25T00:00:00Z
        earth_longitude_at_epoch: 333.586,
        earth_daily_motion: 0.985_593_1,
        earth_perihelion_millis: 1_009_980_540_000, // 2002-01-02T14:09:00Z
    };

    /// Length of a mean Mars year in milliseconds.
    #[inline]
    pub fn mars_year_millis(&self) -> f64 {
        self.sols_per_mars_year * self.seconds_per_sol * 1_000.0
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The complete reference-data bundle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceData {
    pub leap_seconds: LeapSecondTable,
    pub perturbers: Cow<'static, [Perturber]>,
    pub constants: PhysicalConstants,
}

/// Built-in reference data shared by every [`MarsDate::new`](crate::MarsDate::new).
pub static STANDARD: ReferenceData = ReferenceData::standard();

impl ReferenceData {
    pub const fn standard() -> Self {
        Self {
            leap_seconds: LeapSecondTable::from_static(&LEAP_SECONDS),
            perturbers: Cow::Borrowed(&PERTURBERS),
            constants: PhysicalConstants::STANDARD,
        }
    }

    /// Parse a bundle from JSON.
    ///
    /// The leap-second list must be non-empty with strictly increasing
    /// epochs.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> MarsClockResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        if data.leap_seconds.is_empty() {
            return Err(ReferenceError::EmptyLeapSecondTable);
        }
        log::debug!(
            "loaded reference data: {} leap seconds, {} perturbers",
            data.leap_seconds.len(),
            data.perturbers.len()
        );
        Ok(data)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> MarsClockResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}

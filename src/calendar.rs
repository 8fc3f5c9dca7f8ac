// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars calendar and clock.
//!
//! Mars Sol Date (MSD), Mars Year, the Mars equation of time and the mean
//! solar time at the prime meridian (Airy Mean Time).
//!
//! MSD is a continuous sol count, the Martian analogue of the Julian Date:
//!
//! ```text
//! MSD = (JD(TT) − 2 451 549.5) / 1.0274912517 + 44 796.0 − 0.0009626
//! ```
//!
//! The Mars Year counts whole mean Mars years (668.5991 sols of 88 775.244 s)
//! since the start of MY 0 on 1953-05-24, so MY 1 begins on 1955-04-11, the
//! northern spring equinox adopted by Clancy et al. (2000).

use crate::angle::{normalize_hours, sin, HOURS_PER_DAY};
use crate::reference::{PhysicalConstants, ReferenceData};
use crate::time::{Time, TT, UT};

/// JD(TT) at which MSD 44 796.0 is anchored (2000-01-06T00:00 TT).
const MSD_ANCHOR_JD: f64 = 2_451_549.5;

/// Ratio of a mean sol to an Earth day.
pub const SOL_IN_DAYS: f64 = 1.027_491_251_7;

const MSD_AT_ANCHOR: f64 = 44_796.0;

/// Small adjustment aligning MSD 0 with midnight at the prime meridian.
const MSD_ALIGNMENT: f64 = 0.000_962_6;

/// Calendar and clock quantities at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarsCalendar {
    /// Mars Sol Date.
    pub mars_sol_date: f64,
    /// Mars Year number.
    pub mars_year: i64,
    /// Equation of time in degrees (divide by 15 for hours).
    pub equation_of_time: f64,
    /// Mean solar time at the prime meridian, hours in `[0, 24)`.
    pub mean_solar_time: f64,
}

impl MarsCalendar {
    pub fn derive(
        millis: i64,
        jd_tt: Time<TT>,
        solar_longitude: f64,
        equation_of_center: f64,
        constants: &PhysicalConstants,
    ) -> Self {
        let msd = mars_sol_date(jd_tt);
        Self {
            mars_sol_date: msd,
            mars_year: mars_year(millis, constants),
            equation_of_time: equation_of_time(solar_longitude, equation_of_center),
            mean_solar_time: mean_solar_time(msd),
        }
    }
}

/// Mars Sol Date for a Julian Day on the TT axis.
#[inline]
pub fn mars_sol_date(jd_tt: Time<TT>) -> f64 {
    (jd_tt.value() - MSD_ANCHOR_JD) / SOL_IN_DAYS + MSD_AT_ANCHOR - MSD_ALIGNMENT
}

/// Mars Sol Date of an arbitrary Unix-millisecond instant.
///
/// Runs the UT → TT → MSD part of the pipeline on its own, so the date of
/// any instant can be compared against a previously built
/// [`MarsDate`](crate::MarsDate).
pub fn mars_sol_date_of(millis: i64, reference: &ReferenceData) -> f64 {
    mars_sol_date(Time::<UT>::from_unix_millis(millis).to_tt(reference))
}

/// Whole Mars years elapsed since the start of MY 0.
#[inline]
pub fn mars_year(millis: i64, constants: &PhysicalConstants) -> i64 {
    let elapsed = millis as f64 - constants.mars_year_epoch_millis as f64;
    (elapsed / constants.mars_year_millis()).floor() as i64
}

/// Equation of time in degrees.
#[inline]
pub fn equation_of_time(solar_longitude: f64, equation_of_center: f64) -> f64 {
    let ls = solar_longitude;
    2.861 * sin(2.0 * ls) - 0.071 * sin(4.0 * ls) + 0.002 * sin(6.0 * ls) - equation_of_center
}

/// Airy Mean Time in hours, `[0, 24)`.
#[inline]
pub fn mean_solar_time(mars_sol_date: f64) -> f64 {
    normalize_hours(HOURS_PER_DAY * mars_sol_date)
}

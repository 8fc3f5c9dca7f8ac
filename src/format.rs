// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Presentation helpers.
//!
//! Nothing here computes astronomy: these functions only render values a
//! [`MarsDate`] already holds.

use std::fmt;

use crate::angle::normalize_hours;
use crate::mars_date::MarsDate;
use crate::time::{Time, TT};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Render an hour value as a zero-padded `HH:MM:SS` clock reading.
///
/// The value is first wrapped onto the 24-hour dial, so a local true solar
/// time slightly below 0 h reads as late evening. Each component is
/// truncated, never rounded up.
///
/// ```rust
/// assert_eq!(marsclock::format::hms(15.5), "15:30:00");
/// ```
pub fn hms(hours: f64) -> String {
    let hours = normalize_hours(hours);
    let h = hours.floor();
    let minutes = (hours - h) * 60.0;
    let m = minutes.floor();
    let s = ((minutes - m) * 60.0).floor();
    format!("{:02}:{:02}:{:02}", h as u32, m as u32, s as u32)
}

impl fmt::Display for MarsDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MY {} Ls {:.2}° MSD {:.5} MTC {}",
            self.calendar_year(),
            self.solar_longitude(),
            self.mars_sol_date(),
            hms(self.mean_solar_time())
        )
    }
}

/// Flat snapshot of the site-independent values of a [`MarsDate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarsDateSummary {
    pub earth_millis: i64,
    pub julian_date_tt: Time<TT>,
    pub mars_year: i64,
    pub solar_longitude: f64,
    pub mars_sol_date: f64,
    /// `HH:MM:SS` at the prime meridian.
    pub coordinated_mars_time: String,
    pub heliocentric_distance_au: f64,
    pub earth_mars_distance_au: f64,
    pub light_delay_seconds: f64,
}

impl From<&MarsDate<'_>> for MarsDateSummary {
    fn from(date: &MarsDate<'_>) -> Self {
        let geometry = date.geometry();
        Self {
            earth_millis: date.earth_millis(),
            julian_date_tt: date.julian_date_tt(),
            mars_year: date.calendar_year(),
            solar_longitude: date.solar_longitude(),
            mars_sol_date: date.mars_sol_date(),
            coordinated_mars_time: hms(date.mean_solar_time()),
            heliocentric_distance_au: geometry.mars_distance,
            earth_mars_distance_au: geometry.earth_mars_distance,
            light_delay_seconds: geometry.light_delay.value(),
        }
    }
}

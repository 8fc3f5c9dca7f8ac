// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars Time
//!
//! This crate converts an Earth instant into the Mars calendar and clock,
//! following Allison & McEwen (2000) as revised for the Mars24 Sunclock.
//!
//! # Core types
//!
//! - [`MarsDate`] — immutable Mars state of one Earth instant (Mars Year,
//!   solar longitude, Mars Sol Date, solar times, sun position, Earth–Mars
//!   geometry).
//! - [`Time<S>`] — Julian Day on the [`UT`] or [`TT`] axis.
//! - [`ReferenceData`] — leap seconds, perturbation terms and constants;
//!   [`reference::STANDARD`] is the built-in bundle.
//! - [`LeapSecondTable`] — ordered TAI − UTC table with validated appends.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Time systems | [`time`], [`delta_t`] | JD(UT), TT − UTC, JD(TT) |
//! | Orbit | [`orbit`] | mean anomaly, equation of centre, Ls |
//! | Calendar | [`calendar`] | MSD, Mars Year, equation of time, MST |
//! | Local sky | [`solar`] | LMST, LTST, zenith, elevation, azimuth |
//! | Earth–Mars | [`geometry`] | heliocentric distances, separation, light time |
//!
//! Longitudes are degrees **west** of the prime meridian throughout.
//!
//! ```rust
//! use marsclock::{DistanceUnit, MarsDate};
//!
//! let date = MarsDate::new(1_613_681_700_000); // 2021-02-18T20:55Z
//! assert_eq!(date.calendar_year(), 36);
//! let km = date.earth_mars_distance(DistanceUnit::Kilometers);
//! println!("{date}: {km:.0} km, light time {}", date.light_delay());
//! ```

pub mod angle;
pub mod calendar;
pub mod delta_t;
mod error;
pub mod format;
pub mod geometry;
pub mod leap_seconds;
mod mars_date;
pub mod orbit;
pub mod reference;
pub mod solar;
pub mod time;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::mars_sol_date_of;
pub use error::{MarsClockResult, ReferenceError};
pub use format::MarsDateSummary;
pub use geometry::DistanceUnit;
pub use leap_seconds::{LeapSecond, LeapSecondTable};
pub use mars_date::MarsDate;
pub use reference::{Perturber, PhysicalConstants, ReferenceData};
pub use time::{Time, TimeScale, TT, UT};

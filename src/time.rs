// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian-day instants on the Earth time axes.
//!
//! [`Time<S>`] stores a Julian Day as a [`Days`] quantity whose *axis* is
//! fixed at compile time by the marker `S: TimeScale`:
//!
//! | Marker | Axis |
//! |--------|------|
//! | [`UT`] | civil Universal Time, as carried by Unix timestamps |
//! | [`TT`] | Terrestrial Time, the uniform axis of the Mars ephemeris |
//!
//! Moving from `UT` to `TT` needs the leap-second table, so it is not a
//! free `From` conversion; see [`Time::<UT>::to_tt`](Time::to_tt).

use chrono::{DateTime, Utc};
use qtty::{Days, Simplify};
use std::marker::PhantomData;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Marker trait for Julian-day axes.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;
}

/// Universal Time axis (UTC as carried by Unix timestamps).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "JD(UT)";
}

/// Terrestrial Time axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JD(TT)";
}

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A Julian Day on axis `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to a
/// single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// J2000.0 epoch: JD 2 451 545.0.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The Julian Day as a quantity.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The Julian Day as a scalar.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0 on this axis.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0 on this axis.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        (self.days_since_j2000() / Self::JULIAN_CENTURY)
            .simplify()
            .value()
    }
}

impl Time<UT> {
    /// Julian Day (UT) of a Unix-millisecond timestamp.
    #[inline]
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::from_days(UNIX_EPOCH_JD + Days::new(millis as f64 / MILLIS_PER_DAY))
    }

    /// Unix milliseconds of this instant, rounded to the nearest millisecond.
    #[inline]
    pub fn to_unix_millis(&self) -> i64 {
        ((self.quantity - UNIX_EPOCH_JD).value() * MILLIS_PER_DAY).round() as i64
    }

    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_unix_millis(datetime.timestamp_millis())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.to_unix_millis())
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # UTC → TT correction
//!
//! Converts a civil (UTC) instant onto the uniform Terrestrial Time axis
//! used by the Mars ephemeris.
//!
//! * **From 1972-01-01** (the leap-second era): `TT − UTC = (TAI − UTC) + 32.184 s`,
//!   with `TAI − UTC` taken from the most recent leap-second entry whose
//!   epoch does not exceed the instant. If the table yields nothing (a
//!   custom table starting later than the era) the last tabulated value
//!   is reused.
//! * **Before 1972**: the polynomial
//!   `64.184 + 59 T − 51.2 T² − 67.1 T³ − 16.4 T⁴` seconds, with `T` in
//!   Julian centuries (UT) from J2000.0.
//!
//! Neither branch ever fails. Far-future instants silently keep the last
//! announced leap-second count and the polynomial drifts away from its fit
//! interval; both are precision limits, reported at `debug` level only.
//!
//! ## Quick Example
//! ```rust
//! use marsclock::{reference::STANDARD, Time, UT};
//!
//! let ut = Time::<UT>::from_unix_millis(1_073_190_900_000);
//! let tt = ut.to_tt(&STANDARD);
//! println!("{ut} -> {tt}, TT-UTC = {}", ut.delta_t(&STANDARD));
//! ```

use qtty::{Day, Seconds};

use crate::reference::ReferenceData;
use crate::time::{Time, TT, UT};

/// Polynomial coefficients (seconds) for `TT − UTC` before the leap-second era.
const PRE_1972_POLY: [f64; 5] = [64.184, 59.0, -51.2, -67.1, -16.4];

#[inline]
fn delta_t_polynomial(centuries: f64) -> Seconds {
    let t = centuries;
    let [c0, c1, c2, c3, c4] = PRE_1972_POLY;
    Seconds::new(c0 + t * (c1 + t * (c2 + t * (c3 + t * c4))))
}

/// Returns **TT − UTC** in seconds for a Unix-millisecond instant.
///
/// `centuries` is the instant's offset from J2000.0 in Julian centuries
/// on the UT axis; it only feeds the pre-1972 polynomial.
pub fn utc_to_tt_seconds(millis: i64, centuries: f64, reference: &ReferenceData) -> Seconds {
    let constants = &reference.constants;
    let table = &reference.leap_seconds;

    if millis < constants.leap_second_era_millis {
        log::debug!("instant {millis} ms predates leap seconds, using TT-UTC polynomial");
        return delta_t_polynomial(centuries);
    }

    let leap = match (table.lookup(millis), table.last()) {
        (Some(entry), _) => entry.tai_minus_utc,
        (None, Some(last)) => {
            log::debug!(
                "no leap-second entry at {millis} ms, reusing last TAI-UTC = {} s",
                last.tai_minus_utc
            );
            last.tai_minus_utc
        }
        (None, None) => {
            log::debug!("empty leap-second table, using TT-UTC polynomial");
            return delta_t_polynomial(centuries);
        }
    };

    Seconds::new(f64::from(leap) + constants.tt_minus_tai)
}

impl Time<UT> {
    /// Returns **TT − UTC** in seconds for this instant.
    #[inline]
    pub fn delta_t(&self, reference: &ReferenceData) -> Seconds {
        utc_to_tt_seconds(self.to_unix_millis(), self.julian_centuries(), reference)
    }

    /// Move this instant onto the Terrestrial Time axis.
    #[inline]
    pub fn to_tt(&self, reference: &ReferenceData) -> Time<TT> {
        Time::<TT>::from_days(self.quantity() + self.delta_t(reference).to::<Day>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leap_seconds::{LeapSecond, LeapSecondTable};
    use crate::reference::STANDARD;
    use qtty::Days;

    fn offset(millis: i64) -> Seconds {
        Time::<UT>::from_unix_millis(millis).delta_t(&STANDARD)
    }

    #[test]
    fn leap_era_adds_tt_minus_tai() {
        // 2004-01-04: TAI-UTC = 32 s
        let dt = offset(1_073_190_900_000);
        assert!((dt - Seconds::new(64.184)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn exactly_on_leap_epoch_uses_new_value() {
        let dt = offset(1_483_228_800_000);
        assert!((dt - Seconds::new(69.184)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn one_ms_before_leap_epoch_uses_previous_value() {
        let dt = offset(1_483_228_800_000 - 1);
        assert!((dt - Seconds::new(68.184)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn far_future_keeps_last_value() {
        // 2100-01-01
        let dt = offset(4_102_444_800_000);
        assert!((dt - Seconds::new(69.184)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn pre_1972_uses_polynomial() {
        // 1965-07-15: T = -0.34466 centuries
        let dt = offset(-140_918_400_000);
        assert!((dt - Seconds::new(40.283_206_188_483_47)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn polynomial_at_j2000_is_constant_term() {
        assert_eq!(delta_t_polynomial(0.0), Seconds::new(64.184));
    }

    #[test]
    fn late_starting_table_falls_back_to_last_value() {
        let mut reference = STANDARD.clone();
        reference.leap_seconds = LeapSecondTable::new(vec![
            LeapSecond::new(1_000_000_000_000, 30),
            LeapSecond::new(1_100_000_000_000, 31),
        ])
        .unwrap();
        let dt = utc_to_tt_seconds(500_000_000_000, 0.0, &reference);
        assert!((dt - Seconds::new(63.184)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn empty_table_uses_polynomial() {
        let mut reference = STANDARD.clone();
        reference.leap_seconds = LeapSecondTable::new(Vec::new()).unwrap();
        let dt = utc_to_tt_seconds(1_000_000_000_000, 0.0, &reference);
        assert_eq!(dt, Seconds::new(64.184));
    }

    #[test]
    fn to_tt_shifts_by_offset() {
        let ut = Time::<UT>::from_unix_millis(1_073_190_900_000);
        let tt = ut.to_tt(&STANDARD);
        let shift = tt.quantity() - ut.quantity();
        assert!((shift - Days::new(64.184 / 86_400.0)).abs() < Days::new(1e-9));
    }
}

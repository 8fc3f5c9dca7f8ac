// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap-second table (TAI − UTC).
//!
//! The table is an ordered sequence of `(epoch, TAI − UTC)` pairs where the
//! epoch is the Unix-millisecond instant (00:00:00 UTC) at which the new
//! offset takes effect. Lookups return the entry with the **greatest epoch
//! not exceeding** the query instant, so an instant exactly on a tabulated
//! epoch already uses that epoch's value.
//!
//! New IERS Bulletin C announcements are added with
//! [`LeapSecondTable::push`], which rejects epochs that would break the
//! ordering the lookup relies on.
//!
//! ## References
//! * IERS Bulletin C (leap second announcements)
//! * <https://www.ietf.org/timezones/data/leap-seconds.list>

use std::borrow::Cow;

use crate::error::{MarsClockResult, ReferenceError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single leap-second insertion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeapSecond {
    /// Unix milliseconds at which the offset takes effect.
    pub epoch_millis: i64,
    /// Cumulative TAI − UTC in whole seconds from this epoch on.
    pub tai_minus_utc: i32,
}

impl LeapSecond {
    pub const fn new(epoch_millis: i64, tai_minus_utc: i32) -> Self {
        Self {
            epoch_millis,
            tai_minus_utc,
        }
    }
}

/// Leap seconds announced up to Bulletin C 65 (last insertion 2017-01-01).
#[rustfmt::skip]
pub const LEAP_SECONDS: [LeapSecond; 28] = [
    LeapSecond::new(63_072_000_000, 10),    // 1972-01-01
    LeapSecond::new(78_796_800_000, 11),    // 1972-07-01
    LeapSecond::new(94_694_400_000, 12),    // 1973-01-01
    LeapSecond::new(126_230_400_000, 13),   // 1974-01-01
    LeapSecond::new(157_766_400_000, 14),   // 1975-01-01
    LeapSecond::new(189_302_400_000, 15),   // 1976-01-01
    LeapSecond::new(220_924_800_000, 16),   // 1977-01-01
    LeapSecond::new(252_460_800_000, 17),   // 1978-01-01
    LeapSecond::new(283_996_800_000, 18),   // 1979-01-01
    LeapSecond::new(315_532_800_000, 19),   // 1980-01-01
    LeapSecond::new(362_793_600_000, 20),   // 1981-07-01
    LeapSecond::new(394_329_600_000, 21),   // 1982-07-01
    LeapSecond::new(425_865_600_000, 22),   // 1983-07-01
    LeapSecond::new(489_024_000_000, 23),   // 1985-07-01
    LeapSecond::new(567_993_600_000, 24),   // 1988-01-01
    LeapSecond::new(631_152_000_000, 25),   // 1990-01-01
    LeapSecond::new(662_688_000_000, 26),   // 1991-01-01
    LeapSecond::new(709_948_800_000, 27),   // 1992-07-01
    LeapSecond::new(741_484_800_000, 28),   // 1993-07-01
    LeapSecond::new(773_020_800_000, 29),   // 1994-07-01
    LeapSecond::new(820_454_400_000, 30),   // 1996-01-01
    LeapSecond::new(867_715_200_000, 31),   // 1997-07-01
    LeapSecond::new(915_148_800_000, 32),   // 1999-01-01
    LeapSecond::new(1_136_073_600_000, 33), // 2006-01-01
    LeapSecond::new(1_230_768_000_000, 34), // 2009-01-01
    LeapSecond::new(1_341_100_800_000, 35), // 2012-07-01
    LeapSecond::new(1_435_708_800_000, 36), // 2015-07-01
    LeapSecond::new(1_483_228_800_000, 37), // 2017-01-01
];

/// Epoch-ordered leap-second table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<LeapSecond>", into = "Vec<LeapSecond>")
)]
pub struct LeapSecondTable {
    entries: Cow<'static, [LeapSecond]>,
}

impl LeapSecondTable {
    /// Borrow a static table without re-validating it.
    ///
    /// The caller guarantees strictly increasing epochs.
    pub const fn from_static(entries: &'static [LeapSecond]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Build a table from owned entries, checking the epoch ordering.
    pub fn new(entries: Vec<LeapSecond>) -> MarsClockResult<Self> {
        for pair in entries.windows(2) {
            check_order(pair[0].epoch_millis, pair[1].epoch_millis)?;
        }
        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Append a newly announced leap second.
    pub fn push(&mut self, epoch_millis: i64, tai_minus_utc: i32) -> MarsClockResult<()> {
        if let Some(last) = self.last() {
            check_order(last.epoch_millis, epoch_millis)?;
        }
        self.entries
            .to_mut()
            .push(LeapSecond::new(epoch_millis, tai_minus_utc));
        Ok(())
    }

    /// Entry with the greatest epoch `<= millis`, if any.
    pub fn lookup(&self, millis: i64) -> Option<&LeapSecond> {
        let idx = self.entries.partition_point(|ls| ls.epoch_millis <= millis);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    #[inline]
    pub fn first(&self) -> Option<&LeapSecond> {
        self.entries.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&LeapSecond> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeapSecond> {
        self.entries.iter()
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::from_static(&LEAP_SECONDS)
    }
}

impl TryFrom<Vec<LeapSecond>> for LeapSecondTable {
    type Error = ReferenceError;

    fn try_from(entries: Vec<LeapSecond>) -> MarsClockResult<Self> {
        Self::new(entries)
    }
}

impl From<LeapSecondTable> for Vec<LeapSecond> {
    fn from(table: LeapSecondTable) -> Self {
        table.entries.into_owned()
    }
}

#[inline]
fn check_order(previous: i64, epoch: i64) -> MarsClockResult<()> {
    if epoch <= previous {
        return Err(ReferenceError::NonIncreasingEpoch { previous, epoch });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_strictly_increasing() {
        assert!(LeapSecondTable::new(LEAP_SECONDS.to_vec()).is_ok());
        assert_eq!(LeapSecondTable::default().len(), 28);
    }

    #[test]
    fn lookup_at_epoch_uses_that_entry() {
        let table = LeapSecondTable::default();
        let ls = table.lookup(1_483_228_800_000).unwrap();
        assert_eq!(ls.tai_minus_utc, 37);
    }

    #[test]
    fn lookup_one_ms_before_epoch_uses_previous_entry() {
        let table = LeapSecondTable::default();
        let ls = table.lookup(1_483_228_800_000 - 1).unwrap();
        assert_eq!(ls.tai_minus_utc, 36);
    }

    #[test]
    fn lookup_before_first_entry_is_none() {
        let table = LeapSecondTable::default();
        assert!(table.lookup(63_072_000_000 - 1).is_none());
        assert_eq!(table.lookup(63_072_000_000).unwrap().tai_minus_utc, 10);
    }

    #[test]
    fn lookup_far_future_uses_last_entry() {
        let table = LeapSecondTable::default();
        assert_eq!(table.lookup(4_102_444_800_000).unwrap().tai_minus_utc, 37);
    }

    #[test]
    fn push_appends_and_borrowed_table_becomes_owned() {
        let mut table = LeapSecondTable::default();
        table.push(1_900_000_000_000, 38).unwrap();
        assert_eq!(table.len(), 29);
        assert_eq!(table.lookup(1_900_000_000_000).unwrap().tai_minus_utc, 38);
        assert_eq!(LeapSecondTable::default().len(), 28);
    }

    #[test]
    fn push_rejects_non_increasing_epoch() {
        let mut table = LeapSecondTable::default();
        let err = table.push(1_483_228_800_000, 38).unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::NonIncreasingEpoch {
                previous: 1_483_228_800_000,
                epoch: 1_483_228_800_000
            }
        ));
        assert_eq!(table.len(), 28);
    }

    #[test]
    fn new_rejects_unordered_entries() {
        let entries = vec![LeapSecond::new(200, 11), LeapSecond::new(100, 10)];
        assert!(LeapSecondTable::new(entries).is_err());
    }

    #[test]
    fn empty_table_has_no_lookup() {
        let table = LeapSecondTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.lookup(0).is_none());
        assert!(table.last().is_none());
    }
}

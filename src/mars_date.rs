// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Mars date of an Earth instant.
//!
//! [`MarsDate`] runs the whole pipeline once, at construction:
//!
//! ```text
//! Unix ms ─► JD(UT) ─► JD(TT) ─► orbit (M, EOC, Ls) ─► calendar (MSD, MY, EOT, MST)
//!                                           │
//!                                           ├─► solar geometry (subsolar point, declination)
//!                                           └─► Earth–Mars geometry (distances, light time)
//! ```
//!
//! Every field is fixed from that single input; the only on-demand work is
//! the longitude/latitude dependent queries, which are pure functions of the
//! cached fields. Reference data is borrowed, never mutated, so dates can be
//! built concurrently from several threads against the same bundle.
//!
//! ```rust
//! use marsclock::MarsDate;
//!
//! let landing = MarsDate::new(1_073_190_900_000); // 2004-01-04T04:35Z
//! assert_eq!(landing.calendar_year(), 26);
//! println!("Ls = {:.2}°", landing.solar_longitude());
//! println!("LMST = {:.3} h", landing.local_mean_solar_time(184.702));
//! ```

use chrono::{DateTime, Utc};
use qtty::Seconds;

use crate::calendar::{self, MarsCalendar};
use crate::geometry::{DistanceUnit, EarthMarsGeometry};
use crate::orbit::MarsOrbit;
use crate::reference::{ReferenceData, STANDARD};
use crate::solar::SolarGeometry;
use crate::time::{Time, TT, UT};

const MILLIS_PER_SECOND: f64 = 1_000.0;

/// The Mars calendrical and astronomical state of one Earth instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarsDate<'r> {
    reference: &'r ReferenceData,
    earth_millis: i64,
    julian_date_ut: Time<UT>,
    utc_to_tt: Seconds,
    julian_date_tt: Time<TT>,
    orbit: MarsOrbit,
    calendar: MarsCalendar,
    solar: SolarGeometry,
    geometry: EarthMarsGeometry,
}

impl MarsDate<'static> {
    /// Build from Unix milliseconds (UTC) with the built-in reference data.
    pub fn new(earth_millis: i64) -> Self {
        Self::with_reference(earth_millis, &STANDARD)
    }

    /// Build from a `chrono` UTC timestamp (millisecond resolution).
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime.timestamp_millis())
    }
}

impl<'r> MarsDate<'r> {
    /// Build against a caller-supplied reference bundle.
    pub fn with_reference(earth_millis: i64, reference: &'r ReferenceData) -> Self {
        let constants = &reference.constants;

        let julian_date_ut = Time::<UT>::from_unix_millis(earth_millis);
        let utc_to_tt = julian_date_ut.delta_t(reference);
        let julian_date_tt = julian_date_ut.to_tt(reference);
        let days_tt = julian_date_tt.days_since_j2000();

        let orbit = MarsOrbit::solve(days_tt, &reference.perturbers);
        let calendar = MarsCalendar::derive(
            earth_millis,
            julian_date_tt,
            orbit.solar_longitude,
            orbit.equation_of_center,
            constants,
        );
        let solar = SolarGeometry::new(
            calendar.mean_solar_time,
            calendar.equation_of_time,
            orbit.solar_longitude,
        );
        let geometry = EarthMarsGeometry::compute(
            earth_millis,
            days_tt.value(),
            orbit.mean_anomaly,
            orbit.solar_longitude,
            constants,
        );

        log::trace!(
            "mars date for {earth_millis} ms: MY {} Ls {:.4} MSD {:.5}",
            calendar.mars_year,
            orbit.solar_longitude,
            calendar.mars_sol_date
        );

        Self {
            reference,
            earth_millis,
            julian_date_ut,
            utc_to_tt,
            julian_date_tt,
            orbit,
            calendar,
            solar,
            geometry,
        }
    }

    // ── source instant and time systems ──────────────────────────────

    /// The Earth instant this date was built from, Unix milliseconds.
    #[inline]
    pub fn earth_millis(&self) -> i64 {
        self.earth_millis
    }

    /// The Earth instant as a `chrono` timestamp.
    pub fn earth_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.earth_millis)
    }

    #[inline]
    pub fn julian_date_ut(&self) -> Time<UT> {
        self.julian_date_ut
    }

    /// Julian centuries (UT) since J2000.0.
    #[inline]
    pub fn j2000_offset_ut(&self) -> f64 {
        self.julian_date_ut.julian_centuries()
    }

    /// TT − UTC applied to this instant.
    #[inline]
    pub fn utc_to_tt(&self) -> Seconds {
        self.utc_to_tt
    }

    #[inline]
    pub fn julian_date_tt(&self) -> Time<TT> {
        self.julian_date_tt
    }

    /// Days (TT) since J2000.0.
    #[inline]
    pub fn j2000_offset_tt(&self) -> f64 {
        self.julian_date_tt.days_since_j2000().value()
    }

    /// The reference data this date was computed with.
    #[inline]
    pub fn reference(&self) -> &'r ReferenceData {
        self.reference
    }

    // ── orbit ────────────────────────────────────────────────────────

    #[inline]
    pub fn orbit(&self) -> &MarsOrbit {
        &self.orbit
    }

    /// Areocentric solar longitude **Ls**, degrees in `[0, 360)`.
    #[inline]
    pub fn solar_longitude(&self) -> f64 {
        self.orbit.solar_longitude
    }

    // ── calendar and clock ───────────────────────────────────────────

    #[inline]
    pub fn calendar(&self) -> &MarsCalendar {
        &self.calendar
    }

    /// Mars Year number.
    #[inline]
    pub fn calendar_year(&self) -> i64 {
        self.calendar.mars_year
    }

    #[inline]
    pub fn mars_sol_date(&self) -> f64 {
        self.calendar.mars_sol_date
    }

    /// Equation of time, degrees.
    #[inline]
    pub fn equation_of_time(&self) -> f64 {
        self.calendar.equation_of_time
    }

    /// Mean solar time at the prime meridian, hours in `[0, 24)`.
    #[inline]
    pub fn mean_solar_time(&self) -> f64 {
        self.calendar.mean_solar_time
    }

    /// Mars Sol Date of another instant, using this date's reference data.
    pub fn mars_sol_date_of(&self, earth_millis: i64) -> f64 {
        calendar::mars_sol_date_of(earth_millis, self.reference)
    }

    // ── local time and sun position ─────────────────────────────────

    #[inline]
    pub fn solar_geometry(&self) -> &SolarGeometry {
        &self.solar
    }

    /// Local Mean Solar Time at `lon` degrees west, hours in `[0, 24)`.
    pub fn local_mean_solar_time(&self, lon: f64) -> f64 {
        self.solar.local_mean_solar_time(lon)
    }

    /// Local True Solar Time at `lon` degrees west, hours (not re-wrapped).
    pub fn local_true_solar_time(&self, lon: f64) -> f64 {
        self.solar.local_true_solar_time(lon)
    }

    #[inline]
    pub fn subsolar_longitude(&self) -> f64 {
        self.solar.subsolar_longitude
    }

    #[inline]
    pub fn solar_declination(&self) -> f64 {
        self.solar.declination
    }

    pub fn zenith_angle(&self, lat: f64, lon: f64) -> f64 {
        self.solar.zenith_angle(lat, lon)
    }

    /// Solar elevation above the horizon, degrees.
    pub fn solar_elevation(&self, lat: f64, lon: f64) -> f64 {
        self.solar.elevation(lat, lon)
    }

    /// Compass azimuth of the Sun, degrees in `[0, 360)`.
    pub fn solar_azimuth(&self, lat: f64, lon: f64) -> f64 {
        self.solar.azimuth(lat, lon)
    }

    // ── Earth–Mars geometry ─────────────────────────────────────────

    #[inline]
    pub fn geometry(&self) -> &EarthMarsGeometry {
        &self.geometry
    }

    /// Sun–Mars distance.
    pub fn heliocentric_distance(&self, unit: DistanceUnit) -> f64 {
        unit.from_au(self.geometry.mars_distance, &self.reference.constants)
    }

    #[inline]
    pub fn heliocentric_longitude(&self) -> f64 {
        self.geometry.mars_longitude
    }

    /// Sun–Earth distance.
    pub fn earth_heliocentric_distance(&self, unit: DistanceUnit) -> f64 {
        unit.from_au(self.geometry.earth_distance, &self.reference.constants)
    }

    #[inline]
    pub fn earth_heliocentric_longitude(&self) -> f64 {
        self.geometry.earth_longitude
    }

    pub fn earth_mars_distance(&self, unit: DistanceUnit) -> f64 {
        unit.from_au(self.geometry.earth_mars_distance, &self.reference.constants)
    }

    /// One-way light time between Earth and Mars.
    #[inline]
    pub fn light_delay(&self) -> Seconds {
        self.geometry.light_delay
    }

    // ── ages and anniversaries ──────────────────────────────────────

    /// Earth seconds from this date to `now`; negative if this date is later.
    pub fn age_in_seconds(&self, now_millis: i64) -> Seconds {
        Seconds::new((now_millis as f64 - self.earth_millis as f64) / MILLIS_PER_SECOND)
    }

    /// Sols from this date to `now`, measured on the MSD scale.
    pub fn age_in_sols(&self, now_millis: i64) -> f64 {
        self.mars_sol_date_of(now_millis) - self.calendar.mars_sol_date
    }

    /// Mean Mars years from this date to `now`, fractional.
    pub fn age_in_years(&self, now_millis: i64) -> f64 {
        self.age_in_sols(now_millis) / self.reference.constants.sols_per_mars_year
    }

    /// Mission sol number of this date at a site `lon` degrees west.
    ///
    /// The sol containing the landing is sol 0; sols roll over at local
    /// mean midnight. Dates before the landing give negative sols.
    pub fn sol_of_mission(&self, lon: f64, landing_millis: i64) -> i64 {
        let local = |msd: f64| (msd - lon / crate::angle::FULL_CIRCLE).floor() as i64;
        let landing = local(self.mars_sol_date_of(landing_millis));
        local(self.calendar.mars_sol_date).saturating_sub(landing)
    }

    /// Unix milliseconds of the `n`-th Mars-year anniversary of this date.
    ///
    /// `n` may be negative (earlier anniversaries). The result is rounded to
    /// the nearest millisecond; `None` if it does not fit in an `i64`.
    pub fn anniversary_millis(&self, n: i64) -> Option<i64> {
        let year = self.reference.constants.mars_year_millis();
        let offset = (n as f64 * year).round();
        if offset < i64::MIN as f64 || offset >= i64::MAX as f64 {
            return None;
        }
        self.earth_millis.checked_add(offset as i64)
    }

    /// The `n`-th Mars-year anniversary of this date.
    ///
    /// Returns `None` if it falls outside chrono's representable range.
    pub fn anniversary_instant(&self, n: i64) -> Option<DateTime<Utc>> {
        self.anniversary_millis(n)
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// The first anniversary strictly after `now`, with its ordinal.
    ///
    /// If `now` precedes this date the ordinal is `0` and the instant is
    /// the date itself.
    pub fn next_anniversary_instant(&self, now_millis: i64) -> (i64, Option<DateTime<Utc>>) {
        let n = if now_millis < self.earth_millis {
            0
        } else {
            let year = self.reference.constants.mars_year_millis();
            let elapsed = now_millis as f64 - self.earth_millis as f64;
            let mut n = (elapsed / year).floor() as i64 + 1;
            // Rounding of the anniversary to whole milliseconds can land on `now`.
            while self.anniversary_millis(n).is_some_and(|ms| ms <= now_millis) {
                n += 1;
            }
            n
        };
        (n, self.anniversary_instant(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPIRIT: i64 = 1_073_190_900_000;
    const PERSEVERANCE: i64 = 1_613_681_700_000;
    const SPIRIT_LON: f64 = 175.472;
    const SPIRIT_LAT: f64 = -14.5684;

    #[test]
    fn spirit_landing_state() {
        let d = MarsDate::new(SPIRIT);
        assert_eq!(d.calendar_year(), 26);
        assert!((d.solar_longitude() - 327.666_274).abs() < 1e-3);
        assert!((d.utc_to_tt() - Seconds::new(64.184)).abs() < Seconds::new(1e-9));
        assert!((d.julian_date_ut().value() - 2_453_008.690_972_222).abs() < 1e-6);
        assert!((d.j2000_offset_tt() - 1_463.691_715_092_398).abs() < 1e-6);
        assert!((d.mars_sol_date() - 46_216.149_051_016).abs() < 1e-6);
    }

    #[test]
    fn spirit_landing_local_sky() {
        let d = MarsDate::new(SPIRIT);
        assert!((d.local_mean_solar_time(SPIRIT_LON) - 15.879_091).abs() < 1e-4);
        assert!((d.local_true_solar_time(SPIRIT_LON) - 15.027_167).abs() < 1e-4);
        assert!((d.solar_elevation(SPIRIT_LAT, SPIRIT_LON) - 45.981_657).abs() < 1e-3);
        assert!((d.solar_azimuth(SPIRIT_LAT, SPIRIT_LON) - 265.817_860).abs() < 1e-3);
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(MarsDate::new(PERSEVERANCE), MarsDate::new(PERSEVERANCE));
    }

    #[test]
    fn from_utc_matches_millis() {
        let dt = DateTime::<Utc>::from_timestamp_millis(PERSEVERANCE).unwrap();
        let d = MarsDate::from_utc(dt);
        assert_eq!(d, MarsDate::new(PERSEVERANCE));
        assert_eq!(d.earth_utc(), Some(dt));
    }

    #[test]
    fn distance_units() {
        let d = MarsDate::new(SPIRIT);
        let au = d.heliocentric_distance(DistanceUnit::AstronomicalUnits);
        assert_eq!(d.heliocentric_distance(DistanceUnit::Kilometers), au * 149_597_870.7);
        let em = d.earth_mars_distance(DistanceUnit::AstronomicalUnits);
        assert_eq!(d.earth_mars_distance(DistanceUnit::Kilometers), em * 149_597_870.7);
        assert!((d.light_delay() - Seconds::new(568.226)).abs() < Seconds::new(1e-2));
    }

    #[test]
    fn ages_are_antisymmetric() {
        let a = MarsDate::new(SPIRIT);
        let b = MarsDate::new(PERSEVERANCE);
        let ab = a.age_in_seconds(PERSEVERANCE).value();
        let ba = b.age_in_seconds(SPIRIT).value();
        assert_eq!(ab, -ba);
        assert!(b.age_in_seconds(SPIRIT).value() < 0.0);
        assert!((a.age_in_sols(PERSEVERANCE) + b.age_in_sols(SPIRIT)).abs() < 1e-9);
    }

    #[test]
    fn age_in_years_between_landings() {
        let a = MarsDate::new(SPIRIT);
        let years = a.age_in_years(PERSEVERANCE);
        assert!((years - 9.10).abs() < 0.05, "years = {years}");
        assert_eq!(a.age_in_seconds(SPIRIT).value(), 0.0);
    }

    #[test]
    fn mission_sols() {
        let landing = MarsDate::new(SPIRIT);
        assert_eq!(landing.sol_of_mission(SPIRIT_LON, SPIRIT), 0);
        let sol_ms = (88_775.244 * 1_000.0) as i64;
        let later = MarsDate::new(SPIRIT + 10 * sol_ms);
        assert_eq!(later.sol_of_mission(SPIRIT_LON, SPIRIT), 10);
        let earlier = MarsDate::new(SPIRIT - 3 * sol_ms);
        assert_eq!(earlier.sol_of_mission(SPIRIT_LON, SPIRIT), -3);
    }

    #[test]
    fn anniversary_is_one_mars_year_of_sols() {
        let d = MarsDate::new(PERSEVERANCE);
        for n in [1_i64, 2, 5] {
            let ms = d.anniversary_millis(n).unwrap();
            let sols = d.mars_sol_date_of(ms) - d.mars_sol_date();
            assert!((sols - n as f64 * 668.5991).abs() < 1e-4, "n={n}: {sols}");
        }
        assert_eq!(d.anniversary_millis(0), Some(PERSEVERANCE));
        assert!(d.anniversary_millis(-1).unwrap() < PERSEVERANCE);
        assert!(d.anniversary_instant(1).is_some());
    }

    #[test]
    fn next_anniversary_after_now() {
        let d = MarsDate::new(SPIRIT);
        let (n, when) = d.next_anniversary_instant(PERSEVERANCE);
        assert_eq!(n, 10);
        let when = when.unwrap().timestamp_millis();
        assert!(when > PERSEVERANCE);
        assert!(d.anniversary_millis(n - 1).unwrap() <= PERSEVERANCE);

        let exact = d.anniversary_millis(3).unwrap();
        assert_eq!(d.next_anniversary_instant(exact).0, 4);
        assert_eq!(d.next_anniversary_instant(SPIRIT).0, 1);
        assert_eq!(d.next_anniversary_instant(SPIRIT - 1).0, 0);
    }

    #[test]
    fn extreme_timestamps_stay_total() {
        for millis in [i64::MIN, i64::MAX] {
            let d = MarsDate::new(millis);
            assert!((0.0..360.0).contains(&d.solar_longitude()));
            assert!((0.0..24.0).contains(&d.mean_solar_time()));
            assert!(d.earth_utc().is_none());
            assert!(d.anniversary_instant(i64::MAX).is_none());
            assert!(d.anniversary_instant(i64::MIN).is_none());
            assert!(d.anniversary_millis(i64::MAX).is_none());
            assert!(d.age_in_seconds(0).value().is_finite());
            assert_eq!(d.sol_of_mission(0.0, millis), 0);
            let _ = d.next_anniversary_instant(SPIRIT);
        }
        let spirit = MarsDate::new(SPIRIT);
        assert!(spirit.age_in_seconds(i64::MIN).value() < 0.0);
        assert!(spirit.anniversary_instant(i64::MAX).is_none());
        assert_eq!(spirit.next_anniversary_instant(i64::MAX).1, None);
    }

    #[test]
    fn custom_reference_is_used() {
        let mut reference = STANDARD.clone();
        reference.constants.tt_minus_tai = 0.0;
        let d = MarsDate::with_reference(SPIRIT, &reference);
        assert!((d.utc_to_tt() - Seconds::new(32.0)).abs() < Seconds::new(1e-12));
        assert!(d.mars_sol_date() < MarsDate::new(SPIRIT).mars_sol_date());
    }
}

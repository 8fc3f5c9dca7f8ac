// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-argument trigonometry.
//!
//! Every formula in the Mars pipeline is published with its angles in
//! degrees, so the helpers here take and return degrees and keep the
//! radian conversion in one place.

/// Degrees in a full circle.
pub const FULL_CIRCLE: f64 = 360.0;

/// Hours in an Earth day / Mars sol clock face.
pub const HOURS_PER_DAY: f64 = 24.0;

#[inline]
pub fn sin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

#[inline]
pub fn cos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

#[inline]
pub fn tan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arc-sine, result in degrees.
#[inline]
pub fn asin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arc-cosine, result in degrees.
#[inline]
pub fn acos(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Four-quadrant arc-tangent, result in degrees on `(-180, 180]`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    wrap(deg, FULL_CIRCLE)
}

/// Wrap an hour value into `[0, 24)`.
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, HOURS_PER_DAY)
}

// `rem_euclid` can round up to exactly `period` for tiny negative inputs.
#[inline]
fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars orbital position.
//!
//! From the TT offset to J2000.0, derives the Mars mean anomaly, the angle
//! of the fictitious mean sun, the planetary perturbations, the equation of
//! centre and finally the areocentric solar longitude **Ls**
//! (Allison & McEwen 2000, steps B-1 to B-5).

use qtty::Days;

use crate::angle::{cos, normalize_degrees, sin};
use crate::reference::Perturber;

/// Mean anomaly at J2000.0 and its daily rate, degrees.
const MEAN_ANOMALY: (f64, f64) = (19.3871, 0.524_020_73);

/// Fictitious-mean-sun angle at J2000.0 and its daily rate, degrees.
const FMS_ANGLE: (f64, f64) = (270.3871, 0.524_038_496);

/// Earth's mean motion scaling the perturbation periods, degrees per day.
const PERTURBER_RATE: f64 = 0.985_626;

/// Orbital angles of Mars at one instant. All values in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarsOrbit {
    /// Mean anomaly `M` (not wrapped).
    pub mean_anomaly: f64,
    /// Angle of the fictitious mean sun (not wrapped).
    pub fictitious_mean_sun: f64,
    /// Sum of the perturbation terms.
    pub perturbation_sum: f64,
    /// True anomaly minus mean anomaly, perturbations included.
    pub equation_of_center: f64,
    /// Areocentric solar longitude in `[0, 360)`.
    pub solar_longitude: f64,
}

impl MarsOrbit {
    /// Solve for the orbital angles at `days` (TT) since J2000.0.
    pub fn solve(days: Days, perturbers: &[Perturber]) -> Self {
        let dt = days.value();
        let m = MEAN_ANOMALY.0 + MEAN_ANOMALY.1 * dt;
        let fms = FMS_ANGLE.0 + FMS_ANGLE.1 * dt;
        let pbs = perturbation_sum(dt, perturbers);

        let eoc = (10.691 + 3.0e-7 * dt) * sin(m)
            + 0.623 * sin(2.0 * m)
            + 0.05 * sin(3.0 * m)
            + 0.005 * sin(4.0 * m)
            + 0.0005 * sin(5.0 * m)
            + pbs;

        Self {
            mean_anomaly: m,
            fictitious_mean_sun: fms,
            perturbation_sum: pbs,
            equation_of_center: eoc,
            solar_longitude: normalize_degrees(fms + eoc),
        }
    }
}

/// `Σ A · cos(0.985626° · Δt / τ + φ)` over the perturber table.
pub fn perturbation_sum(days: f64, perturbers: &[Perturber]) -> f64 {
    perturbers
        .iter()
        .map(|p| p.amplitude * cos(PERTURBER_RATE * days / p.period + p.phase))
        .sum()
}

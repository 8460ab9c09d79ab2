// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flux density structures.


use serde::{Deserialize, Serialize};

/// A flux density at a particular frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FluxDensity {
    /// The frequency that this flux density applies to \[Hz\]
    pub freq: f64,

    /// The flux density of Stokes I \[Jy\]
    pub i: f64,
}

/// How a source's flux density changes with frequency. Both variants scale a
/// reference flux density by a polynomial in the ratio of the desired and
/// reference frequencies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxDensityType {
    /// $S_\nu = S_0 x^{\sum_i c_i \log_{10}(x)^i}$ where $x = \nu / \nu_0$
    Logarithmic {
        /// The reference flux density ($S_0$ at $\nu_0$)
        fd: FluxDensity,
        /// Spectral-index terms ($c_i$)
        si: Box<[f64]>,
    },

    /// $S_\nu = S_0 + \sum_i c_i x^i$ where $x = \nu / \nu_0 - 1$
    Linear {
        /// The reference flux density ($S_0$ at $\nu_0$)
        fd: FluxDensity,
        /// Spectral-index terms ($c_i$)
        si: Box<[f64]>,
    },
}

impl FluxDensityType {
    /// Estimate the flux density at a particular frequency. With no
    /// spectral-index terms, both variants reduce to the reference flux
    /// density at all frequencies.
    pub fn estimate_at_freq(&self, freq_hz: f64) -> FluxDensity {
        match self {
            FluxDensityType::Logarithmic { fd, si } => {
                let ratio = freq_hz / fd.freq;
                let exponent = eval_polynomial(si, ratio.log10());
                FluxDensity {
                    freq: freq_hz,
                    i: fd.i * ratio.powf(exponent),
                }
            }

            FluxDensityType::Linear { fd, si } => {
                let offset = freq_hz / fd.freq - 1.0;
                FluxDensity {
                    freq: freq_hz,
                    i: fd.i + eval_polynomial(si, offset),
                }
            }
        }
    }
}

/// Evaluate $\sum_i c_i x^i$ in Horner form. An empty list of coefficients
/// evaluates to 0, and evaluation at $x = 0$ yields $c_0$ (i.e. $0^0 = 1$).
fn eval_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
impl approx::AbsDiffEq for FluxDensity {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.freq, &other.freq, epsilon)
            && f64::abs_diff_eq(&self.i, &other.i, epsilon)
    }
}

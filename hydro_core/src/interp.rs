//! # Interpolation Curves
//!
//! Continuous 1-D curves built from discrete samples. Two methods are
//! offered, selectable per computation request:
//!
//! - [`InterpMethod::Linear`] - piecewise linear
//! - [`InterpMethod::MonotoneCubic`] - shape-preserving PCHIP
//!   (Fritsch-Carlson slopes, no overshoot between samples)
//!
//! Both are true interpolants (they reproduce sample values exactly at
//! sample points) and neither extrapolates: outside the sampled domain a
//! curve evaluates to 0. For hull sections this is what keeps the hull
//! watertight outside the sampled height range.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::interp::{Curve, InterpMethod};
//!
//! let curve = Curve::new(
//!     &[0.0, 1.0, 2.0],
//!     &[0.0, 1.5, 2.0],
//!     InterpMethod::MonotoneCubic,
//! ).unwrap();
//!
//! assert_eq!(curve.eval(1.0), 1.5);   // exact at samples
//! assert_eq!(curve.eval(-0.5), 0.0);  // no extrapolation
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{HydroError, HydroResult};

/// Interpolation method for hull curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMethod {
    /// Piecewise linear interpolation
    Linear,
    /// Shape-preserving piecewise cubic (PCHIP)
    #[default]
    MonotoneCubic,
}

impl InterpMethod {
    /// Parse from the request strings used by callers (`"linear"` / `"pchip"`)
    pub fn parse(s: &str) -> HydroResult<Self> {
        match s {
            "linear" => Ok(InterpMethod::Linear),
            "pchip" | "monotone_cubic" | "monotone-cubic" => Ok(InterpMethod::MonotoneCubic),
            other => Err(HydroError::invalid_input(
                "interpolation",
                other,
                "Expected 'linear' or 'pchip'",
            )),
        }
    }
}

/// A continuous curve through a set of (x, y) samples.
///
/// Samples are sorted by x and deduplicated (last value wins for
/// repeated x) at construction; at least 2 distinct x values are
/// required. Evaluation outside `[x_min, x_max]` returns 0.
#[derive(Debug, Clone)]
pub struct Curve {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Endpoint slopes for the cubic form; empty for linear
    slopes: Vec<f64>,
    method: InterpMethod,
}

impl Curve {
    /// Build a curve through the given samples.
    ///
    /// Returns an error if fewer than 2 distinct x values remain after
    /// deduplication, or any sample is non-finite.
    pub fn new(xs: &[f64], ys: &[f64], method: InterpMethod) -> HydroResult<Self> {
        if xs.len() != ys.len() {
            return Err(HydroError::invalid_input(
                "samples",
                format!("{} x, {} y", xs.len(), ys.len()),
                "x and y sample counts must match",
            ));
        }
        let mut pairs: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        for &(x, y) in &pairs {
            if !x.is_finite() || !y.is_finite() {
                return Err(HydroError::invalid_input(
                    "samples",
                    format!("({x}, {y})"),
                    "Curve samples must be finite",
                ));
            }
        }
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        pairs.dedup_by(|a, b| {
            if a.0 == b.0 {
                // keep the later sample's value
                b.1 = a.1;
                true
            } else {
                false
            }
        });
        if pairs.len() < 2 {
            return Err(HydroError::invalid_input(
                "samples",
                pairs.len().to_string(),
                "Curve needs at least 2 distinct x values",
            ));
        }
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        let slopes = match method {
            InterpMethod::Linear => Vec::new(),
            InterpMethod::MonotoneCubic => pchip_slopes(&xs, &ys),
        };
        Ok(Curve {
            xs,
            ys,
            slopes,
            method,
        })
    }

    /// The sampled domain `(x_min, x_max)`
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Interpolation method this curve was built with
    pub fn method(&self) -> InterpMethod {
        self.method
    }

    /// Evaluate the curve at `x`. Returns 0 outside the domain.
    pub fn eval(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        if x < lo || x > hi {
            return 0.0;
        }
        // Index of the segment containing x: xs[i] <= x <= xs[i+1]
        let i = match self.xs.partition_point(|&xk| xk <= x) {
            0 => 0,
            k if k >= self.xs.len() => self.xs.len() - 2,
            k => k - 1,
        };
        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];
        let h = x1 - x0;
        if h == 0.0 {
            return y0;
        }
        match self.method {
            InterpMethod::Linear => {
                let t = (x - x0) / h;
                y0 + t * (y1 - y0)
            }
            InterpMethod::MonotoneCubic => {
                // Cubic Hermite on the segment
                let t = (x - x0) / h;
                let d0 = self.slopes[i];
                let d1 = self.slopes[i + 1];
                let t2 = t * t;
                let t3 = t2 * t;
                let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
                let h10 = t3 - 2.0 * t2 + t;
                let h01 = -2.0 * t3 + 3.0 * t2;
                let h11 = t3 - t2;
                h00 * y0 + h10 * h * d0 + h01 * y1 + h11 * h * d1
            }
        }
    }

    /// Minimum sampled x value
    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    /// Maximum sampled x value
    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Fritsch-Carlson slopes for monotonicity-preserving cubic Hermite
/// interpolation (the PCHIP construction).
fn pchip_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut d = vec![0.0; n];
    let h: Vec<f64> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();
    let delta: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    if n == 2 {
        d[0] = delta[0];
        d[1] = delta[0];
        return d;
    }

    // Interior points: weighted harmonic mean of adjacent secants,
    // zero at local extrema so the interpolant never overshoots.
    for i in 1..n - 1 {
        if delta[i - 1] * delta[i] <= 0.0 {
            d[i] = 0.0;
        } else {
            let w1 = 2.0 * h[i] + h[i - 1];
            let w2 = h[i] + 2.0 * h[i - 1];
            d[i] = (w1 + w2) / (w1 / delta[i - 1] + w2 / delta[i]);
        }
    }

    d[0] = edge_slope(h[0], h[1], delta[0], delta[1]);
    d[n - 1] = edge_slope(h[n - 2], h[n - 3], delta[n - 2], delta[n - 3]);
    d
}

/// One-sided three-point estimate for an endpoint slope, clamped to
/// preserve monotonicity near the boundary.
fn edge_slope(h0: f64, h1: f64, delta0: f64, delta1: f64) -> f64 {
    let mut d = ((2.0 * h0 + h1) * delta0 - h0 * delta1) / (h0 + h1);
    if d * delta0 <= 0.0 {
        d = 0.0;
    } else if delta0 * delta1 < 0.0 && d.abs() > 3.0 * delta0.abs() {
        d = 3.0 * delta0;
    }
    d
}

//! # Waterline Extent
//!
//! Locates the longitudinal span of hull that is submerged at a given
//! draft: the waterplane cuts the keel profile where keel height equals
//! the draft, once near the aft end and once near the forward end.
//!
//! Root finding is local and graceful: a scan over the keel domain
//! brackets each crossing and Brent's method refines it. When a bracket
//! refuses to converge the extent falls back to the domain boundary and
//! the record's `extent_converged` flag is cleared; a fully submerged
//! end clamps to its boundary; a draft that never reaches the keel
//! collapses the extent to the keel's lowest point (zero length). None
//! of these cases is an error.

use log::debug;

use crate::geometry::HullGeometry;
use crate::numeric::brent;

/// Number of scan intervals used to bracket waterline crossings
const SCAN_STEPS: usize = 128;

/// Root-finder tolerance for crossing positions (m)
const ROOT_TOL: f64 = 1e-9;

/// Longitudinal extent of the submerged hull at one draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterlineExtent {
    /// Aft limit of the waterline (m)
    pub x_aft: f64,
    /// Forward limit of the waterline (m)
    pub x_fwd: f64,
    /// False when a bracketed root search failed and a boundary
    /// fallback was used instead
    pub converged: bool,
}

impl WaterlineExtent {
    /// Waterline length LWL (m)
    pub fn length(&self) -> f64 {
        self.x_fwd - self.x_aft
    }

    /// Whether x lies strictly inside the extent
    pub fn contains(&self, x: f64) -> bool {
        x > self.x_aft && x < self.x_fwd
    }

    /// Locate the waterline extent for `draft`.
    ///
    /// A hull without a keel curve (single usable station) yields the
    /// degenerate extent (0, 0).
    pub fn locate(geometry: &HullGeometry, draft: f64) -> Self {
        let Some((lo, hi)) = geometry.keel_domain() else {
            return WaterlineExtent {
                x_aft: 0.0,
                x_fwd: 0.0,
                converged: true,
            };
        };

        // keel_height cannot fail once the domain exists
        let f = |x: f64| geometry.keel_height(x).unwrap_or(f64::MAX) - draft;

        let step = (hi - lo) / SCAN_STEPS as f64;
        let samples: Vec<(f64, f64)> = (0..=SCAN_STEPS)
            .map(|i| {
                let x = if i == SCAN_STEPS { hi } else { lo + i as f64 * step };
                (x, f(x))
            })
            .collect();

        // Draft below the keel everywhere: the hull is not submerged at
        // all, so the extent collapses onto the lowest keel point.
        if samples.iter().all(|&(_, fx)| fx > 0.0) {
            let (x_low, _) = samples
                .iter()
                .copied()
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .unwrap_or((lo, 0.0));
            debug!("draft {draft} below keel everywhere, extent collapsed at x = {x_low}");
            return WaterlineExtent {
                x_aft: x_low,
                x_fwd: x_low,
                converged: true,
            };
        }

        let mut converged = true;

        // Aft crossing: first sign change scanning forward from the aft
        // boundary. A submerged aft end (f <= 0 at the boundary) is a
        // transom under water and clamps to the boundary itself.
        let root_aft = if samples[0].1 <= 0.0 {
            lo
        } else {
            match first_crossing(&f, &samples) {
                Some(root) => root,
                None => {
                    converged = false;
                    lo
                }
            }
        };

        // Forward crossing, scanning backward from the forward boundary
        let root_fwd = if samples[SCAN_STEPS].1 <= 0.0 {
            hi
        } else {
            let reversed: Vec<(f64, f64)> = samples.iter().rev().copied().collect();
            match first_crossing(&f, &reversed) {
                Some(root) => root,
                None => {
                    converged = false;
                    hi
                }
            }
        };

        let x_aft = root_aft.min(root_fwd).clamp(lo, hi);
        let x_fwd = root_aft.max(root_fwd).clamp(lo, hi);
        WaterlineExtent {
            x_aft,
            x_fwd,
            converged,
        }
    }
}

/// Refine the first sign change in the sample sequence with Brent's
/// method. `None` when no bracket exists or refinement fails.
fn first_crossing<F: Fn(f64) -> f64>(f: &F, samples: &[(f64, f64)]) -> Option<f64> {
    for pair in samples.windows(2) {
        let (x0, f0) = pair[0];
        let (x1, f1) = pair[1];
        if f0 == 0.0 {
            return Some(x0);
        }
        if f0 * f1 <= 0.0 {
            let (a, b) = if x0 < x1 { (x0, x1) } else { (x1, x0) };
            return brent(f, a, b, ROOT_TOL);
        }
    }
    None
}

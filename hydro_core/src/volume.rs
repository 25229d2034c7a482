//! # Volume Integration
//!
//! Displaced volume and centers of buoyancy, obtained by sweeping the
//! per-station submerged areas along the hull: the section-area curve
//! over x is built exactly like the waterplane curve (same transom rule
//! at the extent endpoints, same interpolation method as the hull) and
//! integrated over the waterline extent.
//!
//! The vertical center of buoyancy uses a second longitudinal curve,
//! through each station's vertical first moment, interpolated and
//! integrated the same way.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::HullGeometry;
use crate::interp::Curve;
use crate::numeric::adaptive_simpson;
use crate::section::section_vertical_moment;
use crate::waterline::WaterlineExtent;
use crate::waterplane::boundary_samples;

const NEAR_ZERO: f64 = 1e-6;

/// Displaced-volume properties for one draft.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeProperties {
    /// Displaced volume (m³)
    pub volume: f64,
    /// Longitudinal center of buoyancy (m)
    pub lcb: f64,
    /// Vertical center of buoyancy (m above baseline)
    pub vcb: f64,
}

/// Integrate displaced volume and buoyancy centers over the extent.
///
/// `section_areas` pairs each usable station position with its
/// submerged area at this draft (as computed by
/// [`crate::section::section_area`]); positions must match
/// `geometry.station_positions()`.
pub fn volume(
    geometry: &HullGeometry,
    extent: &WaterlineExtent,
    section_areas: &[(f64, f64)],
    draft: f64,
    station_tol: f64,
    quad_tol: f64,
) -> VolumeProperties {
    let area_at = |x: f64| {
        section_areas
            .iter()
            .find(|(sx, _)| *sx == x)
            .map(|(_, a)| *a)
            .unwrap_or(0.0)
    };

    let samples = boundary_samples(geometry, extent, station_tol, area_at);
    let xs: Vec<f64> = samples.iter().map(|s| s.0).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.1).collect();
    let area_curve = match Curve::new(&xs, &ys, geometry.method()) {
        Ok(curve) => curve,
        Err(_) => {
            debug!("volume at draft {draft}: degenerate area curve, properties are zero");
            return VolumeProperties::default();
        }
    };

    let (a, b) = (extent.x_aft, extent.x_fwd);
    let volume = adaptive_simpson(&|x| area_curve.eval(x), a, b, quad_tol);

    let lcb = if volume.abs() < NEAR_ZERO {
        0.0
    } else {
        adaptive_simpson(&|x| x * area_curve.eval(x), a, b, quad_tol) / volume
    };

    // Vertical moment curve over x, interpolated exactly as the areas
    let moment_samples = boundary_samples(geometry, extent, station_tol, |x| {
        section_vertical_moment(geometry, x, draft, quad_tol)
    });
    let mxs: Vec<f64> = moment_samples.iter().map(|s| s.0).collect();
    let mys: Vec<f64> = moment_samples.iter().map(|s| s.1).collect();
    let vcb = match Curve::new(&mxs, &mys, geometry.method()) {
        Ok(moment_curve) if volume.abs() >= NEAR_ZERO => {
            adaptive_simpson(&|x| moment_curve.eval(x), a, b, quad_tol) / volume
        }
        _ => 0.0,
    };

    VolumeProperties { volume, lcb, vcb }
}

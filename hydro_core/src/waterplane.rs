//! # Waterplane Integration
//!
//! Properties of the waterplane - the horizontal hull slice at the
//! draft - obtained by building a half-breadth-vs-x curve across the
//! waterline extent and integrating it.
//!
//! The two extent endpoints need care. When an endpoint coincides with
//! the outermost station (within the configurable station tolerance)
//! the hull ends in a flat transom there and the endpoint keeps that
//! station's half-breadth; otherwise the hull closes to a point and the
//! endpoint contributes 0 breadth.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::HullGeometry;
use crate::interp::Curve;
use crate::numeric::adaptive_simpson;
use crate::waterline::WaterlineExtent;

/// Quotients with denominators below this threshold default to 0
const NEAR_ZERO: f64 = 1e-6;

/// Integrated waterplane properties for one draft.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaterplaneProperties {
    /// Waterplane area A_wp (m²)
    pub area: f64,
    /// Longitudinal center of flotation (m)
    pub lcf: f64,
    /// Second moment of area about the centerline (m⁴)
    pub transverse_inertia: f64,
    /// Second moment of area about the transverse axis through the LCF (m⁴)
    pub longitudinal_inertia: f64,
    /// Maximum waterline breadth BWL (m)
    pub breadth: f64,
}

/// Integrate the waterplane at `draft` over the given extent.
///
/// Degenerate waterplanes (zero-length extent, or fewer than 2 distinct
/// sample positions) yield all-zero properties rather than an error.
pub fn waterplane(
    geometry: &HullGeometry,
    extent: &WaterlineExtent,
    draft: f64,
    station_tol: f64,
    quad_tol: f64,
) -> WaterplaneProperties {
    let samples = boundary_samples(geometry, extent, station_tol, |x| {
        geometry.half_breadth(x, draft)
    });

    let xs: Vec<f64> = samples.iter().map(|s| s.0).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.1).collect();
    let curve = match Curve::new(&xs, &ys, geometry.method()) {
        Ok(curve) => curve,
        Err(_) => {
            debug!("waterplane at draft {draft}: fewer than 2 distinct x, properties are zero");
            return WaterplaneProperties::default();
        }
    };

    let (a, b) = (extent.x_aft, extent.x_fwd);
    let area = 2.0 * adaptive_simpson(&|x| curve.eval(x), a, b, quad_tol);

    let lcf = if area.abs() < NEAR_ZERO {
        0.0
    } else {
        2.0 * adaptive_simpson(&|x| x * curve.eval(x), a, b, quad_tol) / area
    };

    let transverse_inertia =
        (2.0 / 3.0) * adaptive_simpson(&|x| curve.eval(x).powi(3), a, b, quad_tol);
    let longitudinal_inertia =
        2.0 * adaptive_simpson(&|x| (x - lcf).powi(2) * curve.eval(x), a, b, quad_tol);

    let breadth = 2.0 * ys.iter().cloned().fold(0.0, f64::max);

    WaterplaneProperties {
        area,
        lcf,
        transverse_inertia,
        longitudinal_inertia,
        breadth,
    }
}

/// Build the (x, value) sample set used by waterplane and volume
/// integration: every station strictly inside the extent, plus the two
/// extent endpoints with the transom rule applied.
pub(crate) fn boundary_samples<F: Fn(f64) -> f64>(
    geometry: &HullGeometry,
    extent: &WaterlineExtent,
    station_tol: f64,
    value_at: F,
) -> Vec<(f64, f64)> {
    let positions = geometry.station_positions();
    let mut samples: Vec<(f64, f64)> = Vec::with_capacity(positions.len() + 2);

    // Aft endpoint: transom keeps the aftmost station's value
    let aft_value = match positions.first() {
        Some(&x0) if (extent.x_aft - x0).abs() <= station_tol => value_at(x0),
        _ => 0.0,
    };
    samples.push((extent.x_aft, aft_value));

    for &x in &positions {
        if extent.contains(x) {
            samples.push((x, value_at(x)));
        }
    }

    let fwd_value = match positions.last() {
        Some(&xn) if (extent.x_fwd - xn).abs() <= station_tol => value_at(xn),
        _ => 0.0,
    };
    samples.push((extent.x_fwd, fwd_value));
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::InterpMethod;
    use crate::numeric::DEFAULT_QUAD_TOL;
    use crate::offsets::{OffsetPoint, OffsetTable};
    use crate::waterline::WaterlineExtent;

    const STATION_TOL: f64 = 1e-3;

    /// Box hull: 10 m long, 4 m beam, 3 m deep, transom at both ends
    fn box_hull() -> HullGeometry {
        let mut points = Vec::new();
        for x in [0.0, 2.5, 5.0, 7.5, 10.0] {
            points.push(OffsetPoint::new(x, 2.0, 0.0));
            points.push(OffsetPoint::new(x, 2.0, 3.0));
        }
        let table = OffsetTable::new(points).unwrap();
        HullGeometry::build(&table, InterpMethod::Linear).unwrap()
    }

    fn full_extent() -> WaterlineExtent {
        WaterlineExtent {
            x_aft: 0.0,
            x_fwd: 10.0,
            converged: true,
        }
    }

    #[test]
    fn test_box_waterplane_area() {
        // Rectangle 10 x 4: A_wp = 40, both endpoints are transoms
        let wp = waterplane(&box_hull(), &full_extent(), 1.5, STATION_TOL, DEFAULT_QUAD_TOL);
        assert!((wp.area - 40.0).abs() < 1e-3, "area = {}", wp.area);
        assert!((wp.breadth - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_lcf_at_midpoint() {
        let wp = waterplane(&box_hull(), &full_extent(), 1.5, STATION_TOL, DEFAULT_QUAD_TOL);
        assert!((wp.lcf - 5.0).abs() < 1e-3, "lcf = {}", wp.lcf);
    }

    #[test]
    fn test_box_inertias() {
        // I_T = L * B³ / 12 = 10 * 64 / 12 = 53.33
        // I_L = B * L³ / 12 = 4 * 1000 / 12 = 333.33
        let wp = waterplane(&box_hull(), &full_extent(), 1.5, STATION_TOL, DEFAULT_QUAD_TOL);
        assert!((wp.transverse_inertia - 53.333).abs() < 0.01);
        assert!((wp.longitudinal_inertia - 333.333).abs() < 0.05);
    }

    #[test]
    fn test_pointed_ends_reduce_area() {
        // Extent endpoints far from any station: both ends taper to 0
        let hull = box_hull();
        let extent = WaterlineExtent {
            x_aft: 1.0,
            x_fwd: 9.0,
            converged: true,
        };
        let wp = waterplane(&hull, &extent, 1.5, STATION_TOL, DEFAULT_QUAD_TOL);
        // Less than the full rectangle over [1, 9] (= 32) because the
        // ends close to points
        assert!(wp.area > 0.0);
        assert!(wp.area < 32.0);
    }

    #[test]
    fn test_degenerate_extent_zero_properties() {
        let hull = box_hull();
        let extent = WaterlineExtent {
            x_aft: 5.0,
            x_fwd: 5.0,
            converged: true,
        };
        let wp = waterplane(&hull, &extent, 1.5, STATION_TOL, DEFAULT_QUAD_TOL);
        assert_eq!(wp, WaterplaneProperties::default());
    }

    #[test]
    fn test_draft_above_hull_top() {
        // Waterline above the deck: half-breadth is 0 everywhere
        let wp = waterplane(&box_hull(), &full_extent(), 5.0, STATION_TOL, DEFAULT_QUAD_TOL);
        assert!(wp.area.abs() < 1e-9);
        assert_eq!(wp.lcf, 0.0);
    }

    #[test]
    fn test_boundary_samples_transom_detection() {
        let hull = box_hull();
        let extent = full_extent();
        let samples = boundary_samples(&hull, &extent, STATION_TOL, |x| {
            hull.half_breadth(x, 1.0)
        });
        // Endpoints coincide with outer stations: transom value 2.0
        assert_eq!(samples.first().unwrap().1, 2.0);
        assert_eq!(samples.last().unwrap().1, 2.0);
        // 2 endpoints + 3 interior stations
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_serialization() {
        let wp = waterplane(&box_hull(), &full_extent(), 1.0, STATION_TOL, DEFAULT_QUAD_TOL);
        let json = serde_json::to_string(&wp).unwrap();
        let roundtrip: WaterplaneProperties = serde_json::from_str(&json).unwrap();
        assert!((wp.area - roundtrip.area).abs() < 1e-12);
    }
}

//! # Section Integration
//!
//! Submerged transverse properties per station: the area of a station
//! below the waterline and its vertical first moment about the
//! baseline. Both are height integrals of the station's half-breadth
//! curve, doubled for the port side, evaluated with adaptive Simpson
//! quadrature (the curve's derivative is only piecewise continuous
//! under PCHIP, which the adaptive rule absorbs).

use crate::geometry::HullGeometry;
use crate::numeric::adaptive_simpson;

/// Submerged area (m²) of the station at `station_x` for the given
/// draft: `2 * integral of half_breadth dz` from the baseline to the
/// draft. Unknown stations integrate to 0.
pub fn section_area(geometry: &HullGeometry, station_x: f64, draft: f64, tol: f64) -> f64 {
    adaptive_simpson(
        &|z| 2.0 * geometry.half_breadth(station_x, z),
        0.0,
        draft,
        tol,
    )
}

/// Vertical first moment (m³) of the submerged station about the
/// baseline: `integral of z * 2 * half_breadth dz`. Feeds the vertical
/// center of buoyancy.
pub fn section_vertical_moment(
    geometry: &HullGeometry,
    station_x: f64,
    draft: f64,
    tol: f64,
) -> f64 {
    adaptive_simpson(
        &|z| z * 2.0 * geometry.half_breadth(station_x, z),
        0.0,
        draft,
        tol,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::InterpMethod;
    use crate::numeric::DEFAULT_QUAD_TOL;
    use crate::offsets::{OffsetPoint, OffsetTable};

    /// Rectangular station, half-breadth 2 m from z = 0 to z = 3
    fn box_hull(method: InterpMethod) -> HullGeometry {
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 2.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 3.0),
            OffsetPoint::new(10.0, 2.0, 0.0),
            OffsetPoint::new(10.0, 2.0, 3.0),
        ])
        .unwrap();
        HullGeometry::build(&table, method).unwrap()
    }

    /// V-section: half-breadth 0 at keel growing linearly to 2 m at z = 2
    fn wedge_hull() -> HullGeometry {
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 0.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 2.0),
            OffsetPoint::new(10.0, 0.0, 0.0),
            OffsetPoint::new(10.0, 2.0, 2.0),
        ])
        .unwrap();
        HullGeometry::build(&table, InterpMethod::Linear).unwrap()
    }

    #[test]
    fn test_box_section_area() {
        // Rectangle: area = 2 * 2.0 * draft
        for method in [InterpMethod::Linear, InterpMethod::MonotoneCubic] {
            let hull = box_hull(method);
            let area = section_area(&hull, 0.0, 1.5, DEFAULT_QUAD_TOL);
            assert!((area - 6.0).abs() < 1e-6, "area = {area}");
        }
    }

    #[test]
    fn test_wedge_section_area() {
        // Triangle to draft 2: y(z) = z, area = 2 * z²/2 = 4
        let hull = wedge_hull();
        let area = section_area(&hull, 0.0, 2.0, DEFAULT_QUAD_TOL);
        assert!((area - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_draft_above_section_top_clips() {
        // Above z = 3 the half-breadth is 0, so deeper drafts add nothing
        let hull = box_hull(InterpMethod::Linear);
        let area = section_area(&hull, 0.0, 5.0, DEFAULT_QUAD_TOL);
        assert!((area - 12.0).abs() < 1e-5, "area = {area}");
    }

    #[test]
    fn test_unknown_station_area_zero() {
        let hull = box_hull(InterpMethod::Linear);
        assert_eq!(section_area(&hull, 3.3, 2.0, DEFAULT_QUAD_TOL), 0.0);
    }

    #[test]
    fn test_box_vertical_moment() {
        // integral of z * 4 dz from 0 to 2 = 2 z² = 8
        let hull = box_hull(InterpMethod::Linear);
        let moment = section_vertical_moment(&hull, 0.0, 2.0, DEFAULT_QUAD_TOL);
        assert!((moment - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_draft_zero_area() {
        let hull = box_hull(InterpMethod::Linear);
        assert_eq!(section_area(&hull, 0.0, 0.0, DEFAULT_QUAD_TOL), 0.0);
    }
}

//! # Hull Geometry
//!
//! Continuous hull form derived from a discrete offset table. Built
//! once per hull, then treated as immutable: every per-draft worker
//! reads the same geometry concurrently without locking.
//!
//! Two families of curves are derived:
//!
//! - per station, a height → half-breadth curve over that station's
//!   sampled z range (0 outside it - the hull is watertight beyond the
//!   sampled heights);
//! - one longitudinal keel-height curve through each usable station's
//!   lowest sampled point, used to locate the waterline extent.
//!
//! Stations with fewer than 2 distinct heights cannot carry a curve and
//! are skipped with a warning; the build only fails when that leaves no
//! usable hull.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::geometry::HullGeometry;
//! use hydro_core::interp::InterpMethod;
//! use hydro_core::offsets::{OffsetPoint, OffsetTable};
//!
//! let table = OffsetTable::new(vec![
//!     OffsetPoint::new(0.0, 0.0, 0.0),
//!     OffsetPoint::new(0.0, 2.0, 1.0),
//!     OffsetPoint::new(10.0, 0.0, 0.0),
//!     OffsetPoint::new(10.0, 2.0, 1.0),
//! ]).unwrap();
//!
//! let hull = HullGeometry::build(&table, InterpMethod::Linear).unwrap();
//! assert_eq!(hull.half_breadth(0.0, 0.5), 1.0);
//! assert_eq!(hull.half_breadth(0.0, 5.0), 0.0); // above sampled range
//! ```

use log::{debug, info, warn};

use crate::errors::{HydroError, HydroResult};
use crate::interp::{Curve, InterpMethod};
use crate::offsets::OffsetTable;

/// Immutable interpolated hull form.
///
/// `Send + Sync` by construction (owned data, no interior mutability),
/// so one instance is safely shared across all per-draft workers.
#[derive(Debug, Clone)]
pub struct HullGeometry {
    /// Usable stations, ascending by x, each with its z → half-breadth curve
    stations: Vec<(f64, Curve)>,
    /// Keel height over x; `None` when fewer than 2 usable stations remain
    keel: Option<Curve>,
    method: InterpMethod,
}

impl HullGeometry {
    /// Build the hull form from an offset table.
    ///
    /// Fails when the table holds fewer than 2 distinct stations, or
    /// when no station carries enough height samples for a curve.
    pub fn build(table: &OffsetTable, method: InterpMethod) -> HydroResult<Self> {
        let positions = table.station_positions();
        if positions.len() < 2 {
            return Err(HydroError::geometry(format!(
                "Offset table has {} distinct station(s); at least 2 are required",
                positions.len()
            )));
        }

        let mut stations: Vec<(f64, Curve)> = Vec::with_capacity(positions.len());
        for &x in &positions {
            let points = table.station_points(x);
            let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            match Curve::new(&zs, &ys, method) {
                Ok(curve) => stations.push((x, curve)),
                Err(_) => {
                    warn!(
                        "station x = {x}: fewer than 2 distinct heights, omitted from interpolation"
                    );
                }
            }
        }

        if stations.is_empty() {
            return Err(HydroError::geometry(
                "No station has enough height samples to build a section curve",
            ));
        }

        // Keel profile through the lowest sampled point of each usable station
        let keel_xs: Vec<f64> = stations.iter().map(|(x, _)| *x).collect();
        let keel_zs: Vec<f64> = stations.iter().map(|(_, c)| c.x_min()).collect();
        let keel = Curve::new(&keel_xs, &keel_zs, method).ok();
        if keel.is_none() {
            debug!("keel curve undefined: only one usable station");
        }

        info!(
            "hull geometry built: {} of {} stations usable, keel domain {:?}",
            stations.len(),
            positions.len(),
            keel.as_ref().map(|k| k.domain()),
        );

        Ok(HullGeometry {
            stations,
            keel,
            method,
        })
    }

    /// Half-breadth (m) at the given station and height.
    ///
    /// Returns 0 for an unknown station or a height outside the
    /// station's sampled range; never negative.
    pub fn half_breadth(&self, station_x: f64, z: f64) -> f64 {
        match self.station_curve(station_x) {
            Some(curve) => curve.eval(z).max(0.0),
            None => 0.0,
        }
    }

    /// Keel height (m) at longitudinal position x.
    ///
    /// Errors when the keel curve is undefined (fewer than 2 usable
    /// stations).
    pub fn keel_height(&self, x: f64) -> HydroResult<f64> {
        match &self.keel {
            Some(keel) => Ok(keel.eval(x)),
            None => Err(HydroError::geometry(
                "Keel curve undefined: fewer than 2 usable stations",
            )),
        }
    }

    /// Longitudinal domain `(x_min, x_max)` of the keel curve, if defined
    pub fn keel_domain(&self) -> Option<(f64, f64)> {
        self.keel.as_ref().map(|k| k.domain())
    }

    /// Usable station positions, ascending
    pub fn station_positions(&self) -> Vec<f64> {
        self.stations.iter().map(|(x, _)| *x).collect()
    }

    /// Number of usable stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Interpolation method the hull was built with
    pub fn method(&self) -> InterpMethod {
        self.method
    }

    /// Sampled height range `(z_min, z_max)` at a station, if usable
    pub fn station_height_range(&self, station_x: f64) -> Option<(f64, f64)> {
        self.station_curve(station_x).map(|c| c.domain())
    }

    fn station_curve(&self, station_x: f64) -> Option<&Curve> {
        self.stations
            .binary_search_by(|(x, _)| {
                x.partial_cmp(&station_x).unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok()
            .map(|i| &self.stations[i].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::OffsetPoint;

    /// Box hull: two rectangular stations, vertical sides 2 m half-breadth
    fn box_table() -> OffsetTable {
        OffsetTable::new(vec![
            OffsetPoint::new(0.0, 2.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 3.0),
            OffsetPoint::new(10.0, 2.0, 0.0),
            OffsetPoint::new(10.0, 2.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_box_hull() {
        let hull = HullGeometry::build(&box_table(), InterpMethod::Linear).unwrap();
        assert_eq!(hull.station_count(), 2);
        assert_eq!(hull.keel_domain(), Some((0.0, 10.0)));
    }

    #[test]
    fn test_half_breadth_exact_at_samples() {
        for method in [InterpMethod::Linear, InterpMethod::MonotoneCubic] {
            let hull = HullGeometry::build(&box_table(), method).unwrap();
            assert!((hull.half_breadth(0.0, 0.0) - 2.0).abs() < 1e-12);
            assert!((hull.half_breadth(10.0, 3.0) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_half_breadth_outside_domain_is_zero() {
        let hull = HullGeometry::build(&box_table(), InterpMethod::Linear).unwrap();
        assert_eq!(hull.half_breadth(0.0, -0.5), 0.0);
        assert_eq!(hull.half_breadth(0.0, 3.5), 0.0);
    }

    #[test]
    fn test_half_breadth_unknown_station_is_zero() {
        let hull = HullGeometry::build(&box_table(), InterpMethod::Linear).unwrap();
        assert_eq!(hull.half_breadth(4.2, 1.0), 0.0);
    }

    #[test]
    fn test_keel_height_linear() {
        // Raked keel: aft at z = 0, forward at z = 1
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 1.0, 0.0),
            OffsetPoint::new(0.0, 1.0, 2.0),
            OffsetPoint::new(8.0, 1.0, 1.0),
            OffsetPoint::new(8.0, 1.0, 2.0),
        ])
        .unwrap();
        let hull = HullGeometry::build(&table, InterpMethod::Linear).unwrap();
        assert!((hull.keel_height(4.0).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_station_fails() {
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 1.0, 0.0),
            OffsetPoint::new(0.0, 1.0, 2.0),
        ])
        .unwrap();
        let err = HullGeometry::build(&table, InterpMethod::Linear).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_ERROR");
    }

    #[test]
    fn test_degenerate_station_skipped() {
        // Middle station has a single height sample and is dropped
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 2.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 3.0),
            OffsetPoint::new(5.0, 1.5, 1.0),
            OffsetPoint::new(10.0, 2.0, 0.0),
            OffsetPoint::new(10.0, 2.0, 3.0),
        ])
        .unwrap();
        let hull = HullGeometry::build(&table, InterpMethod::Linear).unwrap();
        assert_eq!(hull.station_count(), 2);
        assert_eq!(hull.half_breadth(5.0, 1.0), 0.0);
    }

    #[test]
    fn test_all_stations_degenerate_fails() {
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 2.0, 0.0),
            OffsetPoint::new(10.0, 2.0, 0.0),
        ])
        .unwrap();
        assert!(HullGeometry::build(&table, InterpMethod::Linear).is_err());
    }

    #[test]
    fn test_keel_undefined_with_one_usable_station() {
        // Two distinct stations but only one usable: build succeeds,
        // keel lookups fail
        let table = OffsetTable::new(vec![
            OffsetPoint::new(0.0, 2.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 3.0),
            OffsetPoint::new(10.0, 2.0, 1.0),
        ])
        .unwrap();
        let hull = HullGeometry::build(&table, InterpMethod::Linear).unwrap();
        assert_eq!(hull.station_count(), 1);
        assert!(hull.keel_domain().is_none());
        assert!(hull.keel_height(5.0).is_err());
    }

    #[test]
    fn test_geometry_is_sync() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<HullGeometry>();
    }
}

//! # Offset Table
//!
//! The validated input container for hull geometry: a scattered table of
//! (station-x, half-breadth-y, height-z) points. Stations are transverse
//! slices at fixed longitudinal position; each row records how wide the
//! hull is (from centerline) at one height on one station.
//!
//! The table is the sole input to [`crate::geometry::HullGeometry`]; any
//! producer of `(x, y, z)` triples works (CSV import, database rows, a
//! generated synthetic hull).
//!
//! ## JSON Example
//!
//! ```json
//! [
//!   { "x": 0.0, "y": 0.0, "z": 0.0 },
//!   { "x": 0.0, "y": 2.5, "z": 1.0 },
//!   { "x": 10.0, "y": 0.0, "z": 0.0 },
//!   { "x": 10.0, "y": 2.5, "z": 1.0 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{HydroError, HydroResult};

/// One row of the offset table.
///
/// Coordinates in meters: `x` longitudinal (aft to forward), `y`
/// half-breadth from centerline (≥ 0), `z` height above baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetPoint {
    /// Longitudinal station position (m)
    pub x: f64,
    /// Half-breadth from centerline (m), never negative
    pub y: f64,
    /// Height above baseline (m)
    pub z: f64,
}

impl OffsetPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        OffsetPoint { x, y, z }
    }
}

/// Validated, station-ordered set of offset points.
///
/// Construction sorts points by station x (then z) and rejects
/// non-finite coordinates and negative half-breadths. Grouping into
/// stations uses exact x equality - offset tables list each station at
/// one nominal position, so no coordinate fuzzing is applied here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetTable {
    points: Vec<OffsetPoint>,
}

impl OffsetTable {
    /// Build a table from raw points.
    ///
    /// Returns an error if the table is empty, any coordinate is
    /// non-finite, or any half-breadth is negative.
    pub fn new(mut points: Vec<OffsetPoint>) -> HydroResult<Self> {
        if points.is_empty() {
            return Err(HydroError::invalid_input(
                "points",
                "[]",
                "Offset table must contain at least one point",
            ));
        }
        for p in &points {
            if !p.x.is_finite() || !p.y.is_finite() || !p.z.is_finite() {
                return Err(HydroError::invalid_input(
                    "points",
                    format!("({}, {}, {})", p.x, p.y, p.z),
                    "Offset coordinates must be finite",
                ));
            }
            if p.y < 0.0 {
                return Err(HydroError::invalid_input(
                    "y",
                    p.y.to_string(),
                    "Half-breadth must not be negative",
                ));
            }
        }
        points.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.z.partial_cmp(&b.z).unwrap_or(std::cmp::Ordering::Equal))
        });
        Ok(OffsetTable { points })
    }

    /// All points, sorted by (x, z)
    pub fn points(&self) -> &[OffsetPoint] {
        &self.points
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct station positions, ascending
    pub fn station_positions(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = Vec::new();
        for p in &self.points {
            if xs.last().map_or(true, |&last| p.x != last) {
                xs.push(p.x);
            }
        }
        xs
    }

    /// Points belonging to one station, sorted by z.
    ///
    /// Exact x match; returns an empty slice for unknown stations.
    pub fn station_points(&self, x: f64) -> &[OffsetPoint] {
        let start = self.points.partition_point(|p| p.x < x);
        let end = self.points.partition_point(|p| p.x <= x);
        &self.points[start..end]
    }

    /// Number of distinct stations
    pub fn station_count(&self) -> usize {
        self.station_positions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> OffsetTable {
        OffsetTable::new(vec![
            OffsetPoint::new(10.0, 2.0, 1.0),
            OffsetPoint::new(0.0, 0.0, 0.0),
            OffsetPoint::new(0.0, 2.0, 1.0),
            OffsetPoint::new(10.0, 0.0, 0.0),
            OffsetPoint::new(5.0, 3.0, 1.0),
            OffsetPoint::new(5.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorted_station_grouping() {
        let table = sample_table();
        assert_eq!(table.station_positions(), vec![0.0, 5.0, 10.0]);
        assert_eq!(table.station_count(), 3);

        let mid = table.station_points(5.0);
        assert_eq!(mid.len(), 2);
        // Sorted by z within the station
        assert_eq!(mid[0].z, 0.0);
        assert_eq!(mid[1].z, 1.0);
    }

    #[test]
    fn test_unknown_station_is_empty() {
        let table = sample_table();
        assert!(table.station_points(7.5).is_empty());
    }

    #[test]
    fn test_rejects_negative_half_breadth() {
        let result = OffsetTable::new(vec![OffsetPoint::new(0.0, -0.1, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = OffsetTable::new(vec![OffsetPoint::new(f64::NAN, 1.0, 0.0)]);
        assert!(result.is_err());
        let result = OffsetTable::new(vec![OffsetPoint::new(0.0, 1.0, f64::INFINITY)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(OffsetTable::new(vec![]).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let table = sample_table();
        let json = serde_json::to_string(&table).unwrap();
        let roundtrip: OffsetTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table.len(), roundtrip.len());
        assert_eq!(table.points()[0], roundtrip.points()[0]);
    }
}

//! # Curve Scheduler
//!
//! Runs the per-draft pipeline across a batch of requested drafts and
//! collects the results into an ordered curve table.
//!
//! Each draft is one independent unit of work: a pure function of the
//! shared read-only [`HullGeometry`], the draft, and the configuration.
//! Units are dispatched to a fixed-size rayon pool (sized from the
//! configuration, default = available parallelism) and the collected
//! records are sorted by ascending draft - completion order is never
//! assumed to match request order.
//!
//! Non-positive drafts are filtered out before dispatch and reported in
//! the result's skip list; they never fail the batch.
//!
//! ## Example
//!
//! ```rust
//! use hydro_core::geometry::HullGeometry;
//! use hydro_core::offsets::{OffsetPoint, OffsetTable};
//! use hydro_core::scheduler::{curves, ComputeConfig};
//!
//! let table = OffsetTable::new(vec![
//!     OffsetPoint::new(0.0, 2.0, 0.0),
//!     OffsetPoint::new(0.0, 2.0, 3.0),
//!     OffsetPoint::new(10.0, 2.0, 0.0),
//!     OffsetPoint::new(10.0, 2.0, 3.0),
//! ]).unwrap();
//! let config = ComputeConfig::default();
//! let hull = HullGeometry::build(&table, config.interpolation).unwrap();
//!
//! let set = curves(&hull, &[1.0, 0.5, -2.0], &config).unwrap();
//! assert_eq!(set.records.len(), 2);
//! assert_eq!(set.skipped, vec![-2.0]);
//! ```

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{HydroError, HydroResult};
use crate::geometry::HullGeometry;
use crate::interp::InterpMethod;
use crate::numeric::DEFAULT_QUAD_TOL;
use crate::record::HydrostaticRecord;
use crate::section::section_area;
use crate::volume::volume;
use crate::waterline::WaterlineExtent;
use crate::waterplane::waterplane;

/// Salt water density (t/m³), the default fluid
pub const SALT_WATER_DENSITY: f64 = 1.025;

/// Default tolerance for transom/station coincidence checks (m)
pub const DEFAULT_STATION_TOL: f64 = 1e-3;

/// Configuration for one computation request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "interpolation": "monotone_cubic",
///   "density": 1.025,
///   "quadrature_tolerance": 1e-6,
///   "station_tolerance": 1e-3,
///   "threads": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// Interpolation method for every hull curve
    pub interpolation: InterpMethod,
    /// Fluid density (t/m³)
    pub density: f64,
    /// Absolute tolerance for adaptive quadrature
    pub quadrature_tolerance: f64,
    /// Station coincidence tolerance for transom detection (m).
    /// Scale-dependent: the 1e-3 default suits meter-scale hulls.
    pub station_tolerance: f64,
    /// Worker pool size; `None` uses available parallelism
    pub threads: Option<usize>,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        ComputeConfig {
            interpolation: InterpMethod::default(),
            density: SALT_WATER_DENSITY,
            quadrature_tolerance: DEFAULT_QUAD_TOL,
            station_tolerance: DEFAULT_STATION_TOL,
            threads: None,
        }
    }
}

impl ComputeConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> HydroResult<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(HydroError::invalid_input(
                "density",
                self.density.to_string(),
                "Fluid density must be positive",
            ));
        }
        if !self.quadrature_tolerance.is_finite() || self.quadrature_tolerance <= 0.0 {
            return Err(HydroError::invalid_input(
                "quadrature_tolerance",
                self.quadrature_tolerance.to_string(),
                "Quadrature tolerance must be positive",
            ));
        }
        if !self.station_tolerance.is_finite() || self.station_tolerance < 0.0 {
            return Err(HydroError::invalid_input(
                "station_tolerance",
                self.station_tolerance.to_string(),
                "Station tolerance must not be negative",
            ));
        }
        Ok(())
    }
}

/// Ordered hydrostatic curve table: one record per valid draft, sorted
/// ascending, plus the drafts that were skipped as invalid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HydrostaticCurveSet {
    /// Records sorted by ascending draft
    pub records: Vec<HydrostaticRecord>,
    /// Requested drafts dropped before dispatch (non-positive)
    pub skipped: Vec<f64>,
}

impl HydrostaticCurveSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compute the full hydrostatic record for a single draft.
///
/// The dependency-ordered pipeline: waterline extent, then per-station
/// section areas, then waterplane and volume integration, then derived
/// arithmetic. Pure with respect to the shared geometry - safe to call
/// concurrently from any number of workers.
///
/// Returns `InvalidDraft` for a draft that is not strictly positive.
pub fn properties_at(
    geometry: &HullGeometry,
    draft: f64,
    config: &ComputeConfig,
) -> HydroResult<HydrostaticRecord> {
    if !draft.is_finite() || draft <= 0.0 {
        return Err(HydroError::invalid_draft(draft));
    }

    let extent = WaterlineExtent::locate(geometry, draft);
    debug!(
        "draft {draft}: extent [{:.4}, {:.4}], converged = {}",
        extent.x_aft, extent.x_fwd, extent.converged
    );

    let section_areas: Vec<(f64, f64)> = geometry
        .station_positions()
        .into_iter()
        .map(|x| {
            (
                x,
                section_area(geometry, x, draft, config.quadrature_tolerance),
            )
        })
        .collect();
    let max_section_area = section_areas.iter().map(|(_, a)| *a).fold(0.0, f64::max);

    let wp = waterplane(
        geometry,
        &extent,
        draft,
        config.station_tolerance,
        config.quadrature_tolerance,
    );
    let vol = volume(
        geometry,
        &extent,
        &section_areas,
        draft,
        config.station_tolerance,
        config.quadrature_tolerance,
    );
    debug!(
        "draft {draft}: A_wp = {:.4}, V = {:.4}, A_max = {max_section_area:.4}",
        wp.area, vol.volume
    );

    Ok(HydrostaticRecord::assemble(
        draft,
        config.density,
        &extent,
        &wp,
        &vol,
        max_section_area,
    ))
}

/// Compute hydrostatic curves for a batch of drafts.
///
/// Valid (positive) drafts are dispatched to a fixed-size worker pool;
/// invalid drafts land in the skip list. Results are sorted by
/// ascending draft regardless of completion order. A batch with no
/// valid drafts returns an empty record table, not an error.
pub fn curves(
    geometry: &HullGeometry,
    drafts: &[f64],
    config: &ComputeConfig,
) -> HydroResult<HydrostaticCurveSet> {
    config.validate()?;

    let (valid, skipped): (Vec<f64>, Vec<f64>) = drafts
        .iter()
        .copied()
        .partition(|d| d.is_finite() && *d > 0.0);
    if !skipped.is_empty() {
        info!("skipping {} invalid draft(s): {skipped:?}", skipped.len());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()
        .map_err(|e| HydroError::Internal {
            message: format!("failed to build worker pool: {e}"),
        })?;

    info!(
        "dispatching {} draft(s) to {} worker(s)",
        valid.len(),
        pool.current_num_threads()
    );

    let mut records: Vec<HydrostaticRecord> = pool.install(|| {
        valid
            .par_iter()
            .filter_map(|&draft| properties_at(geometry, draft, config).ok())
            .collect()
    });

    records.sort_by(|a, b| {
        a.draft
            .partial_cmp(&b.draft)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(HydrostaticCurveSet { records, skipped })
}

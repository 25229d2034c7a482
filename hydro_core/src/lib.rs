//! # hydro_core - Naval Hydrostatics Calculation Engine
//!
//! `hydro_core` computes hydrostatic properties (displaced volume,
//! centers of buoyancy and flotation, metacentric radii, form
//! coefficients) for an arbitrary hull described by a scattered offset
//! table, across a range of drafts.
//!
//! ## Design Philosophy
//!
//! - **Two-phase**: build an immutable [`geometry::HullGeometry`] once,
//!   then run stateless per-draft computations against it
//! - **Parallel by default**: drafts are independent units of work on a
//!   shared read-only geometry; the scheduler spreads them over a
//!   worker pool and sorts the results
//! - **JSON-First**: inputs, configuration, records, and errors all
//!   implement Serialize/Deserialize
//! - **Graceful numerics**: root-finding and quadrature degrade to
//!   boundary fallbacks and best estimates, never batch failures
//!
//! ## Quick Start
//!
//! ```rust
//! use hydro_core::geometry::HullGeometry;
//! use hydro_core::offsets::{OffsetPoint, OffsetTable};
//! use hydro_core::scheduler::{curves, ComputeConfig};
//!
//! // A 10 m box-shaped hull, 4 m beam, 3 m deep
//! let table = OffsetTable::new(vec![
//!     OffsetPoint::new(0.0, 2.0, 0.0),
//!     OffsetPoint::new(0.0, 2.0, 3.0),
//!     OffsetPoint::new(10.0, 2.0, 0.0),
//!     OffsetPoint::new(10.0, 2.0, 3.0),
//! ]).unwrap();
//!
//! let config = ComputeConfig::default();
//! let hull = HullGeometry::build(&table, config.interpolation).unwrap();
//! let set = curves(&hull, &[0.5, 1.0, 1.5, 2.0], &config).unwrap();
//!
//! for record in &set.records {
//!     println!("T = {:.2} m: V = {:.2} m3", record.draft, record.volume);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`offsets`] - Validated offset table input
//! - [`interp`] - Linear and monotone-cubic (PCHIP) curves
//! - [`numeric`] - Adaptive quadrature and Brent root finding
//! - [`geometry`] - Interpolated hull form, built once and shared
//! - [`waterline`] - Waterline extent location per draft
//! - [`section`] - Submerged station areas and vertical moments
//! - [`waterplane`] - Waterplane area, LCF, inertias
//! - [`volume`] - Displaced volume, LCB, VCB
//! - [`record`] - Hydrostatic record and derived coefficients
//! - [`scheduler`] - Parallel per-draft dispatch and curve assembly
//! - [`errors`] - Structured error types

pub mod errors;
pub mod geometry;
pub mod interp;
pub mod numeric;
pub mod offsets;
pub mod record;
pub mod scheduler;
pub mod section;
pub mod volume;
pub mod waterline;
pub mod waterplane;

// Re-export commonly used types at crate root for convenience
pub use errors::{HydroError, HydroResult};
pub use geometry::HullGeometry;
pub use interp::InterpMethod;
pub use offsets::{OffsetPoint, OffsetTable};
pub use record::HydrostaticRecord;
pub use scheduler::{curves, properties_at, ComputeConfig, HydrostaticCurveSet};

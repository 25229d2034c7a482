//! # Hydrostatic Record
//!
//! One row of the hydrostatic curve table: everything known about the
//! hull at a single draft. Built by [`HydrostaticRecord::assemble`]
//! from the integrated waterplane and volume properties plus pure
//! arithmetic for the derived quantities (metacentric radii, immersion
//! and trim moments, form coefficients).
//!
//! Every derived quotient is guarded: a denominator below 1e-6
//! defaults the quotient to 0 instead of producing infinities at
//! near-empty drafts. This keeps degenerate rows (zero volume, zero
//! waterplane) representable without special cases downstream.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "draft": 1.5,
//!   "volume": 60.0,
//!   "displacement": 61.5,
//!   "waterplane_area": 40.0,
//!   "lwl": 10.0,
//!   "bwl": 4.0,
//!   "lcb": 5.0,
//!   "vcb": 0.75,
//!   "lcf": 5.0,
//!   "transverse_inertia": 53.33,
//!   "longitudinal_inertia": 333.33,
//!   "bm_t": 0.889,
//!   "km_t": 1.639,
//!   "bm_l": 5.556,
//!   "km_l": 6.306,
//!   "tpc": 0.41,
//!   "mtc": 0.342,
//!   "cb": 1.0,
//!   "cp": 1.0,
//!   "cwp": 1.0,
//!   "cm": 1.0,
//!   "extent_converged": true
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::volume::VolumeProperties;
use crate::waterline::WaterlineExtent;
use crate::waterplane::WaterplaneProperties;

/// Denominators below this threshold default their quotient to 0
const NEAR_ZERO: f64 = 1e-6;

/// Guarded division: 0 when the denominator is effectively 0.
fn ratio(num: f64, den: f64) -> f64 {
    if den.abs() < NEAR_ZERO {
        0.0
    } else {
        num / den
    }
}

/// Complete hydrostatic properties at one draft. Immutable once
/// assembled; owned by the curve set that collects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrostaticRecord {
    /// Draft (m)
    pub draft: f64,
    /// Displaced volume (m³)
    pub volume: f64,
    /// Displacement (t) = volume × fluid density
    pub displacement: f64,
    /// Waterplane area A_wp (m²)
    pub waterplane_area: f64,
    /// Waterline length LWL (m)
    pub lwl: f64,
    /// Waterline breadth BWL (m)
    pub bwl: f64,
    /// Longitudinal center of buoyancy (m)
    pub lcb: f64,
    /// Vertical center of buoyancy (m above baseline)
    pub vcb: f64,
    /// Longitudinal center of flotation (m)
    pub lcf: f64,
    /// Waterplane second moment about the centerline (m⁴)
    pub transverse_inertia: f64,
    /// Waterplane second moment about the transverse axis through LCF (m⁴)
    pub longitudinal_inertia: f64,
    /// Transverse metacentric radius BM_t = I_T / V (m)
    pub bm_t: f64,
    /// Transverse metacentric height above keel KM_t = VCB + BM_t (m)
    pub km_t: f64,
    /// Longitudinal metacentric radius BM_l = I_L / V (m)
    pub bm_l: f64,
    /// Longitudinal metacentric height above keel KM_l = VCB + BM_l (m)
    pub km_l: f64,
    /// Tons per centimeter immersion (t/cm)
    pub tpc: f64,
    /// Moment to change trim one centimeter (t·m/cm)
    pub mtc: f64,
    /// Block coefficient Cb = V / (LWL · BWL · T)
    pub cb: f64,
    /// Prismatic coefficient Cp = V / (A_max · LWL)
    pub cp: f64,
    /// Waterplane coefficient Cwp = A_wp / (LWL · BWL)
    pub cwp: f64,
    /// Midship coefficient Cm = Cb / Cp
    pub cm: f64,
    /// False when the waterline extent fell back to a domain boundary
    /// after a failed root search
    pub extent_converged: bool,
}

impl HydrostaticRecord {
    /// Combine integrated properties into one record.
    ///
    /// `max_section_area` is the largest submerged station area at this
    /// draft (the midship area for conventional hulls), used for the
    /// prismatic coefficient.
    pub fn assemble(
        draft: f64,
        density: f64,
        extent: &WaterlineExtent,
        wp: &WaterplaneProperties,
        vol: &VolumeProperties,
        max_section_area: f64,
    ) -> Self {
        let lwl = extent.length();
        let bm_t = ratio(wp.transverse_inertia, vol.volume);
        let bm_l = ratio(wp.longitudinal_inertia, vol.volume);
        let cb = ratio(vol.volume, lwl * wp.breadth * draft);
        let cp = ratio(vol.volume, max_section_area * lwl);

        HydrostaticRecord {
            draft,
            volume: vol.volume,
            displacement: vol.volume * density,
            waterplane_area: wp.area,
            lwl,
            bwl: wp.breadth,
            lcb: vol.lcb,
            vcb: vol.vcb,
            lcf: wp.lcf,
            transverse_inertia: wp.transverse_inertia,
            longitudinal_inertia: wp.longitudinal_inertia,
            bm_t,
            km_t: vol.vcb + bm_t,
            bm_l,
            km_l: vol.vcb + bm_l,
            tpc: wp.area * density / 100.0,
            mtc: ratio(wp.longitudinal_inertia * density, 100.0 * lwl),
            cb,
            cp,
            cwp: ratio(wp.area, lwl * wp.breadth),
            cm: ratio(cb, cp),
            extent_converged: extent.converged,
        }
    }
}

//! Ground-resolution math for nadir aerial imagery.
//!
//! Relates a camera's flying height above ground level (AGL), its sensor
//! pixel dimensions, and its angular field of view to the ground-sampled
//! pixel resolution, for straight-down imagery only. Two entry points
//! cover the two directions of the mapping:
//!
//! - [`projector::resolution_from_heights`]: flying heights in, pixel
//!   resolutions and instantaneous fields of view (IFOV) out.
//! - [`projector::heights_from_resolutions`]: required pixel resolutions
//!   in, flying heights and IFOV out.
//!
//! All linear quantities (heights, resolutions, IFOV) must share one
//! unit; the math is unit independent. The calculations are basic
//! right-triangle trigonometry and ignore lens distortion, so treat the
//! results as estimates. They hold for standard lenses only; as a rule
//! of thumb the horizontal field of view should be 70 degrees or less.

pub mod geometry;
pub mod list_arg;
pub mod projector;
pub mod report;
pub mod series;
pub mod units;

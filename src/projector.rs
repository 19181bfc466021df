//! Forward and inverse projection between flying height and pixel resolution.
//!
//! Both directions share one right-triangle model: the tangent of half
//! the lens angle relates half the ground footprint (IFOV) to the flying
//! height. They are kept as two explicit functions rather than one
//! parameterized inversion so each formula stays auditable against its
//! published derivation.
//!
//! Note that the two directions are exact algebraic inverses of each
//! other only when `tan(fov_x/2) / pixels_x == tan(fov_y/2) / pixels_y`;
//! otherwise the X/Y averaging leaves a small residual (about 0.05 % for
//! a 4000x3000 px, 60°x45° camera).

use crate::geometry::{GeometryError, OpticalGeometry};
use crate::series::{ResultRow, ResultSeries};
use thiserror::Error;

/// Forward-mode scale: converts the per-pixel footprint fraction into
/// the working linear unit scale. A fixed convention carried from the
/// published derivation, reproduced exactly for numeric compatibility;
/// not derived from first principles.
pub const FORWARD_SCALE: f64 = 100.0;

/// Inverse-mode divisor, double the forward scale. Same convention,
/// same caveat as [`FORWARD_SCALE`].
pub const INVERSE_SCALE: f64 = 200.0;

/// Errors for a projection request.
///
/// Both kinds are detected eagerly, before any output row is produced,
/// and fail the whole batch. There are no partial results; re-prompting
/// or re-validating is the caller's job.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Malformed camera parameters (degenerate angle or pixel count).
    #[error("invalid camera geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    /// A non-positive or non-finite element in the input list.
    #[error("{quantity} {value} at position {index} must be positive and finite")]
    InvalidInput {
        quantity: &'static str,
        index: usize,
        value: f64,
    },
}

/// Check every element positive and finite, then return the batch
/// sorted ascending. Positions in errors refer to the caller's order.
fn validated_ascending(
    values: &[f64],
    quantity: &'static str,
) -> Result<Vec<f64>, ProjectionError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(ProjectionError::InvalidInput {
                quantity,
                index,
                value,
            });
        }
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Compute pixel resolutions and IFOV for a batch of flying heights.
///
/// For each height `h` (independently, ascending order):
///
/// ```text
/// ifov_x = 2 · h · tan(fov_x / 2)
/// ifov_y = 2 · h · tan(fov_y / 2)
/// pixel_resolution = ((ifov_x / pixels_x) + (ifov_y / pixels_y)) · 100 / 2
/// ```
///
/// # Errors
/// [`ProjectionError::InvalidGeometry`] for a degenerate camera,
/// [`ProjectionError::InvalidInput`] for a non-positive or non-finite
/// height. Either fails the whole batch before any row is produced.
pub fn resolution_from_heights(
    geometry: &OpticalGeometry,
    heights: &[f64],
) -> Result<ResultSeries, ProjectionError> {
    geometry.validate()?;
    let heights = validated_ascending(heights, "flying height")?;

    let tan_half_x = geometry.tan_half_x();
    let tan_half_y = geometry.tan_half_y();

    let rows = heights
        .into_iter()
        .map(|agl| {
            let ifov_x = 2.0 * agl * tan_half_x;
            let ifov_y = 2.0 * agl * tan_half_y;
            let pix_res_x = (ifov_x / geometry.pixels_x) * FORWARD_SCALE;
            let pix_res_y = (ifov_y / geometry.pixels_y) * FORWARD_SCALE;
            ResultRow {
                input: agl,
                agl,
                ifov_x,
                ifov_y,
                pixel_resolution: (pix_res_x + pix_res_y) / 2.0,
            }
        })
        .collect();

    Ok(ResultSeries::new(rows))
}

/// Compute the flying heights needed to achieve a batch of required
/// pixel resolutions, and the IFOV at those heights.
///
/// For each required resolution `r` (independently, ascending order):
///
/// ```text
/// agl_x = pixels_x · r / (tan(fov_x / 2) · 200)
/// agl_y = pixels_y · r / (tan(fov_y / 2) · 200)
/// agl   = (agl_x + agl_y) / 2
/// ifov_x = 2 · agl · tan(fov_x / 2)     (ifov_y analogously)
/// ```
///
/// # Errors
/// Mirror [`resolution_from_heights`]: `InvalidGeometry` for a
/// degenerate camera, `InvalidInput` for a non-positive or non-finite
/// resolution. Whole-batch failure, no partial results.
pub fn heights_from_resolutions(
    geometry: &OpticalGeometry,
    resolutions: &[f64],
) -> Result<ResultSeries, ProjectionError> {
    geometry.validate()?;
    let resolutions = validated_ascending(resolutions, "required resolution")?;

    let tan_half_x = geometry.tan_half_x();
    let tan_half_y = geometry.tan_half_y();

    let rows = resolutions
        .into_iter()
        .map(|resolution| {
            let agl_x = (geometry.pixels_x * resolution * (1.0 / tan_half_x)) / INVERSE_SCALE;
            let agl_y = (geometry.pixels_y * resolution * (1.0 / tan_half_y)) / INVERSE_SCALE;
            let agl = (agl_x + agl_y) / 2.0;
            ResultRow {
                input: resolution,
                agl,
                ifov_x: 2.0 * tan_half_x * agl,
                ifov_y: 2.0 * tan_half_y * agl,
                pixel_resolution: resolution,
            }
        })
        .collect();

    Ok(ResultSeries::new(rows))
}

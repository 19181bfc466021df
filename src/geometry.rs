//! Camera sensor and lens geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sensor axis, used to pinpoint which dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal (width) axis.
    X,
    /// Vertical (height) axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Errors for malformed camera parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{axis} field of view of {degrees}° is outside the open interval (0°, 180°)")]
    FovOutOfRange { axis: Axis, degrees: f64 },
    #[error("{axis} pixel count of {pixels} must be positive and finite")]
    InvalidPixelCount { axis: Axis, pixels: f64 },
}

/// Camera sensor dimensions and lens field of view.
///
/// Shared read-only input to both projection directions. Pixel counts
/// are kept as reals so sensors reported with fractional effective
/// dimensions work unchanged. The field of view angles must lie
/// strictly between 0° and 180° so their half-angle tangents are
/// positive and finite; [`OpticalGeometry::validate`] enforces this and
/// both projector entry points call it before producing any output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalGeometry {
    /// Sensor width in pixels.
    pub pixels_x: f64,
    /// Sensor height in pixels.
    pub pixels_y: f64,
    /// Horizontal lens field of view in degrees.
    pub fov_x_degrees: f64,
    /// Vertical lens field of view in degrees.
    pub fov_y_degrees: f64,
}

impl OpticalGeometry {
    /// Create a new geometry. Validation happens at use, not here, so
    /// a geometry parsed from external input can still be inspected.
    pub fn new(pixels_x: f64, pixels_y: f64, fov_x_degrees: f64, fov_y_degrees: f64) -> Self {
        Self {
            pixels_x,
            pixels_y,
            fov_x_degrees,
            fov_y_degrees,
        }
    }

    /// Check that both pixel counts are positive and both field of view
    /// angles lie strictly inside (0°, 180°).
    pub fn validate(&self) -> Result<(), GeometryError> {
        for (axis, pixels) in [(Axis::X, self.pixels_x), (Axis::Y, self.pixels_y)] {
            if !pixels.is_finite() || pixels <= 0.0 {
                return Err(GeometryError::InvalidPixelCount { axis, pixels });
            }
        }
        for (axis, degrees) in [
            (Axis::X, self.fov_x_degrees),
            (Axis::Y, self.fov_y_degrees),
        ] {
            if !degrees.is_finite() || degrees <= 0.0 || degrees >= 180.0 {
                return Err(GeometryError::FovOutOfRange { axis, degrees });
            }
        }
        Ok(())
    }

    /// Tangent of half the horizontal field of view.
    ///
    /// The right-triangle model behind both projection directions: half
    /// the ground footprint over the flying height.
    pub fn tan_half_x(&self) -> f64 {
        (self.fov_x_degrees / 2.0).to_radians().tan()
    }

    /// Tangent of half the vertical field of view.
    pub fn tan_half_y(&self) -> f64 {
        (self.fov_y_degrees / 2.0).to_radians().tan()
    }
}

impl fmt::Display for OpticalGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} px, {}°x{}° FOV",
            self.pixels_x, self.pixels_y, self.fov_x_degrees, self.fov_y_degrees
        )
    }
}

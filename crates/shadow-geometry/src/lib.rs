//! Exact overlap areas between flow-plane silhouettes.
//!
//! Every 3D part is reduced to a 2D silhouette on the plane perpendicular to the
//! flow. This crate holds those silhouettes ([`Circle`], [`Rectangle`], and the
//! opaque [`Profile`]) and the pairwise overlap routines that the wake solver
//! queries for each upstream/downstream pair.

pub mod area;
pub mod error;
pub mod intersection;
pub mod point;
pub mod shapes;

pub use error::GeometryError;
pub use intersection::{overlap, LineCircleHit};
pub use point::Point2d;
pub use shapes::{Circle, Profile, Rectangle, Segment, Shape};

/// Decimal places every reported overlap area is rounded to.
pub const AREA_DECIMALS: i32 = 3;

/// Round a value to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round an area to the fixed reporting precision.
pub fn round_area(area: f64) -> f64 {
    round_to(area, AREA_DECIMALS)
}

/// Tolerances for geometric comparisons in the flow plane.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Points closer than this are considered coincident (meters).
    pub coincidence: f64,
    /// Slack allowed when testing whether a point lies on a finite segment.
    pub on_segment: f64,
    /// Slack allowed when verifying that a root lies on a circle boundary.
    pub on_boundary: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-9,
            on_segment: 1e-9,
            on_boundary: 1e-7,
        }
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_area() {
        assert_eq!(round_area(0.785_398), 0.785);
        assert_eq!(round_area(1.2346), 1.235);
        assert_eq!(round_area(-0.0004), -0.0);
    }

    #[test]
    fn test_round_to_other_precision() {
        assert_eq!(round_to(std::f64::consts::PI, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}

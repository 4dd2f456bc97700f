//! Elementary area formulas shared by the overlap routines.

use std::f64::consts::PI;

use crate::point::Point2d;
use crate::shapes::Circle;

/// Triangle area from its three side lengths (Heron's formula).
///
/// Nearly collinear triples can drive the product slightly negative; those are
/// clamped to zero area.
pub fn triangle_area(a: f64, b: f64, c: f64) -> f64 {
    let s = 0.5 * (a + b + c);
    let product = s * (s - a) * (s - b) * (s - c);
    product.max(0.0).sqrt()
}

/// Triangle area from its vertices, via side lengths.
pub fn triangle_area_from_points(p1: &Point2d, p2: &Point2d, p3: &Point2d) -> f64 {
    triangle_area(p1.distance_to(p2), p2.distance_to(p3), p1.distance_to(p3))
}

/// Area of the smaller circular segment cut off by a chord of length `chord`.
pub fn circular_segment_area(radius: f64, chord: f64) -> f64 {
    let half = (0.5 * chord / radius).clamp(-1.0, 1.0);
    let theta = 2.0 * half.asin();
    let apothem = (radius * radius - 0.25 * chord * chord).max(0.0).sqrt();
    radius * radius * theta / 2.0 - 0.5 * apothem * chord
}

/// Area of the part of a circle lying beyond a line at signed distance `offset`
/// from its centre.
///
/// A positive offset gives the minor cap, a negative one the major cap; offsets
/// past the rim clamp to an empty or full circle.
pub fn cap_area(radius: f64, offset: f64) -> f64 {
    if offset >= radius {
        return 0.0;
    }
    if offset <= -radius {
        return PI * radius * radius;
    }
    let root = (radius * radius - offset * offset).max(0.0).sqrt();
    radius * radius * (offset / radius).acos() - offset * root
}

/// Area of `circle` on the far side of the line through `a` and `b`, measured
/// away from the point `away_from`.
pub fn cap_beyond_line(circle: &Circle, a: Point2d, b: Point2d, away_from: Point2d) -> f64 {
    let dir = b - a;
    let len = dir.length();
    if len == 0.0 {
        return 0.0;
    }
    let mut normal = dir.perp().scale(1.0 / len);
    if (away_from - a).dot(&normal) > 0.0 {
        normal = normal.scale(-1.0);
    }
    let offset = (a - circle.center()).dot(&normal);
    cap_area(circle.radius(), offset)
}

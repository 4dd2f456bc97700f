use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point on the flow-perpendicular projection plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Counter-clockwise perpendicular, used as a chord normal.
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2d {
    type Output = Point2d;
    fn add(self, rhs: Self) -> Self::Output {
        Point2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2d {
    type Output = Point2d;
    fn sub(self, rhs: Self) -> Self::Output {
        Point2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2d::new(1.0, 1.0);
        let b = Point2d::new(4.0, 5.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.distance_squared_to(&b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_midpoint() {
        let m = Point2d::ORIGIN.midpoint(&Point2d::new(2.0, 4.0));
        assert!((m.x - 1.0).abs() < 1e-12);
        assert!((m.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_perp_is_orthogonal() {
        let v = Point2d::new(3.0, -2.0);
        assert!(v.dot(&v.perp()).abs() < 1e-12);
        assert!((v.perp().length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point2d::new(1.0, 2.0) + Point2d::new(10.0, 20.0);
        assert_eq!(p, Point2d::new(11.0, 22.0));
        let d = p - Point2d::new(1.0, 2.0);
        assert_eq!(d, Point2d::new(10.0, 20.0));
    }
}

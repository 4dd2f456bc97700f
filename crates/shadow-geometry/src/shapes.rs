use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::point::Point2d;

fn require_finite(what: &'static str, name: &str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::Degenerate {
            what,
            reason: format!("{name} is not finite ({value})"),
        })
    }
}

// ─── Circle ─────────────────────────────────────────────────────────────────

/// Silhouette of a sphere, an end-on cylinder, or a face-on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    center: Point2d,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point2d, radius: f64) -> Result<Self, GeometryError> {
        require_finite("circle", "centre x", center.x)?;
        require_finite("circle", "centre y", center.y)?;
        require_finite("circle", "radius", radius)?;
        if radius <= 0.0 {
            return Err(GeometryError::Degenerate {
                what: "circle",
                reason: format!("radius must be positive, got {radius}"),
            });
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point2d {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Strictly inside the boundary.
    pub fn contains_point(&self, p: &Point2d) -> bool {
        self.center.distance_to(p) < self.radius
    }
}

// ─── Segment ────────────────────────────────────────────────────────────────

/// A finite straight segment, stored with its endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2d,
    pub end: Point2d,
}

impl Segment {
    pub fn new(a: Point2d, b: Point2d) -> Self {
        if (a.x, a.y) <= (b.x, b.y) {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Slope of the supporting line, or `None` for a vertical segment.
    pub fn slope(&self) -> Option<f64> {
        if self.end.x == self.start.x {
            None
        } else {
            Some((self.end.y - self.start.y) / (self.end.x - self.start.x))
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Whether `p` lies on this finite segment, within `tol`.
    pub fn contains_point(&self, p: &Point2d, tol: f64) -> bool {
        let (min_x, max_x) = (self.start.x.min(self.end.x), self.start.x.max(self.end.x));
        let (min_y, max_y) = (self.start.y.min(self.end.y), self.start.y.max(self.end.y));
        if p.x < min_x - tol || p.x > max_x + tol || p.y < min_y - tol || p.y > max_y + tol {
            return false;
        }
        let dir = self.end - self.start;
        let len = dir.length();
        if len < tol {
            return self.start.distance_to(p) <= tol;
        }
        let offset = (*p - self.start).dot(&dir.perp()) / len;
        offset.abs() <= tol
    }
}

// ─── Rectangle ──────────────────────────────────────────────────────────────

/// Axis-aligned silhouette of a cuboid, a cross-flow cylinder, or an edge-on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Rectangle {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, GeometryError> {
        require_finite("rectangle", "left", left)?;
        require_finite("rectangle", "right", right)?;
        require_finite("rectangle", "top", top)?;
        require_finite("rectangle", "bottom", bottom)?;
        if right <= left {
            return Err(GeometryError::Degenerate {
                what: "rectangle",
                reason: format!("right ({right}) must exceed left ({left})"),
            });
        }
        if top <= bottom {
            return Err(GeometryError::Degenerate {
                what: "rectangle",
                reason: format!("top ({top}) must exceed bottom ({bottom})"),
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// Rectangle of the given extents centred on `center`.
    pub fn centered(center: Point2d, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(
            center.x - 0.5 * width,
            center.x + 0.5 * width,
            center.y + 0.5 * height,
            center.y - 0.5 * height,
        )
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Point2d {
        Point2d::new(
            0.5 * (self.left + self.right),
            0.5 * (self.top + self.bottom),
        )
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point2d; 4] {
        [
            Point2d::new(self.left, self.top),
            Point2d::new(self.right, self.top),
            Point2d::new(self.left, self.bottom),
            Point2d::new(self.right, self.bottom),
        ]
    }

    /// Bounding edges: top, bottom, left, right.
    pub fn edges(&self) -> [Segment; 4] {
        let [tl, tr, bl, br] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(bl, br),
            Segment::new(bl, tl),
            Segment::new(br, tr),
        ]
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: &Point2d) -> bool {
        self.left <= p.x && p.x <= self.right && self.bottom <= p.y && p.y <= self.top
    }

    /// Strict interior test.
    pub fn contains_point_strictly(&self, p: &Point2d) -> bool {
        self.left < p.x && p.x < self.right && self.bottom < p.y && p.y < self.top
    }
}

// ─── Profile ────────────────────────────────────────────────────────────────

/// A silhouette whose area is known but which has no supported overlap routine,
/// such as the side view of a cone-capped cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    center: Point2d,
    area: f64,
}

impl Profile {
    pub fn new(center: Point2d, area: f64) -> Result<Self, GeometryError> {
        require_finite("profile", "area", area)?;
        if area <= 0.0 {
            return Err(GeometryError::Degenerate {
                what: "profile",
                reason: format!("area must be positive, got {area}"),
            });
        }
        Ok(Self { center, area })
    }

    pub fn center(&self) -> Point2d {
        self.center
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}

// ─── Shape ──────────────────────────────────────────────────────────────────

/// Any silhouette a part can project onto the flow plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Profile(Profile),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Profile(p) => p.area(),
        }
    }

    pub fn center(&self) -> Point2d {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Rectangle(r) => r.center(),
            Shape::Profile(p) => p.center(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Profile(_) => "profile",
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Profile> for Shape {
    fn from(p: Profile) -> Self {
        Shape::Profile(p)
    }
}

use approx::abs_diff_eq;
use tracing::trace;

use crate::area::{cap_area, cap_beyond_line, circular_segment_area, triangle_area_from_points};
use crate::error::GeometryError;
use crate::point::Point2d;
use crate::shapes::{Circle, Rectangle, Segment, Shape};
use crate::{default_tolerance, round_area};

/// Result of intersecting the supporting line of a segment with a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleHit {
    Miss,
    Tangent(Point2d),
    Secant(Point2d, Point2d),
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

/// Exact overlap area of two silhouettes, rounded to [`crate::AREA_DECIMALS`].
///
/// Any pairing that involves a [`Shape::Profile`] is rejected.
pub fn overlap(a: &Shape, b: &Shape) -> Result<f64, GeometryError> {
    let area = match (a, b) {
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle(c1, c2),
        (Shape::Rectangle(r), Shape::Circle(c)) | (Shape::Circle(c), Shape::Rectangle(r)) => {
            rectangle_circle(r, c)
        }
        (Shape::Rectangle(r1), Shape::Rectangle(r2)) => rectangle_rectangle(r1, r2),
        _ => {
            return Err(GeometryError::UnsupportedIntersection {
                first: a.kind_name(),
                second: b.kind_name(),
            })
        }
    };
    trace!(first = a.kind_name(), second = b.kind_name(), area, "silhouette overlap");
    Ok(area)
}

// ─── Line-Circle Intersection ───────────────────────────────────────────────

/// Intersect the infinite line through `segment` with `circle`.
///
/// The line is written in slope form after translating the circle to the
/// origin; vertical lines have no slope and are solved directly for y.
pub fn line_circle(segment: &Segment, circle: &Circle) -> LineCircleHit {
    let c = circle.center();
    let r = circle.radius();
    let x1 = segment.start.x - c.x;
    let y1 = segment.start.y - c.y;

    match segment.slope() {
        None => {
            let root_sq = r * r - x1 * x1;
            if abs_diff_eq!(root_sq, 0.0, epsilon = 1e-12) {
                LineCircleHit::Tangent(Point2d::new(x1 + c.x, c.y))
            } else if root_sq < 0.0 {
                LineCircleHit::Miss
            } else {
                let y = root_sq.sqrt();
                LineCircleHit::Secant(
                    Point2d::new(x1 + c.x, y + c.y),
                    Point2d::new(x1 + c.x, -y + c.y),
                )
            }
        }
        Some(m) => {
            let a = m * m + 1.0;
            let b = 2.0 * (m * y1 - x1 * m * m);
            let c0 = (m * x1 - y1).powi(2) - r * r;
            let discriminant = b * b - 4.0 * a * c0;

            if abs_diff_eq!(discriminant, 0.0, epsilon = 1e-12) {
                let x = -b / (2.0 * a);
                let y = m * (x - x1) + y1;
                LineCircleHit::Tangent(Point2d::new(x + c.x, y + c.y))
            } else if discriminant < 0.0 {
                LineCircleHit::Miss
            } else {
                let root = discriminant.sqrt();
                let xa = (root - b) / (2.0 * a);
                let xb = (-root - b) / (2.0 * a);
                let ya = m * (xa - x1) + y1;
                let yb = m * (xb - x1) + y1;
                LineCircleHit::Secant(
                    Point2d::new(xa + c.x, ya + c.y),
                    Point2d::new(xb + c.x, yb + c.y),
                )
            }
        }
    }
}

/// Secant points of `circle` that lie on the finite `segment`.
pub fn segment_crossings(segment: &Segment, circle: &Circle) -> Vec<Point2d> {
    let tol = default_tolerance().on_segment;
    match line_circle(segment, circle) {
        LineCircleHit::Secant(p, q) => [p, q]
            .into_iter()
            .filter(|pt| segment.contains_point(pt, tol))
            .collect(),
        _ => Vec::new(),
    }
}

/// Point where the segment from `inside` (strictly within the circle) to
/// `outside` crosses the boundary.
fn exit_point(circle: &Circle, inside: Point2d, outside: Point2d) -> Point2d {
    let d = outside - inside;
    let f = inside - circle.center();
    let a = d.dot(&d);
    let b = 2.0 * d.dot(&f);
    let c = f.dot(&f) - circle.radius() * circle.radius();
    let discriminant = (b * b - 4.0 * a * c).max(0.0);
    let t = ((-b + discriminant.sqrt()) / (2.0 * a)).clamp(0.0, 1.0);
    inside + d.scale(t)
}

// ─── Circle-Circle ──────────────────────────────────────────────────────────

/// Overlap area of two circles.
///
/// The pair is first put in a canonical order so that swapping the arguments
/// cannot change the rounded result.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> f64 {
    let key = |c: &Circle| (c.radius(), c.center().x, c.center().y);
    let (small, big) = {
        let (k1, k2) = (key(c1), key(c2));
        let c1_first = k1
            .0
            .total_cmp(&k2.0)
            .then(k1.1.total_cmp(&k2.1))
            .then(k1.2.total_cmp(&k2.2))
            .is_le();
        if c1_first {
            (c1, c2)
        } else {
            (c2, c1)
        }
    };

    let tol = default_tolerance();
    let distance = big.center().distance_to(&small.center());
    if distance < tol.coincidence {
        // Concentric: the smaller disc is always the overlap.
        return round_area(small.area());
    }

    // Local frame: big circle at the origin, small circle on the +x axis.
    let big_r = big.radius();
    let small_r = small.radius();
    let small_center = Point2d::new(distance, 0.0);

    // Radical line x = chord_x, intersected with the big circle.
    let chord_x = (distance * distance + big_r * big_r - small_r * small_r) / (2.0 * distance);
    let y_sq = big_r * big_r - chord_x * chord_x;

    if y_sq > 0.0 {
        let y = y_sq.sqrt();
        let p = Point2d::new(chord_x, y);
        let q = Point2d::new(chord_x, -y);
        let on_boundary = |pt: &Point2d, center: &Point2d, radius: f64| {
            abs_diff_eq!(
                pt.distance_to(center),
                radius,
                epsilon = tol.on_boundary * radius.max(1.0)
            )
        };
        let valid = [p, q].iter().all(|pt| {
            on_boundary(pt, &Point2d::ORIGIN, big_r) && on_boundary(pt, &small_center, small_r)
        });
        if valid {
            let area = cap_area(big_r, chord_x) + cap_area(small_r, distance - chord_x);
            return round_area(area.min(small.area()));
        }
    }

    disjoint_or_contained(small, big, distance)
}

/// Overlap of two circles whose boundaries do not cross.
fn disjoint_or_contained(small: &Circle, big: &Circle, distance: f64) -> f64 {
    if distance + small.radius() <= big.radius() {
        round_area(small.area())
    } else {
        0.0
    }
}

// ─── Rectangle-Circle ───────────────────────────────────────────────────────

/// Corner adjacency for the order returned by [`Rectangle::corners`].
const NEIGHBORS: [[usize; 2]; 4] = [[1, 2], [0, 3], [0, 3], [1, 2]];
const OPPOSITE: [usize; 4] = [3, 2, 1, 0];

/// Overlap area of an axis-aligned rectangle and a circle.
///
/// Branches on how many rectangle corners lie strictly inside the circle. With
/// one to three covered corners the chord between the two boundary crossings
/// always leaves the circle centre on the covered side, so the arc contributes
/// a minor segment. Any extra chord the circle cuts through an edge whose
/// corners are both uncovered is removed afterwards as a cap.
pub fn rectangle_circle(rect: &Rectangle, circle: &Circle) -> f64 {
    let corners = rect.corners();
    let inside: Vec<usize> = (0..4)
        .filter(|&i| circle.contains_point(&corners[i]))
        .collect();

    let base = match inside.len() {
        4 => return round_area(rect.area()),
        0 => {
            let has_chord = rect
                .edges()
                .iter()
                .any(|e| segment_crossings(e, circle).len() == 2);
            if !has_chord {
                return if rect.contains_point_strictly(&circle.center()) {
                    round_area(circle.area())
                } else {
                    0.0
                };
            }
            circle.area()
        }
        1 => {
            let v = inside[0];
            let [na, nb] = NEIGHBORS[v];
            let pa = exit_point(circle, corners[v], corners[na]);
            let pb = exit_point(circle, corners[v], corners[nb]);
            triangle_area_from_points(&corners[v], &pa, &pb)
                + circular_segment_area(circle.radius(), pa.distance_to(&pb))
        }
        2 => {
            let (v1, v2) = (inside[0], inside[1]);
            if !NEIGHBORS[v1].contains(&v2) {
                // Diagonal corners cannot both be covered alone; only reachable
                // through rounding when every corner sits on the rim.
                return round_area(rect.area().min(circle.area()));
            }
            let o1 = other_neighbor(v1, v2);
            let o2 = other_neighbor(v2, v1);
            let p1 = exit_point(circle, corners[v1], corners[o1]);
            let p2 = exit_point(circle, corners[v2], corners[o2]);
            triangle_area_from_points(&corners[v1], &corners[v2], &p1)
                + triangle_area_from_points(&corners[v2], &p2, &p1)
                + circular_segment_area(circle.radius(), p1.distance_to(&p2))
        }
        _ => {
            let o = (0..4)
                .find(|i| !inside.contains(i))
                .unwrap_or(OPPOSITE[inside[0]]);
            let [na, nb] = NEIGHBORS[o];
            let p1 = exit_point(circle, corners[na], corners[o]);
            let p2 = exit_point(circle, corners[nb], corners[o]);
            rect.area() - triangle_area_from_points(&corners[o], &p1, &p2)
                + circular_segment_area(circle.radius(), p1.distance_to(&p2))
        }
    };

    let excess: f64 = rect
        .edges()
        .iter()
        .filter(|e| !circle.contains_point(&e.start) && !circle.contains_point(&e.end))
        .filter(|e| segment_crossings(e, circle).len() == 2)
        .map(|e| cap_beyond_line(circle, e.start, e.end, rect.center()))
        .sum();

    let area = (base - excess).clamp(0.0, rect.area().min(circle.area()));
    round_area(area)
}

fn other_neighbor(corner: usize, excluded: usize) -> usize {
    let [a, b] = NEIGHBORS[corner];
    if a == excluded {
        b
    } else {
        a
    }
}

// ─── Rectangle-Rectangle ────────────────────────────────────────────────────

/// Overlap area of two axis-aligned rectangles.
pub fn rectangle_rectangle(r1: &Rectangle, r2: &Rectangle) -> f64 {
    let left = r1.left().max(r2.left());
    let right = r1.right().min(r2.right());
    let bottom = r1.bottom().max(r2.bottom());
    let top = r1.top().min(r2.top());

    let box_corners = [
        Point2d::new(left, top),
        Point2d::new(right, top),
        Point2d::new(left, bottom),
        Point2d::new(right, bottom),
    ];
    let shared = box_corners
        .iter()
        .all(|p| r1.contains_point(p) && r2.contains_point(p));

    if shared && right >= left && top >= bottom {
        round_area((right - left) * (top - bottom))
    } else {
        0.0
    }
}

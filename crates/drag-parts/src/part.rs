use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use shadow_geometry::{Circle, Point2d, Profile, Rectangle, Shape};
use tracing::{debug, instrument};

use crate::axis::{Axis, FlowFrame};
use crate::coefficient::{DefaultDrag, DragCoefficient};
use crate::drag::{DragEnvironment, PartSettings};
use crate::error::PartError;

// ─── Part Kinds ─────────────────────────────────────────────────────────────

/// The primitive solid a part is modelled as. Dimensions are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartKind {
    Sphere {
        radius: f64,
    },
    /// Cylinder centred on the part position, its axis along `axis`.
    Cylinder {
        radius: f64,
        length: f64,
        axis: Axis,
    },
    /// Box centred on the part position with the given x, y, z extents.
    Cuboid {
        dimensions: [f64; 3],
    },
    /// A cylinder centred on the part position with a hemispherical nose on
    /// its negative-axis end and a cone tapering to a point on the positive end.
    ConeCappedCylinder {
        radius: f64,
        cylinder_length: f64,
        cone_length: f64,
        axis: Axis,
    },
    /// Thin disk lying in the plane spanned by two axes.
    Disk {
        radius: f64,
        plane: [Axis; 2],
    },
}

impl PartKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            PartKind::Sphere { .. } => "sphere",
            PartKind::Cylinder { .. } => "cylinder",
            PartKind::Cuboid { .. } => "cuboid",
            PartKind::ConeCappedCylinder { .. } => "cone_capped_cylinder",
            PartKind::Disk { .. } => "disk",
        }
    }

    pub fn default_coefficient(&self, defaults: &DefaultDrag) -> DragCoefficient {
        match self {
            PartKind::Sphere { .. } => defaults.sphere,
            PartKind::Cylinder { .. } => defaults.cylinder,
            PartKind::Cuboid { .. } => defaults.cuboid,
            PartKind::ConeCappedCylinder { .. } => defaults.cone_capped_cylinder,
            PartKind::Disk { .. } => defaults.disk,
        }
    }

    /// Enclosed volume (m³). A disk is treated as having no volume.
    pub fn volume(&self) -> f64 {
        match *self {
            PartKind::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            PartKind::Cylinder { radius, length, .. } => PI * radius * radius * length,
            PartKind::Cuboid { dimensions: [x, y, z] } => x * y * z,
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                ..
            } => {
                let r2 = radius * radius;
                2.0 / 3.0 * PI * r2 * radius + PI * r2 * cylinder_length + PI * r2 * cone_length / 3.0
            }
            PartKind::Disk { .. } => 0.0,
        }
    }

    /// Wetted surface area (m²) used for skin friction.
    pub fn default_wet_area(&self) -> f64 {
        match *self {
            PartKind::Sphere { radius } => 4.0 * PI * radius * radius,
            PartKind::Cylinder { radius, length, .. } => 2.0 * PI * radius * (length + radius),
            PartKind::Cuboid { dimensions: [x, y, z] } => 2.0 * (x * y + y * z + z * x),
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                ..
            } => {
                let slant = radius.hypot(cone_length);
                2.0 * PI * radius * radius + 2.0 * PI * radius * cylinder_length + PI * radius * slant
            }
            PartKind::Disk { radius, .. } => 2.0 * PI * radius * radius,
        }
    }
}

// ─── Part ───────────────────────────────────────────────────────────────────

/// A single body of the assembly: a primitive placed at `position`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub name: String,
    pub position: Vector3<f64>,
    pub kind: PartKind,
    /// Overrides the kind's default coefficient when set.
    pub drag_coefficient: Option<DragCoefficient>,
    /// Overrides the geometric wetted area when set.
    pub wet_area: Option<f64>,
    /// Rotating components contribute drag but no moment.
    pub exclude_from_moment: bool,
}

/// Everything about a part that stays fixed during one accumulation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartGeometry {
    pub silhouette: Shape,
    pub characteristic_length: f64,
    pub smallest_coordinate: f64,
    /// Coordinate of the part position along the flow axis.
    pub flow_coordinate: f64,
    pub drag_coefficient: f64,
    pub base_drag: f64,
    pub wet_area: f64,
}

impl Part {
    pub fn new(name: impl Into<String>, position: Vector3<f64>, kind: PartKind) -> Result<Self, PartError> {
        let part = Self {
            name: name.into(),
            position,
            kind,
            drag_coefficient: None,
            wet_area: None,
            exclude_from_moment: false,
        };
        part.validate()?;
        Ok(part)
    }

    pub fn with_drag_coefficient(mut self, coefficient: DragCoefficient) -> Self {
        self.drag_coefficient = Some(coefficient);
        self
    }

    pub fn with_wet_area(mut self, wet_area: f64) -> Self {
        self.wet_area = Some(wet_area);
        self
    }

    pub fn excluded_from_moment(mut self) -> Self {
        self.exclude_from_moment = true;
        self
    }

    fn degenerate(&self, reason: impl Into<String>) -> PartError {
        PartError::Degenerate {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// Reject non-physical dimensions, positions and overrides.
    pub fn validate(&self) -> Result<(), PartError> {
        if self.name.trim().is_empty() {
            return Err(self.degenerate("name is empty"));
        }
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err(self.degenerate("position is not finite"));
        }

        let positive = |label: &str, v: f64| -> Result<(), PartError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(self.degenerate(format!("{label} must be positive, got {v}")))
            }
        };
        let non_negative = |label: &str, v: f64| -> Result<(), PartError> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(self.degenerate(format!("{label} must be non-negative, got {v}")))
            }
        };

        match self.kind {
            PartKind::Sphere { radius } => positive("radius", radius)?,
            PartKind::Cylinder { radius, length, .. } => {
                positive("radius", radius)?;
                positive("length", length)?;
            }
            PartKind::Cuboid { dimensions } => {
                for (axis, d) in Axis::ALL.iter().zip(dimensions) {
                    positive(&format!("{axis} dimension"), d)?;
                }
            }
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                ..
            } => {
                positive("radius", radius)?;
                non_negative("cylinder length", cylinder_length)?;
                non_negative("cone length", cone_length)?;
            }
            PartKind::Disk { radius, plane } => {
                positive("radius", radius)?;
                if plane[0] == plane[1] {
                    return Err(self.degenerate(format!(
                        "disk plane needs two distinct axes, got {} twice",
                        plane[0]
                    )));
                }
            }
        }

        if let Some(cd) = &self.drag_coefficient {
            cd.check().map_err(|reason| PartError::InvalidCoefficient {
                name: self.name.clone(),
                reason,
            })?;
        }
        if let Some(area) = self.wet_area {
            non_negative("wet area", area)?;
        }
        Ok(())
    }

    // ─── Flow-Plane Geometry ────────────────────────────────────────────────

    /// Upstream and downstream reach of the body from its position, measured
    /// along the flow axis.
    pub fn flow_extent(&self, frame: &FlowFrame, settings: &PartSettings) -> (f64, f64) {
        let flow = frame.flow;
        match self.kind {
            PartKind::Sphere { radius } => (radius, radius),
            PartKind::Cylinder { radius, length, axis } => {
                if axis == flow {
                    (0.5 * length, 0.5 * length)
                } else {
                    (radius, radius)
                }
            }
            PartKind::Cuboid { dimensions } => {
                let half = 0.5 * dimensions[flow.index()];
                (half, half)
            }
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                axis,
            } => {
                if axis == flow {
                    (0.5 * cylinder_length + radius, 0.5 * cylinder_length + cone_length)
                } else {
                    (radius, radius)
                }
            }
            PartKind::Disk { radius, plane } => {
                if plane.contains(&flow) {
                    (radius, radius)
                } else {
                    let half = 0.5 * settings.disk_thickness;
                    (half, half)
                }
            }
        }
    }

    /// Extent of the body along the flow axis.
    pub fn characteristic_length(&self, frame: &FlowFrame, settings: &PartSettings) -> f64 {
        match self.kind {
            PartKind::Sphere { radius } => 2.0 * radius,
            PartKind::Cylinder { radius, length, axis } => {
                if axis == frame.flow {
                    length
                } else {
                    2.0 * radius
                }
            }
            PartKind::Cuboid { dimensions } => dimensions[frame.flow.index()],
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                axis,
            } => {
                if axis == frame.flow {
                    cylinder_length + cone_length + radius
                } else {
                    2.0 * radius
                }
            }
            PartKind::Disk { radius, plane } => {
                if plane.contains(&frame.flow) {
                    2.0 * radius
                } else {
                    settings.disk_thickness
                }
            }
        }
    }

    /// Most upstream coordinate the body reaches along the flow axis.
    pub fn smallest_coordinate(&self, frame: &FlowFrame, settings: &PartSettings) -> f64 {
        let (upstream, _) = self.flow_extent(frame, settings);
        frame.along_flow(&self.position) - upstream
    }

    /// Silhouette on the plane perpendicular to the flow.
    pub fn project_silhouette(&self, frame: &FlowFrame, settings: &PartSettings) -> Result<Shape, PartError> {
        let center = frame.project(&self.position);
        let shape = match self.kind {
            PartKind::Sphere { radius } => Circle::new(center, radius)?.into(),
            PartKind::Cylinder { radius, length, axis } => {
                if axis == frame.flow {
                    Circle::new(center, radius)?.into()
                } else {
                    let (w, h) = plane_extents(frame, axis, length, 2.0 * radius);
                    Rectangle::centered(center, w, h)?.into()
                }
            }
            PartKind::Cuboid { dimensions } => Rectangle::centered(
                center,
                dimensions[frame.plane[0].index()],
                dimensions[frame.plane[1].index()],
            )?
            .into(),
            PartKind::ConeCappedCylinder {
                radius,
                cylinder_length,
                cone_length,
                axis,
            } => {
                if axis == frame.flow {
                    Circle::new(center, radius)?.into()
                } else {
                    side_profile(frame, center, axis, radius, cylinder_length, cone_length)?.into()
                }
            }
            PartKind::Disk { radius, plane } => {
                if plane.contains(&frame.flow) {
                    let normal = Axis::third(plane[0], plane[1])
                        .ok_or_else(|| self.degenerate("disk plane axes coincide"))?;
                    let (w, h) = plane_extents(frame, normal, settings.disk_thickness, 2.0 * radius);
                    Rectangle::centered(center, w, h)?.into()
                } else {
                    Circle::new(center, radius)?.into()
                }
            }
        };
        Ok(shape)
    }

    /// Wetted area: the explicit override or the primitive's surface area.
    pub fn wet_area(&self) -> f64 {
        self.wet_area.unwrap_or_else(|| self.kind.default_wet_area())
    }

    /// Drag coefficient at the run's Reynolds number.
    pub fn drag_coefficient(&self, env: &DragEnvironment, settings: &PartSettings) -> f64 {
        self.drag_coefficient
            .unwrap_or_else(|| self.kind.default_coefficient(&settings.default_drag))
            .resolve(env.reynolds_number, settings.reynolds_range)
    }

    /// Isolated drag force (N) with no upstream shadowing.
    pub fn base_drag(
        &self,
        frame: &FlowFrame,
        settings: &PartSettings,
        env: &DragEnvironment,
    ) -> Result<f64, PartError> {
        let q = env.dynamic_pressure;
        let drag = match self.kind {
            PartKind::Cylinder { radius, axis, .. } if axis == frame.flow => {
                settings.end_cap_drag_coefficient * PI * radius * radius * q
            }
            PartKind::ConeCappedCylinder { axis, .. } if axis == frame.flow => {
                self.drag_coefficient(env, settings) * self.kind.volume().powf(2.0 / 3.0) * q
            }
            _ => {
                let area = self.project_silhouette(frame, settings)?.area();
                self.drag_coefficient(env, settings) * area * q
            }
        };
        Ok(drag)
    }

    /// Compute the fixed per-run record used by the wake accumulator.
    #[instrument(skip_all, fields(part = %self.name))]
    pub fn geometry(
        &self,
        frame: &FlowFrame,
        settings: &PartSettings,
        env: &DragEnvironment,
    ) -> Result<PartGeometry, PartError> {
        let silhouette = self.project_silhouette(frame, settings)?;
        let geometry = PartGeometry {
            silhouette,
            characteristic_length: self.characteristic_length(frame, settings),
            smallest_coordinate: self.smallest_coordinate(frame, settings),
            flow_coordinate: frame.along_flow(&self.position),
            drag_coefficient: self.drag_coefficient(env, settings),
            base_drag: self.base_drag(frame, settings, env)?,
            wet_area: self.wet_area(),
        };
        debug!(
            silhouette = silhouette.kind_name(),
            area = silhouette.area(),
            characteristic_length = geometry.characteristic_length,
            base_drag = geometry.base_drag,
            "part geometry"
        );
        Ok(geometry)
    }
}

/// Width and height on the projection plane of a box whose extent along the
/// in-plane axis `along` is `along_len` and along the other plane axis is `other_len`.
fn plane_extents(frame: &FlowFrame, along: Axis, along_len: f64, other_len: f64) -> (f64, f64) {
    if frame.plane[0] == along {
        (along_len, other_len)
    } else {
        (other_len, along_len)
    }
}

/// Side view of a cone-capped cylinder: half disk, rectangle and triangle.
/// The profile is centred on its area centroid.
fn side_profile(
    frame: &FlowFrame,
    center: Point2d,
    axis: Axis,
    radius: f64,
    cylinder_length: f64,
    cone_length: f64,
) -> Result<Profile, PartError> {
    let nose = 0.5 * PI * radius * radius;
    let body = 2.0 * radius * cylinder_length;
    let tail = radius * cone_length;
    let area = nose + body + tail;

    let nose_x = -0.5 * cylinder_length - 4.0 * radius / (3.0 * PI);
    let tail_x = 0.5 * cylinder_length + cone_length / 3.0;
    let shift = (nose * nose_x + tail * tail_x) / area;

    let centroid = if frame.plane[0] == axis {
        Point2d::new(center.x + shift, center.y)
    } else {
        Point2d::new(center.x, center.y + shift)
    };
    Ok(Profile::new(centroid, area)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn env() -> DragEnvironment {
        DragEnvironment {
            dynamic_pressure: 0.5 * 1.225 * 100.0,
            reynolds_number: 1e6,
        }
    }

    fn frame_x() -> FlowFrame {
        FlowFrame::new(Axis::X)
    }

    #[test]
    fn test_sphere_geometry() {
        let s = PartSettings::default();
        let part = Part::new("ball", Vector3::new(2.0, 1.0, -1.0), PartKind::Sphere { radius: 0.5 }).unwrap();
        let shape = part.project_silhouette(&frame_x(), &s).unwrap();
        match shape {
            Shape::Circle(c) => {
                assert_eq!(c.center(), Point2d::new(1.0, -1.0));
                assert_eq!(c.radius(), 0.5);
            }
            other => panic!("expected circle, got {other:?}"),
        }
        assert_eq!(part.characteristic_length(&frame_x(), &s), 1.0);
        assert_eq!(part.smallest_coordinate(&frame_x(), &s), 1.5);
    }

    #[test]
    fn test_sphere_base_drag() {
        let s = PartSettings::default();
        let part = Part::new("ball", Vector3::zeros(), PartKind::Sphere { radius: 0.5 })
            .unwrap()
            .with_drag_coefficient(DragCoefficient::Constant(0.47));
        let drag = part.base_drag(&frame_x(), &s, &env()).unwrap();
        assert_relative_eq!(drag, 0.47 * PI * 0.25 * 61.25, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_axial_uses_end_cap() {
        let s = PartSettings::default();
        let kind = PartKind::Cylinder { radius: 0.1, length: 2.0, axis: Axis::X };
        let part = Part::new("tube", Vector3::zeros(), kind).unwrap();
        assert!(matches!(part.project_silhouette(&frame_x(), &s).unwrap(), Shape::Circle(_)));
        assert_eq!(part.characteristic_length(&frame_x(), &s), 2.0);
        assert_eq!(part.smallest_coordinate(&frame_x(), &s), -1.0);
        let drag = part.base_drag(&frame_x(), &s, &env()).unwrap();
        assert_relative_eq!(drag, 0.9 * PI * 0.01 * 61.25, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_cross_flow_rectangle() {
        let s = PartSettings::default();
        let kind = PartKind::Cylinder { radius: 0.1, length: 2.0, axis: Axis::Z };
        let part = Part::new("strut", Vector3::zeros(), kind).unwrap();
        match part.project_silhouette(&frame_x(), &s).unwrap() {
            Shape::Rectangle(r) => {
                assert_relative_eq!(r.width(), 0.2, epsilon = 1e-12);
                assert_relative_eq!(r.height(), 2.0, epsilon = 1e-12);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        assert_relative_eq!(part.characteristic_length(&frame_x(), &s), 0.2);
        let cd = DragCoefficient::ReynoldsRange { low: 0.3, high: 0.7 }.resolve(1e6, s.reynolds_range);
        let drag = part.base_drag(&frame_x(), &s, &env()).unwrap();
        assert_relative_eq!(drag, cd * 0.4 * 61.25, epsilon = 1e-9);
    }

    #[test]
    fn test_cuboid_dimensions_follow_frame() {
        let s = PartSettings::default();
        let kind = PartKind::Cuboid { dimensions: [1.0, 2.0, 3.0] };
        let part = Part::new("box", Vector3::new(0.0, 0.0, 10.0), kind).unwrap();
        let frame = FlowFrame::new(Axis::Y);
        match part.project_silhouette(&frame, &s).unwrap() {
            Shape::Rectangle(r) => {
                assert_eq!(r.width(), 1.0);
                assert_eq!(r.height(), 3.0);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        assert_eq!(part.characteristic_length(&frame, &s), 2.0);
        assert_eq!(part.smallest_coordinate(&frame, &s), -1.0);
    }

    #[test]
    fn test_cone_axial_volume_drag() {
        let s = PartSettings::default();
        let kind = PartKind::ConeCappedCylinder {
            radius: 0.2,
            cylinder_length: 1.0,
            cone_length: 0.6,
            axis: Axis::X,
        };
        let part = Part::new("pod", Vector3::zeros(), kind)
            .unwrap()
            .with_drag_coefficient(DragCoefficient::Constant(0.3));
        assert_relative_eq!(part.characteristic_length(&frame_x(), &s), 1.8, epsilon = 1e-12);
        assert_relative_eq!(part.smallest_coordinate(&frame_x(), &s), -0.7, epsilon = 1e-12);
        let volume = PI * 0.04 * (2.0 / 3.0 * 0.2 + 1.0 + 0.2);
        assert_relative_eq!(kind.volume(), volume, epsilon = 1e-12);
        let drag = part.base_drag(&frame_x(), &s, &env()).unwrap();
        assert_relative_eq!(drag, 0.3 * volume.powf(2.0 / 3.0) * 61.25, epsilon = 1e-9);
    }

    #[test]
    fn test_cone_side_view_is_profile() {
        let s = PartSettings::default();
        let kind = PartKind::ConeCappedCylinder {
            radius: 0.2,
            cylinder_length: 1.0,
            cone_length: 0.6,
            axis: Axis::Y,
        };
        let part = Part::new("pod", Vector3::zeros(), kind).unwrap();
        let shape = part.project_silhouette(&frame_x(), &s).unwrap();
        assert_eq!(shape.kind_name(), "profile");
        let expected = 0.5 * PI * 0.04 + 0.4 + 0.12;
        assert_relative_eq!(shape.area(), expected, epsilon = 1e-12);
        // cone end outweighs the nose, so the centroid sits toward +y (plane x)
        assert!(shape.center().x > 0.0);
        assert_eq!(shape.center().y, 0.0);
        assert!(part.base_drag(&frame_x(), &s, &env()).unwrap() > 0.0);
    }

    #[test]
    fn test_disk_face_on_and_edge_on() {
        let s = PartSettings::default();
        let kind = PartKind::Disk { radius: 0.3, plane: [Axis::Y, Axis::Z] };
        let part = Part::new("plate", Vector3::zeros(), kind).unwrap();

        let face_on = frame_x();
        assert!(matches!(part.project_silhouette(&face_on, &s).unwrap(), Shape::Circle(_)));
        assert_eq!(part.characteristic_length(&face_on, &s), s.disk_thickness);

        let edge_on = FlowFrame::new(Axis::Y);
        match part.project_silhouette(&edge_on, &s).unwrap() {
            Shape::Rectangle(r) => {
                // plane axes (x, z): x is the disk normal, z spans the diameter
                assert_relative_eq!(r.width(), s.disk_thickness);
                assert_relative_eq!(r.height(), 0.6, epsilon = 1e-12);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
        assert_relative_eq!(part.characteristic_length(&edge_on, &s), 0.6);
    }

    #[test]
    fn test_validation_rejects_degenerate_parts() {
        let origin = Vector3::zeros();
        assert!(Part::new("s", origin, PartKind::Sphere { radius: 0.0 }).is_err());
        assert!(Part::new("", origin, PartKind::Sphere { radius: 1.0 }).is_err());
        assert!(Part::new("c", origin, PartKind::Cuboid { dimensions: [1.0, -1.0, 1.0] }).is_err());
        assert!(Part::new("d", origin, PartKind::Disk { radius: 1.0, plane: [Axis::X, Axis::X] }).is_err());
        assert!(Part::new("p", Vector3::new(f64::NAN, 0.0, 0.0), PartKind::Sphere { radius: 1.0 }).is_err());

        let bad_cd = Part::new("s", origin, PartKind::Sphere { radius: 1.0 })
            .unwrap()
            .with_drag_coefficient(DragCoefficient::Constant(-1.0));
        assert!(matches!(bad_cd.validate(), Err(PartError::InvalidCoefficient { .. })));
    }

    #[test]
    fn test_wet_area_override() {
        let part = Part::new("s", Vector3::zeros(), PartKind::Sphere { radius: 1.0 }).unwrap();
        assert_relative_eq!(part.wet_area(), 4.0 * PI);
        assert_eq!(part.with_wet_area(2.5).wet_area(), 2.5);
    }

    #[test]
    fn test_default_coefficient_by_kind() {
        let s = PartSettings::default();
        let cube = Part::new("box", Vector3::zeros(), PartKind::Cuboid { dimensions: [1.0; 3] }).unwrap();
        assert_eq!(cube.drag_coefficient(&env(), &s), 0.9);
        let ball = Part::new("ball", Vector3::zeros(), PartKind::Sphere { radius: 1.0 }).unwrap();
        let cd = ball.drag_coefficient(&env(), &s);
        assert_relative_eq!(cd, 0.115_714, epsilon = 1e-6);
    }
}

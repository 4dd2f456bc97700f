//! Primitive solid parts and their flow-plane geometry.
//!
//! A [`Part`] is one of a closed set of primitives ([`PartKind`]). Given the
//! [`FlowFrame`] of a run, each part yields a silhouette on the plane
//! perpendicular to the flow, its extent along the flow, and its isolated
//! drag. Those values are gathered once per run into a [`PartGeometry`].

pub mod axis;
pub mod coefficient;
pub mod drag;
pub mod error;
pub mod part;

pub use axis::{Axis, FlowFrame};
pub use coefficient::{DefaultDrag, DragCoefficient};
pub use drag::{compose_drag, friction_drag, DragEnvironment, PartSettings};
pub use error::PartError;
pub use part::{Part, PartGeometry, PartKind};

//! Wake-interference drag accumulation for assemblies of primitive parts.
//!
//! Parts are ordered along the flow, every upstream/downstream silhouette
//! overlap is measured, and each part takes the velocity deficit of the single
//! upstream part casting the largest shadow on it. The retained velocity is
//! read from an empirical recovery curve and compounds across chains of parts.

pub mod assembly;
pub mod config;
pub mod error;
pub mod flow;
pub mod result;

pub use assembly::{propagate_wake, shadow_order, Assembly, WakeState};
pub use config::{RetentionCurve, WakeConfig};
pub use error::WakeError;
pub use flow::FlowConditions;
pub use result::{AssemblyResult, PartResult};

//! **floorplan-core** — floor plans with guards and locked rooms.
//!
//! This crate provides the types shared by the rest of the workspace:
//! room coordinates and bounds, per-room [`Cell`] states, the configurable
//! [`FloorPlan`], its serializable [`Layout`] description, and the
//! [`Symmetry`] transforms of a rectangle.

pub mod cell;
pub mod error;
pub mod geom;
pub mod layout;
pub mod plan;
pub mod transform;

pub use cell::Cell;
pub use error::PlanError;
pub use geom::{Bounds, BoundsIter, Direction, Room};
pub use layout::Layout;
pub use plan::{FloorPlan, Phase};
pub use transform::Symmetry;

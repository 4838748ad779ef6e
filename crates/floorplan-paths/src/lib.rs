//! Guard distances on floor plans.
//!
//! This crate scores a [`FloorPlan`](floorplan_core::FloorPlan): every open
//! room gets the number of cardinal steps to its nearest guard, walking only
//! through open rooms, or is marked unreachable.
//!
//! - **Scoring** with a multi-source BFS ([`Scorer::score`], [`score`])
//! - **Raw BFS maps** over any [`Pather`] ([`Scorer::bfs_map`])
//! - **Results** as a [`ScoreMap`], rendered with `Display` or as integer
//!   codes
//! - **Law checking** of a score map against its plan ([`laws::check`])
//!
//! [`Scorer`] owns and reuses its internal buffers, so repeated scoring of
//! plans of the same size incurs no allocations after warm-up.

mod bfs;
pub mod laws;
mod neighbors;
mod scores;
mod traits;

pub use bfs::{Scorer, UNREACHABLE, score};
pub use laws::Violation;
pub use neighbors::Neighbors;
pub use scores::{GUARD_CODE, LOCKED_CODE, Score, ScoreMap, UNREACHABLE_CODE};
pub use traits::Pather;

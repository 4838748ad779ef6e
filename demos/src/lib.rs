//! Command-line collaborator for the floor-plan scorer.
//!
//! Loads a JSON [`Layout`](floorplan_core::Layout) or generates a random
//! one, scores it and prints the result.

pub mod cli;
pub mod generate;

pub use cli::{DemoError, Options, Source, parse_args, run};
pub use generate::LayoutGen;

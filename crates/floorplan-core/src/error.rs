//! Errors returned when building or configuring a floor plan.

use std::fmt;

use crate::geom::Room;

/// Misuse of the floor-plan API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// A room lies outside `[0, rows) × [0, cols)`.
    OutOfBounds { room: Room, rows: usize, cols: usize },
    /// A placement was attempted after the plan was frozen.
    ConfigurationLocked { room: Room },
    /// The plan was created with zero rows or zero columns, or with more
    /// rooms than can be addressed.
    InvalidDimensions { rows: usize, cols: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { room, rows, cols } => {
                write!(f, "room {room} is outside the {rows}x{cols} floor plan")
            }
            Self::ConfigurationLocked { room } => {
                write!(f, "cannot place room {room}: guard and locked rooms are frozen")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid floor plan dimensions {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for PlanError {}

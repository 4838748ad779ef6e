//! A plain description of a floor plan, suitable for config files.
//!
//! ```json
//! {
//!   "rows": 3,
//!   "cols": 3,
//!   "guards": [{ "row": 1, "col": 1 }],
//!   "locked": [],
//!   "frozen": true
//! }
//! ```

use crate::error::PlanError;
use crate::geom::{Bounds, Room};
use crate::plan::FloorPlan;
use crate::transform::Symmetry;

/// Dimensions plus guard and locked placements.
///
/// When a room appears in both lists, the locked designation wins because
/// guards are placed first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guards: Vec<Room>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: Vec<Room>,
    #[cfg_attr(feature = "serde", serde(default = "frozen_by_default"))]
    pub frozen: bool,
}

#[cfg(feature = "serde")]
fn frozen_by_default() -> bool {
    true
}

impl Layout {
    /// An empty, frozen layout of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            guards: Vec::new(),
            locked: Vec::new(),
            frozen: true,
        }
    }

    /// Build the described plan.
    pub fn build(&self) -> Result<FloorPlan, PlanError> {
        let mut plan = FloorPlan::new(self.rows, self.cols)?;
        plan.place_guards(self.guards.iter().copied())?;
        plan.lock_rooms(self.locked.iter().copied())?;
        if self.frozen {
            plan.freeze();
        }
        Ok(plan)
    }

    /// The same layout rotated or mirrored by `sym`.
    ///
    /// Every room must lie within `rows × cols`.
    pub fn transformed(&self, sym: Symmetry) -> Result<Self, PlanError> {
        let b = Bounds::new(self.rows, self.cols);
        if b.is_empty() {
            return Err(PlanError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let map = |rooms: &[Room]| -> Result<Vec<Room>, PlanError> {
            rooms
                .iter()
                .map(|&r| {
                    if b.contains(r) {
                        Ok(sym.apply(r, b))
                    } else {
                        Err(PlanError::OutOfBounds {
                            room: r,
                            rows: b.rows,
                            cols: b.cols,
                        })
                    }
                })
                .collect()
        };
        let out = sym.bounds(b);
        Ok(Self {
            rows: out.rows,
            cols: out.cols,
            guards: map(&self.guards)?,
            locked: map(&self.locked)?,
            frozen: self.frozen,
        })
    }
}

impl FloorPlan {
    /// Describe this plan as a [`Layout`]. Rooms are listed row-major.
    pub fn layout(&self) -> Layout {
        Layout {
            rows: self.rows(),
            cols: self.cols(),
            guards: self.guards(),
            locked: self.locked(),
            frozen: self.is_frozen(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_round_trip() {
        let mut layout = Layout::new(5, 5);
        layout.guards = vec![Room::new(1, 1), Room::new(4, 4)];
        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let layout: Layout = serde_json::from_str(r#"{"rows": 2, "cols": 3}"#).unwrap();
        assert_eq!(layout, Layout::new(2, 3));
    }
}

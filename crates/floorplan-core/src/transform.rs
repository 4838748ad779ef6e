//! Rotations and reflections of a rectangular floor plan.

use crate::geom::{Bounds, Room};

/// One of the eight symmetries of a rectangle.
///
/// Rotations are clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    /// Mirror top to bottom.
    FlipRows,
    /// Mirror left to right.
    FlipCols,
    /// Swap rows and columns.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::FlipRows,
        Self::FlipCols,
        Self::Transpose,
        Self::AntiTranspose,
    ];

    /// Bounds of the plan after the transform.
    #[inline]
    pub const fn bounds(self, b: Bounds) -> Bounds {
        if self.swaps_axes() {
            Bounds::new(b.cols, b.rows)
        } else {
            b
        }
    }

    const fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Rotate90 | Self::Rotate270 | Self::Transpose | Self::AntiTranspose
        )
    }

    /// The transform that undoes `self`.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Rotate90 => Self::Rotate270,
            Self::Rotate270 => Self::Rotate90,
            other => other,
        }
    }

    /// Where room `r` of a plan with bounds `b` ends up. `r` must lie in `b`.
    pub const fn apply(self, r: Room, b: Bounds) -> Room {
        let last_row = b.rows - 1;
        let last_col = b.cols - 1;
        match self {
            Self::Identity => r,
            Self::Rotate90 => Room::new(r.col, last_row - r.row),
            Self::Rotate180 => Room::new(last_row - r.row, last_col - r.col),
            Self::Rotate270 => Room::new(last_col - r.col, r.row),
            Self::FlipRows => Room::new(last_row - r.row, r.col),
            Self::FlipCols => Room::new(r.row, last_col - r.col),
            Self::Transpose => Room::new(r.col, r.row),
            Self::AntiTranspose => Room::new(last_col - r.col, last_row - r.row),
        }
    }

    /// Rearrange a row-major matrix of `values` laid out over `b`.
    ///
    /// Returns the new bounds and the transformed matrix.
    pub fn remap<T: Clone>(self, b: Bounds, values: &[T]) -> (Bounds, Vec<T>) {
        debug_assert_eq!(values.len(), b.len());
        let out = self.bounds(b);
        let back = self.inverse();
        let remapped = out
            .iter()
            .map(|dst| {
                let src = back.apply(dst, out);
                values[src.row * b.cols + src.col].clone()
            })
            .collect();
        (out, remapped)
    }
}

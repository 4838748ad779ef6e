//! The [`Cell`] type — the configured state of a single room.

/// What occupies a room before scoring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Walkable; receives a distance when scored.
    #[default]
    Open,
    /// A distance source.
    Guard,
    /// Impassable.
    Locked,
}

impl Cell {
    /// Whether a search may step through this cell.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

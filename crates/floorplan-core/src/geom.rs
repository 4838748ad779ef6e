//! Geometry primitives: [`Room`], [`Direction`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right. Every floor plan starts at `(0, 0)`, so [`Bounds`] only stores its
//! extent.

use std::fmt;

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A cell coordinate on a floor plan.
///
/// Ordering is row-major: rooms compare by row first, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub row: usize,
    pub col: usize,
}

impl Room {
    /// Create a new room coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The room one step away in direction `d`.
    ///
    /// Returns `None` only when the step would leave the non-negative
    /// quadrant; the upper bounds are checked by [`Bounds::contains`].
    #[inline]
    pub fn step(self, d: Direction) -> Option<Self> {
        match d {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
        }
    }
}

impl From<(usize, usize)> for Room {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, clockwise starting from `Up`.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a floor plan: rooms `[0, rows) × [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    /// Create bounds with the given extent.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of rooms.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the bounds hold no rooms.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `r` lies inside the bounds.
    #[inline]
    pub const fn contains(self, r: Room) -> bool {
        r.row < self.rows && r.col < self.cols
    }

    /// Row-major flat index of `r`, or `None` if out of bounds.
    #[inline]
    pub const fn index(self, r: Room) -> Option<usize> {
        if self.contains(r) {
            Some(r.row * self.cols + r.col)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub const fn room(self, idx: usize) -> Room {
        Room::new(idx / self.cols, idx % self.cols)
    }

    /// The in-bounds neighbour of `r` in direction `d`, if any.
    #[inline]
    pub fn neighbor(self, r: Room, d: Direction) -> Option<Room> {
        r.step(d).filter(|&n| self.contains(n))
    }

    /// Row-major iterator over every room.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Room;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the rooms in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Room;

    #[inline]
    fn next(&mut self) -> Option<Room> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let r = self.bounds.room(self.next);
        self.next += 1;
        Some(r)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn room_equality_is_by_value() {
        let mut set = HashSet::new();
        set.insert(Room::new(2, 3));
        assert!(set.contains(&Room::new(2, 3)));
        assert!(!set.contains(&Room::new(3, 2)));
    }

    #[test]
    fn room_ordering_is_row_major() {
        let mut rooms = vec![Room::new(1, 0), Room::new(0, 5), Room::new(0, 1)];
        rooms.sort();
        assert_eq!(rooms, vec![Room::new(0, 1), Room::new(0, 5), Room::new(1, 0)]);
    }

    #[test]
    fn step_stops_at_zero() {
        let origin = Room::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Room::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Room::new(0, 1)));
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.len(), 12);
        assert!(b.contains(Room::new(2, 3)));
        assert!(!b.contains(Room::new(3, 0)));
        assert!(!b.contains(Room::new(0, 4)));
        assert_eq!(b.index(Room::new(1, 2)), Some(6));
        assert_eq!(b.index(Room::new(0, 4)), None);
        assert_eq!(b.room(6), Room::new(1, 2));
    }

    #[test]
    fn bounds_neighbor_filters_edges() {
        let b = Bounds::new(2, 2);
        let corner = Room::new(1, 1);
        assert_eq!(b.neighbor(corner, Direction::Down), None);
        assert_eq!(b.neighbor(corner, Direction::Right), None);
        assert_eq!(b.neighbor(corner, Direction::Up), Some(Room::new(0, 1)));
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let rooms: Vec<Room> = it.collect();
        assert_eq!(rooms[0], Room::new(0, 0));
        assert_eq!(rooms[2], Room::new(0, 2));
        assert_eq!(rooms[3], Room::new(1, 0));
        assert_eq!(rooms[5], Room::new(1, 2));
    }

    #[test]
    fn empty_bounds_iter() {
        assert_eq!(Bounds::new(0, 5).iter().count(), 0);
        assert!(Bounds::new(4, 0).is_empty());
    }
}

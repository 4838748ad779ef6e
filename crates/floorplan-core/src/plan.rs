//! The [`FloorPlan`] type — a fixed-size grid of [`Cell`]s that is
//! configured with guards and locked rooms, then frozen.

use crate::cell::Cell;
use crate::error::PlanError;
use crate::geom::{Bounds, Room};

/// Configuration phase of a [`FloorPlan`]. The only transition is
/// `Configuring → Frozen`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Configuring,
    Frozen,
}

/// A rectangular floor plan.
///
/// Dimensions are chosen at construction and never change. Guards and
/// locked rooms can be placed, in any order and any number of times, until
/// [`freeze`](FloorPlan::freeze) is called.
///
/// Use [`Layout`](crate::layout::Layout) to read or write one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    cells: Vec<Cell>,
    bounds: Bounds,
    phase: Phase,
}

impl FloorPlan {
    /// Create a plan of `rows × cols` open rooms.
    ///
    /// Fails with [`PlanError::InvalidDimensions`] if either extent is zero
    /// or the room count does not fit in memory.
    pub fn new(rows: usize, cols: usize) -> Result<Self, PlanError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n > 0 && isize::try_from(n).is_ok())
            .ok_or(PlanError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            cells: vec![Cell::Open; len],
            bounds: Bounds::new(rows, cols),
            phase: Phase::Configuring,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// Whether `r` is a room of this plan.
    #[inline]
    pub fn contains(&self, r: Room) -> bool {
        self.bounds.contains(r)
    }

    /// The cell at `r`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, r: Room) -> Option<Cell> {
        self.bounds.index(r).map(|i| self.cells[i])
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.phase == Phase::Frozen
    }

    /// Disallow any further placement. Calling this again has no effect.
    pub fn freeze(&mut self) {
        if self.phase != Phase::Frozen {
            log::debug!("freezing {} floor plan", self.bounds);
            self.phase = Phase::Frozen;
        }
    }

    /// Mark `r` as a guard, replacing whatever was there.
    pub fn place_guard(&mut self, r: Room) -> Result<(), PlanError> {
        self.set(r, Cell::Guard)
    }

    /// Mark `r` as locked, replacing whatever was there.
    pub fn place_locked(&mut self, r: Room) -> Result<(), PlanError> {
        self.set(r, Cell::Locked)
    }

    /// Place several guards in order, stopping at the first failure.
    pub fn place_guards<I>(&mut self, rooms: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = Room>,
    {
        rooms.into_iter().try_for_each(|r| self.place_guard(r))
    }

    /// Lock several rooms in order, stopping at the first failure.
    pub fn lock_rooms<I>(&mut self, rooms: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = Room>,
    {
        rooms.into_iter().try_for_each(|r| self.place_locked(r))
    }

    pub fn is_guard(&self, r: Room) -> Result<bool, PlanError> {
        Ok(self.checked_index(r).map(|i| self.cells[i])? == Cell::Guard)
    }

    pub fn is_locked(&self, r: Room) -> Result<bool, PlanError> {
        Ok(self.checked_index(r).map(|i| self.cells[i])? == Cell::Locked)
    }

    /// Every guard room, in row-major order.
    pub fn guards(&self) -> Vec<Room> {
        self.rooms_with(Cell::Guard)
    }

    /// Every locked room, in row-major order.
    pub fn locked(&self) -> Vec<Room> {
        self.rooms_with(Cell::Locked)
    }

    /// Row-major iterator over `(Room, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Room, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Count the rooms holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    fn rooms_with(&self, cell: Cell) -> Vec<Room> {
        self.iter()
            .filter_map(|(r, c)| (c == cell).then_some(r))
            .collect()
    }

    fn set(&mut self, r: Room, cell: Cell) -> Result<(), PlanError> {
        if self.is_frozen() {
            return Err(PlanError::ConfigurationLocked { room: r });
        }
        let i = self.checked_index(r)?;
        self.cells[i] = cell;
        Ok(())
    }

    fn checked_index(&self, r: Room) -> Result<usize, PlanError> {
        self.bounds.index(r).ok_or(PlanError::OutOfBounds {
            room: r,
            rows: self.bounds.rows,
            cols: self.bounds.cols,
        })
    }
}

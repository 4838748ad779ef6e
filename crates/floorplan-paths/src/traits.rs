use floorplan_core::{Cell, Direction, FloorPlan, Room};

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the rooms a search may step into from `r` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, r: Room, buf: &mut Vec<Room>);
}

/// A floor plan is searched through its open rooms: guards and locked
/// rooms are never stepped into, and nothing outside the plan is produced.
impl Pather for FloorPlan {
    fn neighbors(&self, r: Room, buf: &mut Vec<Room>) {
        let b = self.bounds();
        buf.extend(
            Direction::ALL
                .into_iter()
                .filter_map(|d| b.neighbor(r, d))
                .filter(|&n| self.cell(n).is_some_and(Cell::is_open)),
        );
    }
}

use floorplan_core::{Bounds, Direction, Room};

/// Cached neighbor computation helper.
///
/// Enumerates the in-bounds cardinal neighbors of a room, filtered by a
/// predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Room>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `r` inside `bounds`, keeping only
    /// those for which `keep` returns `true`.
    pub fn cardinal(&mut self, bounds: Bounds, r: Room, keep: impl Fn(Room) -> bool) -> &[Room] {
        self.buf.clear();
        for d in Direction::ALL {
            if let Some(n) = bounds.neighbor(r, d) {
                if keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Bounds::new(3, 3), Room::new(0, 0), |_| true);
        assert_eq!(got, &[Room::new(0, 1), Room::new(1, 0)]);
    }

    #[test]
    fn predicate_filters() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Bounds::new(3, 3), Room::new(1, 1), |n| n.row == 1);
        assert_eq!(got, &[Room::new(1, 2), Room::new(1, 0)]);
    }
}

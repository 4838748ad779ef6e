//! Consistency checks for a scored floor plan.
//!
//! A correct [`ScoreMap`] satisfies, for every open room:
//!
//! - a room next to a guard has distance 1;
//! - a room at distance `d > 1` has an open neighbor at `d - 1`;
//! - two reached open neighbors differ by at most 1;
//! - an open room next to a reached open room is itself reached.
//!
//! Guards and locked rooms must carry their own markers.

use std::fmt;

use floorplan_core::{Cell, FloorPlan, Room};

use crate::neighbors::Neighbors;
use crate::scores::{Score, ScoreMap};

/// A broken law, located at `room`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The map and plan disagree about the size.
    SizeMismatch,
    /// The score does not match the configured cell.
    Marker { room: Room, cell: Cell, score: Score },
    /// An open room next to a guard is not at distance 1.
    GuardNeighbor { room: Room, score: Score },
    /// A reached room has no neighbor one step closer to a guard.
    NoPredecessor { room: Room, distance: u32 },
    /// Two reached open neighbors differ by more than one step.
    Gap { room: Room, neighbor: Room },
    /// An unreachable room touches a reached one.
    Leak { room: Room, neighbor: Room },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch => f.write_str("score map and floor plan differ in size"),
            Self::Marker { room, cell, score } => {
                write!(f, "room {room} is {cell:?} but scored {score}")
            }
            Self::GuardNeighbor { room, score } => {
                write!(f, "room {room} is next to a guard but scored {score}")
            }
            Self::NoPredecessor { room, distance } => {
                write!(f, "room {room} at distance {distance} has no neighbor one step closer")
            }
            Self::Gap { room, neighbor } => {
                write!(f, "rooms {room} and {neighbor} differ by more than one step")
            }
            Self::Leak { room, neighbor } => {
                write!(f, "room {room} is unreachable but its neighbor {neighbor} is reached")
            }
        }
    }
}

/// Check `map` against `plan` and return every violation found, in
/// row-major order.
pub fn check(plan: &FloorPlan, map: &ScoreMap) -> Vec<Violation> {
    if plan.bounds() != map.bounds() {
        return vec![Violation::SizeMismatch];
    }
    let bounds = plan.bounds();
    let mut out = Vec::new();
    let mut nb = Neighbors::new();

    for ((room, cell), (_, score)) in plan.iter().zip(map.iter()) {
        let marker_ok = match cell {
            Cell::Guard => score == Score::Guard,
            Cell::Locked => score == Score::Locked,
            Cell::Open => score.is_open(),
        };
        if !marker_ok {
            out.push(Violation::Marker { room, cell, score });
            continue;
        }
        if cell != Cell::Open {
            continue;
        }

        let near_guard = !nb
            .cardinal(bounds, room, |n| plan.cell(n) == Some(Cell::Guard))
            .is_empty();
        if near_guard && score != Score::Distance(1) {
            out.push(Violation::GuardNeighbor { room, score });
        }

        let open = nb.cardinal(bounds, room, |n| plan.cell(n) == Some(Cell::Open));
        match score {
            Score::Distance(d) => {
                let has_predecessor = if d == 1 {
                    near_guard
                } else {
                    open.iter().any(|&n| map.distance(n) == Some(d - 1))
                };
                if !has_predecessor {
                    out.push(Violation::NoPredecessor { room, distance: d });
                }
                for &n in open {
                    if map.distance(n).is_some_and(|nd| nd.abs_diff(d) > 1) && room < n {
                        out.push(Violation::Gap { room, neighbor: n });
                    }
                }
            }
            Score::Unreachable => {
                if let Some(&n) = open.iter().find(|&&n| map.distance(n).is_some()) {
                    out.push(Violation::Leak { room, neighbor: n });
                }
            }
            Score::Guard | Score::Locked => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::score;
    use floorplan_core::Bounds;

    fn plan(guards: &[Room], locked: &[Room]) -> FloorPlan {
        let mut p = FloorPlan::new(3, 3).unwrap();
        p.place_guards(guards.iter().copied()).unwrap();
        p.lock_rooms(locked.iter().copied()).unwrap();
        p.freeze();
        p
    }

    fn with(map: &ScoreMap, room: Room, s: Score) -> ScoreMap {
        let mut scores = map.as_slice().to_vec();
        scores[map.bounds().index(room).unwrap()] = s;
        ScoreMap::from_scores(map.bounds(), scores).unwrap()
    }

    #[test]
    fn scored_plans_have_no_violations() {
        let p = plan(&[Room::new(0, 0)], &[Room::new(1, 1), Room::new(2, 1)]);
        assert_eq!(check(&p, &score(&p)), vec![]);
        let p = plan(&[], &[]);
        assert_eq!(check(&p, &score(&p)), vec![]);
    }

    #[test]
    fn detects_wrong_marker() {
        let p = plan(&[Room::new(1, 1)], &[]);
        let bad = with(&score(&p), Room::new(1, 1), Score::Distance(1));
        assert!(check(&p, &bad).contains(&Violation::Marker {
            room: Room::new(1, 1),
            cell: Cell::Guard,
            score: Score::Distance(1),
        }));
    }

    #[test]
    fn detects_guard_neighbor_and_gap() {
        let p = plan(&[Room::new(1, 1)], &[]);
        let bad = with(&score(&p), Room::new(0, 1), Score::Distance(4));
        let v = check(&p, &bad);
        assert!(v.contains(&Violation::GuardNeighbor {
            room: Room::new(0, 1),
            score: Score::Distance(4),
        }));
        assert!(v.contains(&Violation::Gap {
            room: Room::new(0, 0),
            neighbor: Room::new(0, 1),
        }));
        assert!(v.contains(&Violation::NoPredecessor {
            room: Room::new(0, 1),
            distance: 4,
        }));
    }

    #[test]
    fn detects_leak() {
        let p = plan(&[Room::new(0, 0)], &[]);
        let bad = with(&score(&p), Room::new(2, 2), Score::Unreachable);
        assert_eq!(
            check(&p, &bad),
            vec![Violation::Leak {
                room: Room::new(2, 2),
                neighbor: Room::new(1, 2),
            }]
        );
    }

    #[test]
    fn detects_size_mismatch() {
        let p = plan(&[], &[]);
        let other = ScoreMap::from_scores(Bounds::new(1, 1), vec![Score::Unreachable]).unwrap();
        assert_eq!(check(&p, &other), vec![Violation::SizeMismatch]);
    }
}

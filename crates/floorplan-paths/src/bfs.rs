use std::collections::VecDeque;

use floorplan_core::{Bounds, Cell, FloorPlan, Room};

use crate::scores::{Score, ScoreMap};
use crate::traits::Pather;

/// Sentinel value meaning "unreachable" in a raw BFS distance map.
pub const UNREACHABLE: u32 = u32::MAX;

/// Scores floor plans with a multi-source breadth-first search.
///
/// `Scorer` owns its distance map, queue and neighbor buffer so that
/// scoring plans of the same size repeatedly incurs no allocations after
/// the first call.
#[derive(Debug, Default)]
pub struct Scorer {
    bounds: Bounds,
    dist: Vec<u32>,
    queue: VecDeque<usize>,
    nbuf: Vec<Room>,
}

impl Scorer {
    /// Create a scorer with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score every room of `plan`.
    ///
    /// All guards enter one queue at distance 0 before any room is expanded,
    /// so each open room is finalized exactly once, with the distance to its
    /// nearest guard. Scoring a plan that is not frozen is allowed but
    /// logged, since its guards may still move between calls.
    pub fn score(&mut self, plan: &FloorPlan) -> ScoreMap {
        if !plan.is_frozen() {
            log::warn!(
                "scoring a {} floor plan whose guards and locked rooms are not frozen",
                plan.bounds()
            );
        }
        let guards = plan.guards();
        self.bfs_map(plan, plan.bounds(), &guards);

        let scores: Vec<Score> = plan
            .iter()
            .zip(self.dist.iter())
            .map(|((_, cell), &d)| match cell {
                Cell::Guard => Score::Guard,
                Cell::Locked => Score::Locked,
                Cell::Open if d == UNREACHABLE => Score::Unreachable,
                Cell::Open => Score::Distance(d),
            })
            .collect();

        let map = ScoreMap {
            bounds: plan.bounds(),
            scores,
        };
        log::debug!(
            "scored {} floor plan: {} guards, max distance {:?}, {} unreachable",
            plan.bounds(),
            guards.len(),
            map.max_distance(),
            map.unreachable_count()
        );
        map
    }

    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Every source starts at distance 0 and each step costs 1. Sources
    /// outside `bounds` are ignored. Rooms the search never reaches hold
    /// [`UNREACHABLE`]. Returns the row-major map.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, bounds: Bounds, sources: &[Room]) -> &[u32] {
        // Reset, keeping capacity.
        self.bounds = bounds;
        self.dist.clear();
        self.dist.resize(bounds.len(), UNREACHABLE);
        self.queue.clear();

        for &src in sources {
            let Some(si) = bounds.index(src) else {
                continue;
            };
            if self.dist[si] != UNREACHABLE {
                continue;
            }
            self.dist[si] = 0;
            self.queue.push_back(si);
        }
        log::trace!("bfs seeded with {} of {} sources", self.queue.len(), sources.len());

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            let next = self.dist[ci] + 1;

            nbuf.clear();
            pather.neighbors(bounds.room(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = next;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        &self.dist
    }

    /// Query the distance at `r` from the last search.
    ///
    /// Returns [`UNREACHABLE`] if `r` is outside the searched bounds or was
    /// not reached.
    pub fn bfs_at(&self, r: Room) -> u32 {
        match self.bounds.index(r) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }
}

/// Score `plan` with a one-off [`Scorer`].
pub fn score(plan: &FloorPlan) -> ScoreMap {
    Scorer::new().score(plan)
}

//! Random floor-plan layouts.

use floorplan_core::Layout;
use rand::{Rng, RngExt};

/// Generates layouts where each room independently becomes a guard with
/// probability `guard_pct`, otherwise locked with probability `locked_pct`.
pub struct LayoutGen<R: Rng> {
    pub rng: R,
    pub guard_pct: f64,
    pub locked_pct: f64,
}

impl<R: Rng> LayoutGen<R> {
    /// A generator with 5% guards and 20% locked rooms.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            guard_pct: 0.05,
            locked_pct: 0.20,
        }
    }

    /// Generate a frozen `rows × cols` layout.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Layout {
        let mut layout = Layout::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let roll: f64 = self.rng.random();
                if roll < self.guard_pct {
                    layout.guards.push((row, col).into());
                } else if roll < self.guard_pct + self.locked_pct {
                    layout.locked.push((row, col).into());
                }
            }
        }
        log::debug!(
            "generated {rows}x{cols} layout with {} guards and {} locked rooms",
            layout.guards.len(),
            layout.locked.len()
        );
        layout
    }
}

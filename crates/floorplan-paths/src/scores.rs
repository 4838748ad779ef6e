//! The [`ScoreMap`] type — a scored floor plan.

use std::fmt;

use floorplan_core::{Bounds, Room, Symmetry};

/// Integer code for a guard room in [`ScoreMap::to_codes`].
pub const GUARD_CODE: i64 = -2;
/// Integer code for a locked room in [`ScoreMap::to_codes`].
pub const LOCKED_CODE: i64 = -1;
/// Integer code for an unreachable room in [`ScoreMap::to_codes`].
pub const UNREACHABLE_CODE: i64 = 0;

/// The scored value of one room.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    Guard,
    Locked,
    /// Steps to the nearest guard; always at least 1.
    Distance(u32),
    /// Open, but no guard can be reached through open rooms.
    Unreachable,
}

impl Score {
    /// The distance, if this room was reached.
    #[inline]
    pub const fn distance(self) -> Option<u32> {
        match self {
            Self::Distance(d) => Some(d),
            _ => None,
        }
    }

    /// Whether this is an open room (reached or not).
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Distance(_) | Self::Unreachable)
    }

    /// The legacy integer encoding: guard `-2`, locked `-1`,
    /// unreachable `0`, otherwise the distance.
    #[inline]
    pub fn code(self) -> i64 {
        match self {
            Self::Guard => GUARD_CODE,
            Self::Locked => LOCKED_CODE,
            Self::Unreachable => UNREACHABLE_CODE,
            Self::Distance(d) => i64::from(d),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guard => f.write_str("G"),
            Self::Locked => f.write_str("L"),
            Self::Unreachable => f.write_str("0"),
            Self::Distance(d) => write!(f, "{d}"),
        }
    }
}

/// Row-major matrix of [`Score`]s, one per room of a floor plan.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScoreMap")
)]
pub struct ScoreMap {
    pub(crate) bounds: Bounds,
    pub(crate) scores: Vec<Score>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScoreMap {
    bounds: Bounds,
    scores: Vec<Score>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScoreMap> for ScoreMap {
    type Error = String;

    fn try_from(raw: RawScoreMap) -> Result<Self, Self::Error> {
        let (bounds, len) = (raw.bounds, raw.scores.len());
        Self::from_scores(bounds, raw.scores)
            .ok_or_else(|| format!("{len} scores do not fill a {bounds} map"))
    }
}

impl ScoreMap {
    /// Wrap a row-major score vector. Returns `None` if the length does not
    /// match `bounds`.
    pub fn from_scores(bounds: Bounds, scores: Vec<Score>) -> Option<Self> {
        (scores.len() == bounds.len()).then_some(Self { bounds, scores })
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

    /// The score at `r`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, r: Room) -> Option<Score> {
        self.bounds.index(r).map(|i| self.scores[i])
    }

    /// The distance at `r`, if `r` is an open room that was reached.
    #[inline]
    pub fn distance(&self, r: Room) -> Option<u32> {
        self.get(r).and_then(Score::distance)
    }

    /// All scores, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[Score] {
        &self.scores
    }

    /// Row-major iterator over `(Room, Score)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Room, Score)> + '_ {
        self.bounds.iter().zip(self.scores.iter().copied())
    }

    /// Iterator over the rows of the matrix.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Score]> + '_ {
        self.scores.chunks(self.bounds.cols.max(1))
    }

    /// The matrix in the legacy integer encoding (see [`Score::code`]).
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        self.rows_iter()
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }

    /// Number of open rooms that no guard reaches.
    pub fn unreachable_count(&self) -> usize {
        self.scores
            .iter()
            .filter(|&&s| s == Score::Unreachable)
            .count()
    }

    /// The largest distance on the map, if any room was reached.
    pub fn max_distance(&self) -> Option<u32> {
        self.scores.iter().filter_map(|s| s.distance()).max()
    }

    /// The same map rotated or mirrored by `sym`.
    pub fn transformed(&self, sym: Symmetry) -> Self {
        let (bounds, scores) = sym.remap(self.bounds, &self.scores);
        Self { bounds, scores }
    }
}

/// One line per row, columns separated by single spaces: `G` for a guard,
/// `L` for a locked room, `0` for unreachable, otherwise the distance.
impl fmt::Display for ScoreMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for (c, s) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{s}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

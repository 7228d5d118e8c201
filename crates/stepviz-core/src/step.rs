//! Snapshot types for trace replay.
//!
//! A trace is an ordered `Vec` of snapshots, fully materialized before the
//! first one is consumed. Every snapshot owns a value-copy of the working
//! data at the instant it was emitted -- never a reference to storage that
//! later steps keep mutating -- so replaying frame N always shows the state
//! as of frame N.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::pos::Pos;

/// One captured state of a sorting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    /// The full value sequence at this instant; same length for the whole trace.
    pub values: Vec<u64>,
    /// 0-2 indices being compared this step.
    pub comparing: SmallVec<[usize; 2]>,
    /// Indices already known final, in the order they were finalized.
    /// Membership never shrinks across a trace.
    pub sorted: Vec<usize>,
    /// Indices highlighted as active (pivot, running minimum, inserted key).
    pub current: SmallVec<[usize; 2]>,
}

/// One captured state of a pathfinding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// The whole grid at this instant, including per-cell search state.
    pub grid: Grid,
    /// Positions visited so far, in discovery order.
    pub visited: Vec<Pos>,
    /// The 0-1 position(s) being processed this step.
    pub current: SmallVec<[Pos; 1]>,
    /// Empty until the goal is reached; then the start-to-goal walk.
    pub path: Vec<Pos>,
}

/// A snapshot from either algorithm family.
///
/// Exactly two shapes exist; the tag tells a replay loop which renderer a
/// frame belongs to without inspecting its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Sort(SortStep),
    Path(PathStep),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use smallvec::smallvec;

    fn sample_sort_step() -> SortStep {
        SortStep {
            values: vec![3, 1, 2],
            comparing: smallvec![0, 1],
            sorted: vec![2],
            current: smallvec![],
        }
    }

    #[test]
    fn sort_step_serde_roundtrip() {
        let step = sample_sort_step();
        let json = serde_json::to_string(&step).unwrap();
        let back: SortStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn path_step_serde_roundtrip() {
        let step = PathStep {
            grid: Grid::new(GridConfig { rows: 2, cols: 2 }, &[Pos::new(0, 1)]),
            visited: vec![Pos::new(0, 0)],
            current: smallvec![Pos::new(0, 0)],
            path: vec![],
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: PathStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn step_union_is_tagged_by_kind() {
        let step = Step::Sort(sample_sort_step());
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "sort");
        assert_eq!(json["values"], serde_json::json!([3, 1, 2]));

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }
}

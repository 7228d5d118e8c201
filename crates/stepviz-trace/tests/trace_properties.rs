//! Property and scenario tests for the trace engine.
//!
//! The properties here hold for every algorithm in each family:
//! sorting traces end in the ascending permutation with every index
//! finalized, pathfinding traces visit no cell twice and reconstruct valid
//! walks, and both families are pure -- identical inputs yield identical
//! traces.

use proptest::prelude::*;

use stepviz_core::{GridConfig, PathAlgorithm, PathStep, Pos, SortAlgorithm, SortStep};
use stepviz_trace::{PathStepTracer, SortStepTracer};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn assert_sort_trace_invariants(steps: &[SortStep], input: &[u64]) {
    // Final snapshot: ascending values, full index range finalized.
    let last = steps.last().expect("non-trivial input should produce steps");
    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(last.values, expected);

    let mut finalized = last.sorted.clone();
    finalized.sort();
    assert_eq!(finalized, (0..input.len()).collect::<Vec<_>>());

    // Every snapshot: constant length, in-range indices, monotone sorted set.
    for step in steps {
        assert_eq!(step.values.len(), input.len());
        for &idx in step
            .comparing
            .iter()
            .chain(step.current.iter())
            .chain(step.sorted.iter())
        {
            assert!(idx < input.len());
        }
    }
    for pair in steps.windows(2) {
        for idx in &pair[0].sorted {
            assert!(pair[1].sorted.contains(idx));
        }
    }
}

fn assert_path_trace_invariants(steps: &[PathStep], config: GridConfig, start: Pos, end: Pos) {
    let last = steps.last().expect("trace is never empty");

    for step in steps {
        assert_eq!((step.grid.rows(), step.grid.cols()), (config.rows, config.cols));
        // Discovery order has no duplicates and avoids walls.
        let mut seen = std::collections::HashSet::new();
        for &pos in &step.visited {
            assert!(seen.insert(pos), "duplicate visit {pos}");
            assert!(!step.grid[pos].is_wall, "visited wall {pos}");
        }
        assert!(step.current.len() <= 1);
    }

    // Path, when present, is a start-to-goal walk in unit orthogonal steps.
    if !last.path.is_empty() {
        assert_eq!(last.path.first(), Some(&start));
        assert_eq!(last.path.last(), Some(&end));
        for pair in last.path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dr + dc, 1);
        }
        let mut seen = std::collections::HashSet::new();
        assert!(last.path.iter().all(|&p| seen.insert(p)));
    }
}

/// Positions strictly inside a `rows x cols` grid, excluding the two corners
/// used as start and end.
fn wall_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Vec<Pos>> {
    proptest::collection::vec((0..rows, 0..cols).prop_map(|(r, c)| Pos::new(r, c)), 0..8)
        .prop_map(move |walls| {
            walls
                .into_iter()
                .filter(|&p| p != Pos::new(0, 0) && p != Pos::new(rows - 1, cols - 1))
                .collect()
        })
}

// ---------------------------------------------------------------------------
// Sorting properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_sort_trace_ends_sorted(values in proptest::collection::vec(0u64..1000, 2..17)) {
        for algorithm in SortAlgorithm::ALL {
            let steps = SortStepTracer::run(algorithm, &values);
            assert_sort_trace_invariants(&steps, &values);
        }
    }

    #[test]
    fn sort_traces_are_idempotent(values in proptest::collection::vec(0u64..1000, 0..12)) {
        for algorithm in SortAlgorithm::ALL {
            prop_assert_eq!(
                SortStepTracer::run(algorithm, &values),
                SortStepTracer::run(algorithm, &values)
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Pathfinding properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_path_trace_is_well_formed(walls in wall_strategy(5, 5)) {
        let config = GridConfig { rows: 5, cols: 5 };
        let start = Pos::new(0, 0);
        let end = Pos::new(4, 4);
        let tracer = PathStepTracer::new(config);

        let mut reachable = Vec::new();
        for algorithm in PathAlgorithm::ALL {
            let steps = tracer.run(algorithm, start, end, &walls);
            assert_path_trace_invariants(&steps, config, start, end);
            reachable.push(!steps.last().unwrap().path.is_empty());
        }
        // The three searches agree on whether the goal is reachable at all.
        prop_assert!(reachable.iter().all(|&r| r == reachable[0]));
    }

    #[test]
    fn bfs_and_uniform_cost_agree_on_path_length(walls in wall_strategy(5, 5)) {
        let tracer = PathStepTracer::new(GridConfig { rows: 5, cols: 5 });
        let start = Pos::new(0, 0);
        let end = Pos::new(4, 4);

        let bfs = tracer.run(PathAlgorithm::Bfs, start, end, &walls);
        let ucs = tracer.run(PathAlgorithm::Dijkstra, start, end, &walls);
        let bfs_path = &bfs.last().unwrap().path;
        let ucs_path = &ucs.last().unwrap().path;

        prop_assert_eq!(bfs_path.is_empty(), ucs_path.is_empty());
        prop_assert_eq!(bfs_path.len(), ucs_path.len());
    }

    #[test]
    fn path_traces_are_idempotent(walls in wall_strategy(4, 6)) {
        let tracer = PathStepTracer::new(GridConfig { rows: 4, cols: 6 });
        for algorithm in PathAlgorithm::ALL {
            let a = tracer.run(algorithm, Pos::new(0, 0), Pos::new(3, 5), &walls);
            let b = tracer.run(algorithm, Pos::new(0, 0), Pos::new(3, 5), &walls);
            prop_assert_eq!(a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// Pinned scenarios
// ---------------------------------------------------------------------------

#[test]
fn bubble_5_3_1_scenario() {
    let steps = SortStepTracer::get_steps("bubble", &[5, 3, 1]);
    let last = steps.last().unwrap();
    assert_eq!(last.values, vec![1, 3, 5]);
    let mut finalized = last.sorted.clone();
    finalized.sort();
    assert_eq!(finalized, vec![0, 1, 2]);
}

#[test]
fn bfs_3x3_scenario() {
    let tracer = PathStepTracer::new(GridConfig { rows: 3, cols: 3 });
    let steps = tracer.get_steps("bfs", Pos::new(0, 0), Pos::new(2, 2), &[]);
    let path = &steps.last().unwrap().path;
    assert_eq!(path.len(), 5);
    assert_eq!(path.first(), Some(&Pos::new(0, 0)));
    assert_eq!(path.last(), Some(&Pos::new(2, 2)));
}

#[test]
fn walled_goal_scenario() {
    let tracer = PathStepTracer::new(GridConfig { rows: 3, cols: 3 });
    for id in ["bfs", "dfs"] {
        let steps = tracer.get_steps(id, Pos::new(0, 0), Pos::new(2, 2), &[Pos::new(2, 2)]);
        assert!(steps.last().unwrap().path.is_empty(), "{id}");
    }
}

#[test]
fn traces_serialize_to_json() {
    let sort_steps = SortStepTracer::get_steps("merge", &[3, 1, 2]);
    let json = serde_json::to_string(&sort_steps).unwrap();
    let back: Vec<SortStep> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sort_steps);

    let tracer = PathStepTracer::new(GridConfig { rows: 3, cols: 3 });
    let path_steps = tracer.get_steps("dijkstra", Pos::new(0, 0), Pos::new(2, 2), &[]);
    let json = serde_json::to_string(&path_steps).unwrap();
    let back: Vec<PathStep> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path_steps);
}

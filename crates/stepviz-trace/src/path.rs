//! Pathfinding step tracer.
//!
//! All three searches run against a fresh [`Grid`] built per call, expand
//! neighbors in the fixed up/down/left/right order, and emit one snapshot
//! per processed cell. Reaching the goal appends a trailing snapshot whose
//! `path` is the start-to-goal walk recovered from predecessor links; an
//! exhausted frontier simply ends the trace with the path still empty --
//! "unreachable" is a normal outcome, not a failure.
//!
//! The algorithms differ in where they mark a cell visited:
//!
//! - BFS marks at enqueue, so a cell is never queued twice.
//! - DFS marks at pop; a cell can sit on the stack multiple times and the
//!   later pops are skipped.
//! - The uniform-cost search keeps an explicit unvisited pool and re-sorts
//!   it (stably) by best-known distance every iteration. Deliberately not a
//!   priority queue: the stable full re-sort is the documented tie-break,
//!   and the pool is small enough that clarity wins.

use std::collections::VecDeque;

use indexmap::IndexSet;
use smallvec::SmallVec;

use stepviz_core::{Grid, GridConfig, PathAlgorithm, PathStep, Pos};

/// Trace generator for the pathfinding family.
///
/// Holds only the grid dimensions; every call builds its own [`PathRun`],
/// so traces are pure functions of `(algorithm, start, end, walls)`.
pub struct PathStepTracer {
    config: GridConfig,
}

impl Default for PathStepTracer {
    fn default() -> Self {
        PathStepTracer::new(GridConfig::default())
    }
}

impl PathStepTracer {
    pub fn new(config: GridConfig) -> Self {
        PathStepTracer { config }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Resolves `algorithm_id` (unknown ids fall back to BFS) and traces a
    /// search from `start` to `end` on a fresh grid with the given walls.
    ///
    /// `start` and `end` must lie inside the configured grid; surfaces
    /// validate this before calling.
    pub fn get_steps(
        &self,
        algorithm_id: &str,
        start: Pos,
        end: Pos,
        walls: &[Pos],
    ) -> Vec<PathStep> {
        self.run(PathAlgorithm::from_id(algorithm_id), start, end, walls)
    }

    /// Traces an already-resolved strategy.
    pub fn run(
        &self,
        algorithm: PathAlgorithm,
        start: Pos,
        end: Pos,
        walls: &[Pos],
    ) -> Vec<PathStep> {
        let mut run = PathRun::new(self.config, start, end, walls);
        match algorithm {
            PathAlgorithm::Bfs => run.bfs(),
            PathAlgorithm::Dfs => run.dfs(),
            PathAlgorithm::Dijkstra => run.dijkstra(),
        }
        run.steps
    }
}

/// Per-call working state: the evolving grid, the discovery-ordered visited
/// set, and the trace being accumulated.
struct PathRun {
    grid: Grid,
    visited: IndexSet<Pos>,
    steps: Vec<PathStep>,
    start: Pos,
    end: Pos,
}

impl PathRun {
    fn new(config: GridConfig, start: Pos, end: Pos, walls: &[Pos]) -> Self {
        PathRun {
            grid: Grid::new(config, walls),
            visited: IndexSet::new(),
            steps: Vec::new(),
            start,
            end,
        }
    }

    /// Copy-on-emit: the snapshot owns a clone of the grid as of this
    /// instant, with path flags applied to the clone only.
    fn emit(&mut self, current: Option<Pos>, path: &[Pos]) {
        let mut grid = self.grid.clone();
        for &pos in path {
            grid[pos].is_path = true;
        }
        self.steps.push(PathStep {
            grid,
            visited: self.visited.iter().copied().collect(),
            current: current.into_iter().collect::<SmallVec<[Pos; 1]>>(),
            path: path.to_vec(),
        });
    }

    /// Walks predecessor links backward from the goal. The links always
    /// point at earlier-visited cells, so the walk terminates at the start.
    fn reconstruct_path(&self) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cursor = Some(self.end);
        while let Some(pos) = cursor {
            path.push(pos);
            cursor = self.grid[pos].predecessor;
        }
        path.reverse();
        path
    }

    fn finish_at_goal(&mut self) {
        let path = self.reconstruct_path();
        self.emit(None, &path);
    }

    fn bfs(&mut self) {
        let mut queue: VecDeque<Pos> = VecDeque::new();
        queue.push_back(self.start);
        self.grid[self.start].is_visited = true;
        self.emit(None, &[]);

        while let Some(current) = queue.pop_front() {
            self.visited.insert(current);
            self.emit(Some(current), &[]);

            if current == self.end {
                self.finish_at_goal();
                break;
            }

            for neighbor in self.grid.neighbors(current) {
                if !self.grid[neighbor].is_visited {
                    self.grid[neighbor].is_visited = true;
                    self.grid[neighbor].predecessor = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    fn dfs(&mut self) {
        let mut stack: Vec<Pos> = vec![self.start];
        self.emit(None, &[]);

        while let Some(current) = stack.pop() {
            // A cell can be pushed more than once; later pops are stale.
            if self.grid[current].is_visited {
                continue;
            }
            self.grid[current].is_visited = true;
            self.visited.insert(current);
            self.emit(Some(current), &[]);

            if current == self.end {
                self.finish_at_goal();
                break;
            }

            for neighbor in self.grid.neighbors(current) {
                if !self.grid[neighbor].is_visited {
                    self.grid[neighbor].predecessor = Some(current);
                    stack.push(neighbor);
                }
            }
        }
    }

    /// Uniform-cost search with unit edge weights.
    fn dijkstra(&mut self) {
        self.grid[self.start].distance = Some(0);
        let mut unvisited: Vec<Pos> = self.grid.positions().collect();
        self.emit(None, &[]);

        while !unvisited.is_empty() {
            // Stable sort: equal distances keep their row-major seeded order.
            unvisited.sort_by_key(|&pos| self.grid[pos].distance.unwrap_or(u32::MAX));
            let current = unvisited.remove(0);

            let Some(distance) = self.grid[current].distance else {
                // Best remaining cell is unreached, so everything left is.
                break;
            };

            self.grid[current].is_visited = true;
            self.visited.insert(current);
            self.emit(Some(current), &[]);

            if current == self.end {
                self.finish_at_goal();
                break;
            }

            for neighbor in self.grid.neighbors(current) {
                if self.grid[neighbor].is_visited {
                    continue;
                }
                let tentative = distance + 1;
                if self.grid[neighbor].distance.map_or(true, |d| tentative < d) {
                    self.grid[neighbor].distance = Some(tentative);
                    self.grid[neighbor].predecessor = Some(current);
                }
            }
        }
    }
}

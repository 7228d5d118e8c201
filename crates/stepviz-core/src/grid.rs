//! Fixed-size search grid.
//!
//! A [`Grid`] is a row-major matrix of [`Cell`]s built fresh for every trace.
//! Cells carry the per-run search state (visited/path flags, distance,
//! predecessor link); the grid itself is cloned into every emitted snapshot
//! so later mutation never leaks into earlier frames.
//!
//! Neighbor expansion order is fixed: up, down, left, right. All three
//! pathfinding algorithms inherit their tie-break behavior from this order,
//! so it must not change.

use std::collections::HashSet;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::CoreError;
use crate::pos::Pos;

/// Grid dimensions for a pathfinding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    /// The 20x30 canvas the visualizer was built around.
    fn default() -> Self {
        GridConfig { rows: 20, cols: 30 }
    }
}

impl GridConfig {
    /// Rejects degenerate dimensions. Surface-level check; tracers assume it.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CoreError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Bounds check for caller-supplied start/end positions.
    pub fn check_bounds(&self, pos: Pos) -> Result<(), CoreError> {
        if !self.contains(pos) {
            return Err(CoreError::PositionOutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// One grid cell with its per-run search state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Pos,
    pub is_wall: bool,
    pub is_visited: bool,
    pub is_path: bool,
    /// Discovered distance from the start; `None` is the unreached sentinel.
    pub distance: Option<u32>,
    /// Non-owning back-reference to the cell this one was discovered from.
    pub predecessor: Option<Pos>,
}

/// Row-major matrix of cells with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a fresh grid: every cell unreached, wall positions flagged.
    /// Out-of-bounds wall entries are ignored.
    pub fn new(config: GridConfig, walls: &[Pos]) -> Self {
        let wall_set: HashSet<Pos> = walls.iter().copied().collect();
        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                let pos = Pos::new(row, col);
                cells.push(Cell {
                    pos,
                    is_wall: wall_set.contains(&pos),
                    is_visited: false,
                    is_path: false,
                    distance: None,
                    predecessor: None,
                });
            }
        }
        Grid {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn idx(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} outside {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// In-bounds, non-wall neighbors in the fixed up, down, left, right order.
    pub fn neighbors(&self, pos: Pos) -> SmallVec<[Pos; 4]> {
        let mut neighbors = SmallVec::new();
        let mut push = |row: usize, col: usize| {
            let candidate = Pos::new(row, col);
            if !self[candidate].is_wall {
                neighbors.push(candidate);
            }
        };
        if pos.row > 0 {
            push(pos.row - 1, pos.col);
        }
        if pos.row + 1 < self.rows {
            push(pos.row + 1, pos.col);
        }
        if pos.col > 0 {
            push(pos.row, pos.col - 1);
        }
        if pos.col + 1 < self.cols {
            push(pos.row, pos.col + 1);
        }
        neighbors
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        let i = self.idx(pos);
        &self.cells[i]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        let i = self.idx(pos);
        &mut self.cells[i]
    }
}

//! Grid coordinates.
//!
//! [`Pos`] is a plain row/column pair used everywhere a cell is referenced:
//! start and end points, wall lists, visited sequences, and the non-owning
//! predecessor links cells carry for path reconstruction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A row-major grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Pos {
    type Err = CoreError;

    /// Parses the `row,col` syntax used by the CLI and wall lists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidPosition {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
        Ok(Pos { row, col })
    }
}

//! Algorithm selectors.
//!
//! Both families are chosen by a caller-supplied id string. Unknown ids are
//! not errors: each family substitutes its documented default (bubble sort,
//! breadth-first search) so a stale or mistyped selector still yields a
//! playable trace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sorting strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// All selectors, in display order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Resolves an id string; unknown ids fall back to bubble sort.
    pub fn from_id(id: &str) -> Self {
        match id {
            "bubble" => SortAlgorithm::Bubble,
            "selection" => SortAlgorithm::Selection,
            "insertion" => SortAlgorithm::Insertion,
            "merge" => SortAlgorithm::Merge,
            "quick" => SortAlgorithm::Quick,
            _ => SortAlgorithm::Bubble,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pathfinding strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathAlgorithm {
    Dijkstra,
    Bfs,
    Dfs,
}

impl PathAlgorithm {
    /// All selectors, in display order.
    pub const ALL: [PathAlgorithm; 3] = [
        PathAlgorithm::Dijkstra,
        PathAlgorithm::Bfs,
        PathAlgorithm::Dfs,
    ];

    /// Resolves an id string; unknown ids fall back to breadth-first search.
    pub fn from_id(id: &str) -> Self {
        match id {
            "dijkstra" => PathAlgorithm::Dijkstra,
            "bfs" => PathAlgorithm::Bfs,
            "dfs" => PathAlgorithm::Dfs,
            _ => PathAlgorithm::Bfs,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            PathAlgorithm::Dijkstra => "dijkstra",
            PathAlgorithm::Bfs => "bfs",
            PathAlgorithm::Dfs => "dfs",
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_ids_roundtrip() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::from_id(algorithm.id()), algorithm);
        }
    }

    #[test]
    fn path_ids_roundtrip() {
        for algorithm in PathAlgorithm::ALL {
            assert_eq!(PathAlgorithm::from_id(algorithm.id()), algorithm);
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_defaults() {
        assert_eq!(SortAlgorithm::from_id("bogo"), SortAlgorithm::Bubble);
        assert_eq!(SortAlgorithm::from_id(""), SortAlgorithm::Bubble);
        assert_eq!(PathAlgorithm::from_id("astar"), PathAlgorithm::Bfs);
        assert_eq!(PathAlgorithm::from_id(""), PathAlgorithm::Bfs);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&SortAlgorithm::Quick).unwrap();
        assert_eq!(json, "\"quick\"");
        let back: PathAlgorithm = serde_json::from_str("\"dijkstra\"").unwrap();
        assert_eq!(back, PathAlgorithm::Dijkstra);
    }
}

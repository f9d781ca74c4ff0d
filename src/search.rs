//! Generic breadth-first search over puzzle state spaces.
//!
//! Any puzzle that can describe its states as immutable values with a
//! goal test and a one-move neighbor function gets shortest-path solving
//! from the same engine. The search is unweighted, so the first goal
//! dequeued lies on a shortest path from the start.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use tracing::debug;

/// Capability set a puzzle state must provide to be searchable.
///
/// Implementations are immutable values: equality and hashing cover the
/// full observable state, and `neighbors` returns fresh, independent
/// values rather than views into the receiver. Puzzle-wide parameters
/// (board dimensions, target values) travel inside each state instead of
/// living in shared mutable storage, which keeps states safe to compare,
/// hash, and move across threads.
pub trait Configuration: Clone + Eq + Hash {
    /// Does this state satisfy the puzzle's win condition?
    fn is_goal(&self) -> bool;

    /// All states reachable from this one by a single legal move.
    ///
    /// Duplicate values are fine (the engine deduplicates), but
    /// invalid-move placeholders are not: a move attempt that fails must
    /// be dropped before the set is returned. A dead-end state returns
    /// an empty vector.
    fn neighbors(&self) -> Vec<Self>;
}

/// Breadth-first shortest-path search from a single start state.
///
/// Construction stores the start; no search work happens until
/// [`Solver::solve`] runs.
#[derive(Debug, Clone)]
pub struct Solver<C: Configuration> {
    start: C,
}

/// Outcome of a completed search.
///
/// An empty path means no goal was reachable; that is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone)]
pub struct Solution<C: Configuration> {
    /// Start-to-goal path, empty when the frontier emptied without
    /// finding a goal. Otherwise the first element is the start and the
    /// last satisfies the goal predicate.
    pub path: Vec<C>,
    /// Every configuration produced by neighbor expansion, duplicates
    /// included, with the start counted once.
    pub total_generated: usize,
    /// Distinct configurations ever discovered.
    pub unique_visited: usize,
}

impl<C: Configuration> Solution<C> {
    /// Whether a goal was reached.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves in the solution, if one was found.
    pub fn moves(&self) -> Option<usize> {
        if self.path.is_empty() {
            None
        } else {
            Some(self.path.len() - 1)
        }
    }
}

impl<C: Configuration> Solver<C> {
    /// Create a solver for the given start state.
    pub fn new(start: C) -> Self {
        Self { start }
    }

    /// Run the search to completion and return the solution.
    ///
    /// The frontier is strictly FIFO, which is what makes the first goal
    /// found a nearest goal. When several shortest paths exist, the one
    /// returned follows neighbor-production order and is not otherwise
    /// canonical; callers should assert distance, not exact path
    /// identity.
    ///
    /// Consuming `self` makes the misuse cases of the underlying design
    /// unrepresentable: results cannot be read before the search has
    /// run, and a solver cannot be re-run over a stale predecessor map.
    pub fn solve(self) -> Solution<C> {
        let mut frontier = VecDeque::new();
        let mut predecessors: HashMap<C, Option<C>> = HashMap::new();
        let mut total_generated: usize = 1;

        predecessors.insert(self.start.clone(), None);
        frontier.push_back(self.start);

        let mut goal = None;
        while let Some(current) = frontier.pop_front() {
            if current.is_goal() {
                goal = Some(current);
                break;
            }
            for neighbor in current.neighbors() {
                total_generated += 1;
                if !predecessors.contains_key(&neighbor) {
                    predecessors.insert(neighbor.clone(), Some(current.clone()));
                    frontier.push_back(neighbor);
                }
            }
        }

        let path = match goal {
            Some(goal) => reconstruct_path(&predecessors, goal),
            None => Vec::new(),
        };

        debug!(
            total_generated,
            unique_visited = predecessors.len(),
            solved = !path.is_empty(),
            "search complete"
        );

        Solution {
            path,
            total_generated,
            unique_visited: predecessors.len(),
        }
    }
}

/// Walk the predecessor chain from the goal back to the start, then
/// reverse so the path reads start-to-goal.
fn reconstruct_path<C: Configuration>(predecessors: &HashMap<C, Option<C>>, goal: C) -> Vec<C> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(config) = current {
        current = predecessors.get(&config).cloned().flatten();
        path.push(config);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Positions 0..len on a line; a move shifts by one in either
    /// direction.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct LineConfig {
        position: u32,
        goal: u32,
        len: u32,
    }

    impl LineConfig {
        fn new(position: u32, goal: u32, len: u32) -> Self {
            Self {
                position,
                goal,
                len,
            }
        }

        fn at(&self, position: u32) -> Self {
            Self { position, ..*self }
        }
    }

    impl Configuration for LineConfig {
        fn is_goal(&self) -> bool {
            self.position == self.goal
        }

        fn neighbors(&self) -> Vec<Self> {
            let mut neighbors = Vec::new();
            if self.position > 0 {
                neighbors.push(self.at(self.position - 1));
            }
            if self.position + 1 < self.len {
                neighbors.push(self.at(self.position + 1));
            }
            neighbors
        }
    }

    /// Never a goal, never any moves.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct DeadEnd;

    impl Configuration for DeadEnd {
        fn is_goal(&self) -> bool {
            false
        }

        fn neighbors(&self) -> Vec<Self> {
            Vec::new()
        }
    }

    #[test]
    fn test_finds_shortest_path_on_a_line() {
        let solution = Solver::new(LineConfig::new(0, 4, 8)).solve();

        assert!(solution.is_solved());
        assert_eq!(solution.moves(), Some(4));
        assert_eq!(solution.path.first(), Some(&LineConfig::new(0, 4, 8)));
        assert!(solution.path.last().is_some_and(LineConfig::is_goal));
        // Every step is one move from its predecessor.
        for pair in solution.path.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_start_that_is_already_a_goal() {
        let start = LineConfig::new(3, 3, 8);
        let solution = Solver::new(start.clone()).solve();

        assert_eq!(solution.path, vec![start]);
        assert_eq!(solution.moves(), Some(0));
        assert_eq!(solution.unique_visited, 1);
        assert_eq!(solution.total_generated, 1);
    }

    #[test]
    fn test_unreachable_goal_visits_the_whole_component() {
        // Goal lies beyond the line, so the search exhausts all 5
        // positions.
        let solution = Solver::new(LineConfig::new(0, 9, 5)).solve();

        assert!(!solution.is_solved());
        assert!(solution.path.is_empty());
        assert_eq!(solution.moves(), None);
        assert_eq!(solution.unique_visited, 5);
    }

    #[test]
    fn test_dead_end_start() {
        let solution = Solver::new(DeadEnd).solve();

        assert!(solution.path.is_empty());
        assert_eq!(solution.unique_visited, 1);
        assert_eq!(solution.total_generated, 1);
    }

    #[test]
    fn test_total_generated_counts_duplicates() {
        // On a 5-long line from 0 with no goal: positions 1..4 are each
        // produced twice, 0 and 4 once, plus the start itself.
        let solution = Solver::new(LineConfig::new(0, 9, 5)).solve();

        assert_eq!(solution.total_generated, 9);
    }

    #[test]
    fn test_neighbor_production_is_repeatable() {
        let config = LineConfig::new(2, 4, 8);
        assert_eq!(config.neighbors(), config.neighbors());
    }
}

//! Tour solving entry points.

use std::{fmt, ops::Index};

use cavalcade_core::{MoveTable, Square, SquareSet};

use crate::{backtracking, budget::SearchBudget, error::SolveError, warnsdorff};

/// Search strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Strategy {
    /// Exhaustive depth-first search with chronological backtracking.
    ///
    /// Complete: given enough budget it finds a tour from any start square.
    Backtracking,
    /// Warnsdorff's greedy heuristic with single-path unwinding.
    ///
    /// Much faster, but it never retries an alternative neighbor after a
    /// failure, so it can miss tours that exist from some start squares.
    Warnsdorff,
}

/// A complete knight's tour: all 64 squares in visitation order.
///
/// Consecutive squares are always a legal knight move apart, and the sequence
/// is a permutation of the whole board.
///
/// # Examples
///
/// ```
/// use cavalcade_core::Square;
/// use cavalcade_solver::{Strategy, TourSolver};
///
/// let tour = TourSolver::new().solve(Square::from_index(12), Strategy::Warnsdorff)?;
/// assert_eq!(tour[0], tour.start());
/// assert_eq!(tour.iter().count(), 64);
/// # Ok::<(), cavalcade_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tour {
    path: [Square; 64],
}

impl Tour {
    /// Returns the first square of the tour.
    #[must_use]
    pub const fn start(&self) -> Square {
        self.path[0]
    }

    /// Returns the squares in visitation order.
    #[must_use]
    pub const fn as_slice(&self) -> &[Square] {
        &self.path
    }

    /// Returns an iterator over the squares in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.path.iter().copied()
    }
}

impl Index<usize> for Tour {
    type Output = Square;

    fn index(&self, position: usize) -> &Square {
        &self.path[position]
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = Square;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Square>>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.iter().copied()
    }
}

/// Renders the board as an 8×8 grid of visit numbers (0-63).
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps = [0usize; 64];
        for (step, square) in self.path.iter().enumerate() {
            steps[usize::from(square.index())] = step;
        }
        for row in 0..8 {
            for col in 0..8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:2}", steps[usize::from(Square::new(row, col).index())])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Computes knight's tours under a wall-clock budget.
///
/// Each solve call uses the process-wide [`MoveTable`], a fresh visited set,
/// and a fresh deadline; nothing is shared or retained across calls.
///
/// # Examples
///
/// ```
/// use cavalcade_core::Square;
/// use cavalcade_solver::{Strategy, TourSolver};
///
/// let solver = TourSolver::new();
/// let tour = solver.solve(Square::from_index(0), Strategy::Backtracking)?;
/// assert_eq!(tour.start().index(), 0);
/// # Ok::<(), cavalcade_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TourSolver {
    budget: SearchBudget,
}

impl TourSolver {
    /// Creates a solver with the default five-minute budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with an explicit budget. Zero is allowed and makes
    /// every solve fail at the first deadline check.
    #[must_use]
    pub const fn with_budget(budget: SearchBudget) -> Self {
        Self { budget }
    }

    /// Returns the configured budget.
    #[must_use]
    pub const fn budget(&self) -> SearchBudget {
        self.budget
    }

    /// Searches for a tour starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if no complete tour was found, whether because
    /// the budget expired or because the strategy dead-ended. Partial
    /// progress is never reported as success.
    pub fn solve(&self, start: Square, strategy: Strategy) -> Result<Tour, SolveError> {
        let mut path = [Square::default(); 64];
        self.solve_into(start, &mut path, strategy)?;
        Ok(Tour { path })
    }

    /// Searches for a tour starting at `start`, writing it into a
    /// caller-owned buffer.
    ///
    /// On success `path[0..64]` holds the tour in visitation order. On
    /// failure the buffer contents beyond what the search wrote before
    /// failing are unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `path` holds fewer than 64 squares; that is a contract
    /// violation by the caller, not a recoverable condition.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if no complete tour was found.
    pub fn solve_into(
        &self,
        start: Square,
        path: &mut [Square],
        strategy: Strategy,
    ) -> Result<(), SolveError> {
        assert!(
            path.len() >= Square::COUNT,
            "output path must hold at least 64 squares"
        );

        let table = MoveTable::shared();
        let mut visited = SquareSet::new();
        let deadline = self.budget.start();

        let found = match strategy {
            Strategy::Backtracking => {
                backtracking::search(table, start, &mut visited, path, 0, deadline)
            }
            Strategy::Warnsdorff => warnsdorff::search(table, start, &mut visited, path, 0, deadline),
        };

        if found { Ok(()) } else { Err(SolveError) }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn assert_valid_tour(tour: &Tour, start: Square) {
        assert_eq!(tour.start(), start);

        let squares: SquareSet = tour.iter().collect();
        assert!(squares.is_full(), "tour is not a permutation of the board");

        let table = MoveTable::shared();
        for pair in tour.as_slice().windows(2) {
            assert!(
                table.neighbors(pair[0]).contains(&pair[1]),
                "{} -> {} is not a knight move",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_backtracking_from_corner() {
        let start = Square::from_index(0);
        let tour = TourSolver::new().solve(start, Strategy::Backtracking).unwrap();

        assert_valid_tour(&tour, start);
        assert!(matches!(tour[1].index(), 10 | 17));
    }

    #[test]
    fn test_warnsdorff_from_square_12() {
        let start = Square::from_index(12);
        let tour = TourSolver::new().solve(start, Strategy::Warnsdorff).unwrap();

        assert_valid_tour(&tour, start);
    }

    #[test]
    fn test_zero_budget_fails() {
        let solver = TourSolver::with_budget(SearchBudget::new(Duration::ZERO));
        let start = Square::from_index(0);

        assert_eq!(solver.solve(start, Strategy::Backtracking), Err(SolveError));
        assert_eq!(solver.solve(start, Strategy::Warnsdorff), Err(SolveError));
    }

    #[test]
    fn test_solve_into_writes_caller_buffer() {
        let start = Square::from_index(12);
        let mut path = [Square::default(); 64];

        TourSolver::new()
            .solve_into(start, &mut path, Strategy::Warnsdorff)
            .unwrap();

        assert_eq!(path[0], start);
        let squares: SquareSet = path.iter().copied().collect();
        assert!(squares.is_full());
    }

    #[test]
    fn test_solve_into_accepts_oversized_buffer() {
        let start = Square::from_index(12);
        let mut path = [Square::default(); 80];

        TourSolver::new()
            .solve_into(start, &mut path, Strategy::Warnsdorff)
            .unwrap();

        let squares: SquareSet = path[..64].iter().copied().collect();
        assert!(squares.is_full());
    }

    #[test]
    #[should_panic(expected = "at least 64 squares")]
    fn test_solve_into_rejects_short_buffer() {
        let mut path = [Square::default(); 63];
        let _ = TourSolver::new().solve_into(Square::from_index(0), &mut path, Strategy::Warnsdorff);
    }

    #[test]
    fn test_display_renders_visit_grid() {
        let tour = TourSolver::new()
            .solve(Square::from_index(0), Strategy::Backtracking)
            .unwrap();
        let rendered = tour.to_string();

        assert_eq!(rendered.lines().count(), 8);
        // The start square is visit 0, rendered in the top-left cell.
        assert!(rendered.starts_with(" 0"));
    }

    #[test]
    fn test_strategy_variant_queries() {
        assert!(Strategy::Backtracking.is_backtracking());
        assert!(Strategy::Warnsdorff.is_warnsdorff());
    }

    /// Exhaustive sweep over all 64 start squares. The 8×8 board is fully
    /// solvable from any start by exhaustive search, but some starts take a
    /// while, so this runs only on demand.
    #[test]
    #[ignore = "exhaustive sweep over all start squares; slow"]
    fn test_backtracking_succeeds_from_every_start() {
        let solver = TourSolver::new();
        for start in Square::all() {
            let tour = solver.solve(start, Strategy::Backtracking).unwrap();
            assert_valid_tour(&tour, start);
        }
    }
}

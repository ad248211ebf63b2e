//! Knight's tour search on the 8×8 chessboard.
//!
//! This crate finds knight's tours: sequences of 64 knight moves visiting
//! every board square exactly once, starting from a caller-given square. Two
//! strategies are available, both bounded by a wall-clock budget:
//!
//! - [`Strategy::Backtracking`]: exhaustive depth-first search with
//!   chronological backtracking. Complete, but can be slow from some starts.
//! - [`Strategy::Warnsdorff`]: greedy search that always advances to the
//!   unvisited neighbor with the fewest onward unvisited moves. Fast, but it
//!   only unwinds on failure and never retries an alternative neighbor, so it
//!   can miss tours that exist.
//!
//! # Examples
//!
//! ```
//! use cavalcade_core::Square;
//! use cavalcade_solver::{Strategy, TourSolver};
//!
//! let solver = TourSolver::new();
//! let tour = solver.solve(Square::from_index(12), Strategy::Warnsdorff)?;
//!
//! assert_eq!(tour.start().index(), 12);
//! assert_eq!(tour.as_slice().len(), 64);
//! # Ok::<(), cavalcade_solver::SolveError>(())
//! ```

pub mod budget;
mod error;
pub mod solver;

mod backtracking;
mod warnsdorff;

pub use self::{
    budget::{Deadline, SearchBudget},
    error::SolveError,
    solver::{Strategy, Tour, TourSolver},
};

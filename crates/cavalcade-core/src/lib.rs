//! Core data structures for knight's tour search.
//!
//! This crate provides the board-geometry types shared by the search
//! algorithms in `cavalcade-solver`:
//!
//! - [`square`]: Type-safe board squares, indexed 0-63 in row-major order
//! - [`square_set`]: A set of squares backed by a single 64-bit word, used to
//!   track which squares already appear in a tour in progress
//! - [`moves`]: The precomputed per-square table of legal knight destinations,
//!   including the on-demand degree computation used by Warnsdorff's rule
//!
//! # Examples
//!
//! ```
//! use cavalcade_core::{MoveTable, Square, SquareSet};
//!
//! let table = MoveTable::shared();
//!
//! // The corner square has exactly two knight moves.
//! let corner = Square::new(0, 0);
//! assert_eq!(table.neighbors(corner).len(), 2);
//!
//! // Marking a square visited lowers its neighbors' degrees.
//! let mut visited = SquareSet::new();
//! visited.insert(corner);
//! for &next in table.neighbors(corner) {
//!     assert_eq!(table.degree(next, visited), table.neighbors(next).len() - 1);
//! }
//! ```

pub mod moves;
pub mod square;
pub mod square_set;

// Re-export commonly used types
pub use self::{moves::MoveTable, square::Square, square_set::SquareSet};

//! Exhaustive depth-first search with chronological backtracking.

use cavalcade_core::{MoveTable, Square, SquareSet};

use crate::budget::Deadline;

/// Tries to extend the tour from `square` at `path[depth]`.
///
/// At entry the search fails without descending if the deadline has expired,
/// or if `square` has no unvisited neighbor while the board cannot be
/// completed by `square` itself (fewer than 63 squares visited). Otherwise
/// `square` is marked and written into the path, and every unvisited neighbor
/// is tried in table order; the first success wins. On exhaustion the mark is
/// undone and failure propagates to the caller.
///
/// Recursion depth is bounded by the 64 tour positions.
pub(crate) fn search(
    table: &MoveTable,
    square: Square,
    visited: &mut SquareSet,
    path: &mut [Square],
    depth: usize,
    deadline: Deadline,
) -> bool {
    if deadline.expired()
        || (table.degree(square, *visited) == 0 && visited.len() != Square::COUNT - 1)
    {
        return false;
    }

    visited.insert(square);
    path[depth] = square;

    if visited.is_full() {
        return true;
    }

    for &next in table.neighbors(square) {
        if !visited.contains(next) && search(table, next, visited, path, depth + 1, deadline) {
            return true;
        }
    }

    visited.remove(square);
    false
}

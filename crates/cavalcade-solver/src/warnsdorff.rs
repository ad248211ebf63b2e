//! Warnsdorff's rule: always advance to the unvisited neighbor with the
//! fewest onward unvisited moves.

use cavalcade_core::{MoveTable, Square, SquareSet};

use crate::budget::Deadline;

/// Tries to extend the tour from `square` at `path[depth]`.
///
/// Entry checks, marking, and completion detection match the exhaustive
/// search. The difference is the descent: instead of trying every neighbor,
/// exactly one is chosen by minimum degree and the search recurses into it
/// alone. If that single path fails, the mark on `square` is undone and the
/// failure propagates; there is no retry with a second-best neighbor at this
/// depth. The heuristic is therefore incomplete: it can miss tours that
/// exist from some start squares.
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

    let Some(next) = min_degree_neighbor(table, square, *visited) else {
        return false;
    };

    if search(table, next, visited, path, depth + 1, deadline) {
        return true;
    }

    visited.remove(square);
    false
}

/// Picks the unvisited neighbor of `square` with the lowest degree.
///
/// Neighbors are scanned in table order and a later candidate replaces the
/// tracked minimum only on a strictly lower degree, so ties keep the
/// earliest candidate.
fn min_degree_neighbor(table: &MoveTable, square: Square, visited: SquareSet) -> Option<Square> {
    let mut best: Option<(Square, usize)> = None;
    for &next in table.neighbors(square) {
        if visited.contains(next) {
            continue;
        }
        let degree = table.degree(next, visited);
        match best {
            Some((_, min)) if degree >= min => {}
            _ => best = Some((next, degree)),
        }
    }
    best.map(|(next, _)| next)
}

//! Legal knight moves and the per-square transition table.

use std::{fmt, sync::LazyLock};

use tinyvec::ArrayVec;

use crate::{Square, SquareSet};

/// The eight knight offsets as `(row delta, column delta)` pairs.
///
/// [`MoveTable::new`] applies these in *reverse* of the listed order. The
/// resulting neighbor order is a behavioral contract: it fixes the branch
/// priority of the exhaustive search and the tie-break priority of
/// Warnsdorff's rule, so identical inputs always produce identical tours.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

type NeighborList = ArrayVec<[Square; 8]>;

static SHARED: LazyLock<MoveTable> = LazyLock::new(MoveTable::new);

/// Precomputed per-square lists of legal knight destinations.
///
/// For every square the table holds its 2-8 reachable squares, in the fixed
/// order described at [`KNIGHT_OFFSETS`]. The table depends only on board
/// geometry, never on a start square or visited state, so it is immutable
/// after construction and a process-wide instance is available through
/// [`shared`](Self::shared).
///
/// # Examples
///
/// ```
/// use cavalcade_core::{MoveTable, Square};
///
/// let table = MoveTable::shared();
///
/// // From the top-left corner only two squares are reachable.
/// let neighbors: Vec<_> = table
///     .neighbors(Square::new(0, 0))
///     .iter()
///     .map(|square| square.index())
///     .collect();
/// assert_eq!(neighbors, vec![10, 17]);
/// ```
#[derive(Debug, Clone)]
pub struct MoveTable {
    neighbors: [NeighborList; 64],
}

impl MoveTable {
    /// Builds the table by evaluating [`KNIGHT_OFFSETS`] in reverse for every
    /// square and keeping the destinations that stay on the board.
    ///
    /// Deterministic and always succeeds.
    #[must_use]
    pub fn new() -> Self {
        let mut neighbors = [NeighborList::default(); 64];
        for square in Square::all() {
            let list = &mut neighbors[usize::from(square.index())];
            for &(dr, dc) in KNIGHT_OFFSETS.iter().rev() {
                if let Some(dest) = square.offset(dr, dc) {
                    list.push(dest);
                }
            }
        }
        Self { neighbors }
    }

    /// Returns the process-wide table, built on first use.
    ///
    /// The table is read-only after initialization, so sharing it needs no
    /// further synchronization.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the ordered knight destinations of `square`.
    #[must_use]
    pub fn neighbors(&self, square: Square) -> &[Square] {
        &self.neighbors[usize::from(square.index())]
    }

    /// Returns how many of `square`'s neighbors are not in `visited`.
    ///
    /// This is the onward-move count used by Warnsdorff's rule. It is
    /// recomputed on demand; the visited set changes at every search step, so
    /// caching would buy nothing.
    #[must_use]
    pub fn degree(&self, square: Square, visited: SquareSet) -> usize {
        self.neighbors(square)
            .iter()
            .filter(|&&next| !visited.contains(next))
            .count()
    }
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic rendering: every square's ordered neighbor list, followed by
/// the board's coordinate-to-index grid. Not consumed by the search logic.
impl fmt::Display for MoveTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in Square::all() {
            write!(f, "square {:2}:", square.index())?;
            for next in self.neighbors(square) {
                write!(f, " {next}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        for row in 0..8 {
            for col in 0..8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:2}", Square::new(row, col).index())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Board squares of the 8×8 chessboard.

/// A square of the 8×8 board, indexed 0-63 in row-major order.
///
/// Square `0` is the top-left corner; square `row * 8 + col` is the square in
/// row `row` and column `col`. Construction validates the range, so a
/// `Square` value is always a real board square.
///
/// The `Default` square is index 0; this exists so squares can live in
/// fixed-capacity inline containers.
///
/// # Examples
///
/// ```
/// use cavalcade_core::Square;
///
/// let square = Square::new(3, 4);
/// assert_eq!(square.index(), 28);
/// assert_eq!(square.row(), 3);
/// assert_eq!(square.col(), 4);
///
/// // Create from a linear index
/// let square = Square::from_index(63);
/// assert_eq!((square.row(), square.col()), (7, 7));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{index}")]
pub struct Square {
    index: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-7.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8);
        Self {
            index: row * 8 + col,
        }
    }

    /// Creates a square from its linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-63.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 64);
        Self { index }
    }

    /// Returns the linear index (0-63).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row coordinate (0-7).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 8
    }

    /// Returns the column coordinate (0-7).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 8
    }

    /// Returns the square reached by stepping `(dr, dc)` from this one, or
    /// `None` if the step leaves the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavalcade_core::Square;
    ///
    /// let corner = Square::new(0, 0);
    /// assert_eq!(corner.offset(2, 1), Some(Square::new(2, 1)));
    /// assert_eq!(corner.offset(-1, 2), None);
    /// ```
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = i16::from(self.row()) + i16::from(dr);
        let col = i16::from(self.col()) + i16::from(dc);
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (row, col) = (row as u8, col as u8);
        Some(Self::new(row, col))
    }

    /// Returns an iterator over all 64 squares in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavalcade_core::Square;
    ///
    /// let squares: Vec<_> = Square::all().collect();
    /// assert_eq!(squares.len(), 64);
    /// assert_eq!(squares[0].index(), 0);
    /// assert_eq!(squares[63].index(), 63);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..64).map(Self::from_index)
    }
}

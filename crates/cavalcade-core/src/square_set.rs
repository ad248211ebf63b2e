//! A set of board squares backed by a single 64-bit word.

use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Square;

/// A set of board squares, represented as a 64-bit bitset.
///
/// Bit *i* is set exactly when square *i* is in the set, so membership tests,
/// insertion, removal, and counting are all single-word operations. The
/// solver uses one `SquareSet` per search invocation to track the squares
/// already placed in the tour; [`len`](Self::len) then always equals the
/// current path length.
///
/// # Examples
///
/// ```
/// use cavalcade_core::{Square, SquareSet};
///
/// let mut visited = SquareSet::new();
/// visited.insert(Square::from_index(0));
/// visited.insert(Square::from_index(10));
///
/// assert_eq!(visited.len(), 2);
/// assert!(visited.contains(Square::from_index(10)));
/// assert!(!visited.is_full());
/// ```
///
/// # Set operations
///
/// ```
/// use cavalcade_core::{Square, SquareSet};
///
/// let a: SquareSet = [0, 1, 2].map(Square::from_index).into_iter().collect();
/// let b: SquareSet = [1, 2, 3].map(Square::from_index).into_iter().collect();
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b).len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet {
    bits: u64,
}

impl SquareSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 64 squares.
    pub const FULL: Self = Self { bits: u64::MAX };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a square to the set.
    pub const fn insert(&mut self, square: Square) {
        self.bits |= 1 << square.index();
    }

    /// Removes a square from the set.
    pub const fn remove(&mut self, square: Square) {
        self.bits &= !(1 << square.index());
    }

    /// Returns `true` if the square is in the set.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        self.bits & (1 << square.index()) != 0
    }

    /// Returns the number of squares in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no squares.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if the set contains all 64 squares.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.bits == u64::MAX
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the squares in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the squares in ascending index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavalcade_core::{Square, SquareSet};
    ///
    /// let set: SquareSet = [9, 1, 5].map(Square::from_index).into_iter().collect();
    /// let indices: Vec<_> = set.iter().map(Square::index).collect();
    /// assert_eq!(indices, vec![1, 5, 9]);
    /// ```
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for SquareSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for SquareSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = Self::new();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`] in ascending index order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u64,
}

impl Iterator for Iter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Square::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<Square> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = (63 - self.bits.leading_zeros()) as u8;
        self.bits &= !(1 << index);
        Some(Square::from_index(index))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn square() -> impl Strategy<Value = Square> {
        (0u8..64).prop_map(Square::from_index)
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut set = SquareSet::new();
        let square = Square::from_index(42);

        assert!(!set.contains(square));
        set.insert(square);
        assert!(set.contains(square));
        set.remove(square);
        assert!(!set.contains(square));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = SquareSet::new();
        set.insert(Square::from_index(7));
        set.insert(Square::from_index(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(SquareSet::EMPTY.len(), 0);
        assert_eq!(SquareSet::FULL.len(), 64);
        assert!(SquareSet::FULL.is_full());

        for square in Square::all() {
            assert!(SquareSet::FULL.contains(square));
            assert!(!SquareSet::EMPTY.contains(square));
        }
    }

    #[test]
    fn test_full_after_inserting_all() {
        let set: SquareSet = Square::all().collect();
        assert!(set.is_full());
    }

    #[test]
    fn test_iteration_order() {
        let set: SquareSet = [63, 0, 31, 5].map(Square::from_index).into_iter().collect();
        let collected: Vec<_> = set.iter().map(Square::index).collect();
        assert_eq!(collected, vec![0, 5, 31, 63]);
    }

    #[test]
    fn test_reverse_iteration() {
        let set: SquareSet = [63, 0, 31].map(Square::from_index).into_iter().collect();
        let collected: Vec<_> = set.iter().rev().map(Square::index).collect();
        assert_eq!(collected, vec![63, 31, 0]);
    }

    #[test]
    fn test_operations() {
        let a: SquareSet = [0, 1, 2].map(Square::from_index).into_iter().collect();
        let b: SquareSet = [1, 2, 3].map(Square::from_index).into_iter().collect();

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert!(a.difference(b).contains(Square::from_index(0)));
    }

    proptest! {
        #[test]
        fn prop_collected_squares_are_members(squares in prop::collection::vec(square(), 0..64)) {
            let set: SquareSet = squares.iter().copied().collect();
            for &square in &squares {
                prop_assert!(set.contains(square));
            }
        }

        #[test]
        fn prop_len_matches_iter_count(squares in prop::collection::vec(square(), 0..64)) {
            let set: SquareSet = squares.iter().copied().collect();
            prop_assert_eq!(set.len(), set.iter().count());
        }

        #[test]
        fn prop_difference_is_disjoint_from_subtrahend(
            a in prop::collection::vec(square(), 0..64),
            b in prop::collection::vec(square(), 0..64),
        ) {
            let a: SquareSet = a.into_iter().collect();
            let b: SquareSet = b.into_iter().collect();
            prop_assert_eq!(a.difference(b) & b, SquareSet::EMPTY);
        }
    }
}

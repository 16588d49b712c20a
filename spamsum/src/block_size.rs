// SPDX-License-Identifier: GPL-2.0-or-later

//! Block size utilities.
//!
//! A spamsum digest is only meaningful at the granularity (the *block
//! size*) it was produced with.  Two signatures are comparable if and only
//! if their block sizes are equal or related by exactly one factor of two.
//!
//! Block sizes are unsigned 64-bit integers and all arithmetic uses
//! unsigned semantics.  Doubling a block size near the top of the range
//! can overflow; such a doubling is *detected* (the relation is simply not
//! "near") rather than wrapped into a false match.

/// The minimum block size of a spamsum signature.
pub const MIN: u64 = 3;

/// An enumeration representing the relation between two block sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSizeRelation {
    /// Two block sizes are not comparable.
    ///
    /// This is a normal result, not an error: signatures produced at
    /// unrelated granularities are legitimately unrelated and score zero.
    Far,
    /// Two block sizes are equal.
    NearEq,
    /// The left hand side is exactly half of the right hand side.
    NearLt,
    /// The right hand side is exactly half of the left hand side.
    NearGt,
}

impl BlockSizeRelation {
    /// Checks whether the relation is "near" (in other words, both block
    /// sizes are comparable).
    #[inline]
    pub fn is_near(&self) -> bool {
        !matches!(self, BlockSizeRelation::Far)
    }
}

/// Checks whether two block sizes are equal.
#[inline(always)]
pub fn is_near_eq(lhs: u64, rhs: u64) -> bool {
    lhs == rhs
}

/// Checks whether `lhs` doubled equals `rhs` (without overflow).
#[inline(always)]
pub fn is_near_lt(lhs: u64, rhs: u64) -> bool {
    lhs.checked_mul(2) == Some(rhs)
}

/// Checks whether `rhs` doubled equals `lhs` (without overflow).
#[inline(always)]
pub fn is_near_gt(lhs: u64, rhs: u64) -> bool {
    rhs.checked_mul(2) == Some(lhs)
}

/// Checks whether two block sizes are comparable.
#[inline]
pub fn is_near(lhs: u64, rhs: u64) -> bool {
    compare_sizes(lhs, rhs).is_near()
}

/// Compares two block sizes and returns their relation.
///
/// The equality test runs first so that a pair of equal block sizes is
/// always [`NearEq`](BlockSizeRelation::NearEq), even in degenerate cases
/// (e.g. both zero, where the "doubled" relations would also hold).
///
/// # Example
///
/// ```
/// use spamsum::BlockSizeRelation;
/// use spamsum::block_size;
///
/// assert_eq!(block_size::compare_sizes(3, 3), BlockSizeRelation::NearEq);
/// assert_eq!(block_size::compare_sizes(3, 6), BlockSizeRelation::NearLt);
/// assert_eq!(block_size::compare_sizes(6, 3), BlockSizeRelation::NearGt);
/// assert_eq!(block_size::compare_sizes(3, 12), BlockSizeRelation::Far);
/// // Doubling that would overflow is not a relation.
/// assert_eq!(block_size::compare_sizes(1 << 63, u64::MAX), BlockSizeRelation::Far);
/// ```
pub fn compare_sizes(lhs: u64, rhs: u64) -> BlockSizeRelation {
    if is_near_eq(lhs, rhs) {
        BlockSizeRelation::NearEq
    } else if is_near_lt(lhs, rhs) {
        BlockSizeRelation::NearLt
    } else if is_near_gt(lhs, rhs) {
        BlockSizeRelation::NearGt
    } else {
        BlockSizeRelation::Far
    }
}

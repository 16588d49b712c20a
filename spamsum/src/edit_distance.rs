// SPDX-License-Identifier: GPL-2.0-or-later

//! Weighted edit distance between two digests.

use alloc::vec;
use alloc::vec::Vec;

/// The cost of deleting a byte from the first string.
pub const COST_DELETE: u32 = 1;

/// The cost of inserting a byte into the first string.
pub const COST_INSERT: u32 = 1;

/// The cost of replacing a byte of the first string.
///
/// Note that this is twice the deletion/insertion cost.  This weighting is
/// a part of the spamsum scoring definition and must not be changed for
/// compatible scores.
pub const COST_REPLACE: u32 = 2;

/// Computes the weighted edit distance between two byte strings.
///
/// This is the minimum total cost to transform `s1` into `s2` using
/// single-byte deletions (cost [`COST_DELETE`]), insertions
/// ([`COST_INSERT`]) and replacements ([`COST_REPLACE`]).
///
/// The comparator only feeds digests up to 64 bytes into this function
/// (enforced by the caller, not here), so the two DP rows it allocates
/// stay small and the worst case cost is bounded.
///
/// # Example
///
/// ```
/// use spamsum::edit_distance;
///
/// assert_eq!(edit_distance(b"", b"abc"), 3);
/// assert_eq!(edit_distance(b"spamsun", b"spamsum"), 2); // one replacement
/// assert_eq!(edit_distance(b"hello", b"world"), 8);
/// // The raw distance is symmetric.
/// assert_eq!(edit_distance(b"world", b"hello"), 8);
/// ```
pub fn edit_distance(s1: &[u8], s2: &[u8]) -> u32 {
    // Two rolling rows bound the working memory to O(len(s2)).
    let mut row: Vec<u32> = (0..=s2.len()).map(|j| (j as u32) * COST_INSERT).collect();
    let mut next: Vec<u32> = vec![0u32; s2.len() + 1];
    for (i, &ch1) in s1.iter().enumerate() {
        next[0] = ((i + 1) as u32) * COST_DELETE;
        for (j, &ch2) in s2.iter().enumerate() {
            let cost_delete = row[j + 1] + COST_DELETE;
            let cost_insert = next[j] + COST_INSERT;
            let cost_replace = row[j] + if ch1 == ch2 { 0 } else { COST_REPLACE };
            next[j + 1] = u32::min(u32::min(cost_delete, cost_insert), cost_replace);
        }
        core::mem::swap(&mut row, &mut next);
    }
    row[s2.len()]
}

mod tests;

// SPDX-License-Identifier: GPL-2.0-or-later

//! Similarity scoring and the signature comparison engine.

use crate::block_size::{self, BlockSizeRelation};
use crate::common_substring::has_common_substring;
use crate::edit_distance::edit_distance;
use crate::rolling_hash::ROLLING_WINDOW;
use crate::signature::{digest, Signature};

mod tests;

/// The lower bound (inclusive) of the block size in which the score
/// capping is no longer required.
///
/// Digests generated at small block sizes carry less information content
/// per character, so raw edit distance-based scores computed from them are
/// capped to avoid inflated confidence (see [`score_strings()`]).  At this
/// block size and above, the cap is always at least 100 for any digest
/// pair long enough to pass the common substring filter, so capping
/// becomes a no-op and is skipped.
///
/// The value is `ceil(99 / 7) * 3 = 45`, computed with integer arithmetic
/// the same way the reference implementation does.
pub const SCORE_CAP_BORDER: u64 =
    (99 + ROLLING_WINDOW as u64) / ROLLING_WINDOW as u64 * block_size::MIN;

/// Scores the similarity of two digests at a given block size.
///
/// The result is in `0..=100`, `100` meaning identical digests and `0`
/// unrelated ones.  In order:
///
/// 1.  A digest longer than [`digest::MAX_LEN`] is not a genuine signature
///     fragment; the score is 0.
/// 2.  If the two digests do not share a
///     [common substring](has_common_substring()) of at least
///     [`ROLLING_WINDOW`](crate::ROLLING_WINDOW) bytes, the score is 0
///     regardless of their edit distance.
/// 3.  Otherwise the [weighted edit distance](edit_distance()) is scaled
///     by the combined digest length, inverted onto the 0 to 100 range and
///     (for block sizes below [`SCORE_CAP_BORDER`]) capped at
///     `block_size / 3 * min(len1, len2)`.
///
/// # Examples
///
/// ```
/// use spamsum::score_strings;
///
/// // Identical digests, block size beyond the capping border.
/// assert_eq!(score_strings(b"abcdefg", b"abcdefg", 45), 100);
/// // The same digests at the minimum block size: capped to 3 / 3 * 7.
/// assert_eq!(score_strings(b"abcdefg", b"abcdefg", 3), 7);
/// // No 7-byte common substring: unrelated, however close the lengths.
/// assert_eq!(score_strings(b"abcdefg", b"tuvwxyz", 45), 0);
/// ```
pub fn score_strings(s1: &[u8], s2: &[u8], block_size: u64) -> u32 {
    if s1.len() > digest::MAX_LEN || s2.len() > digest::MAX_LEN {
        return 0;
    }
    // This also rejects digests shorter than the rolling window, so the
    // division below never sees a zero combined length.
    if !has_common_substring(s1, s2) {
        return 0;
    }
    let raw = edit_distance(s1, s2) as u64;
    // Scale the edit distance by the combined digest length onto a 0..=64
    // scale, then invert it to a 0 to 100 score (familiar to humans).
    let scaled = raw * digest::MAX_LEN as u64 / (s1.len() + s2.len()) as u64;
    let mut score = 100 - 100 * scaled / digest::MAX_LEN as u64;
    // Small block sizes carry less information content per digest
    // character; cap the score so they cannot report high confidence.
    if block_size < SCORE_CAP_BORDER {
        let cap = block_size / block_size::MIN * u64::min(s1.len() as u64, s2.len() as u64);
        score = u64::min(score, cap);
    }
    score as u32
}

impl Signature {
    /// Compares two signatures and returns the similarity score
    /// (`0..=100`).
    ///
    /// The score is a heuristic similarity measure, not a metric distance,
    /// and it has no side effects on either input.
    ///
    /// Signatures whose block sizes are neither equal nor related by
    /// exactly one factor of two are legitimately unrelated and score `0`
    /// (this is a normal result, not an error).  If the block sizes are
    /// exactly equal and either raw digest pair matches exactly, the score
    /// is `100` without any scoring work; this short circuit runs before
    /// run-elimination by definition, so it sees the digests as they were
    /// constructed.
    ///
    /// Otherwise both signatures are [normalized](Self::normalize()) and
    /// the digest pairs selected by the block size relation are
    /// [scored](score_strings()):
    ///
    /// *   equal block sizes: both aligned digest pairs, taking the
    ///     maximum of the two scores;
    /// *   one factor of two apart: the single pair of digests that were
    ///     produced at the same granularity.
    ///
    /// # Examples
    ///
    /// ```
    /// use spamsum::Signature;
    ///
    /// let sig: Signature = "3:hello:world".parse().unwrap();
    /// // Reflexivity: the exact-match short circuit.
    /// assert_eq!(sig.compare(&sig), 100);
    ///
    /// // Block sizes 3 and 6 are comparable (one factor of two), but
    /// // these digests are too short to share a 7-byte substring.
    /// let lhs: Signature = "3:abc:def".parse().unwrap();
    /// let rhs: Signature = "6:xyz:uvw".parse().unwrap();
    /// assert_eq!(lhs.compare(&rhs), 0);
    ///
    /// // A single replaced character in a 16-byte digest.
    /// let lhs: Signature = "48:abcdefghijklmnop:iii".parse().unwrap();
    /// let rhs: Signature = "48:abcdefghijklmnoq:jjj".parse().unwrap();
    /// assert_eq!(lhs.compare(&rhs), 94);
    /// ```
    pub fn compare(&self, other: &Signature) -> u32 {
        let relation = block_size::compare_sizes(self.block_size(), other.block_size());
        // Not comparable: a normal zero, not an error.
        if !relation.is_near() {
            return 0;
        }
        // Exact-match short circuit on the *raw* digests.  This must run
        // before normalization and only applies on an exact block size
        // match.
        if relation == BlockSizeRelation::NearEq
            && (self.digest_1() == other.digest_1() || self.digest_2() == other.digest_2())
        {
            return 100;
        }
        let lhs = self.normalize();
        let rhs = other.normalize();
        match relation {
            BlockSizeRelation::NearEq => {
                // If doubling the block size would overflow, the digest-2
                // pair is scored at the base block size instead; capping
                // is irrelevant that far above the border either way.
                let doubled = lhs
                    .block_size()
                    .checked_mul(2)
                    .unwrap_or(lhs.block_size());
                u32::max(
                    score_strings(lhs.digest_1(), rhs.digest_1(), lhs.block_size()),
                    score_strings(lhs.digest_2(), rhs.digest_2(), doubled),
                )
            }
            BlockSizeRelation::NearLt => {
                score_strings(lhs.digest_2(), rhs.digest_1(), rhs.block_size())
            }
            BlockSizeRelation::NearGt => {
                score_strings(lhs.digest_1(), rhs.digest_2(), lhs.block_size())
            }
            // Handled above; no other relation reports comparable.
            BlockSizeRelation::Far => 0,
        }
    }
}

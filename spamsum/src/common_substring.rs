// SPDX-License-Identifier: GPL-2.0-or-later

//! Common substring detection between two digests.

use alloc::vec::Vec;

use crate::rolling_hash::{RollingHash, ROLLING_WINDOW};

/// Checks whether two byte strings have a common substring of the length
/// [`ROLLING_WINDOW`] or longer.
///
/// This is a cheap rejection test run before the costlier edit
/// distance-based scoring: if two digests do not even share a 7-byte
/// substring, they are not similar in any meaningful sense and the score
/// is defined to be zero.
///
/// The scan records the rolling hash value at every position of `s1`, then
/// drives a second rolling hash over `s2`.  Only positions with a full
/// window (index 6 or later on both sides) are candidates.  Because
/// distinct windows can produce equal rolling hash values, every candidate
/// is confirmed with a byte-exact comparison of the two trailing 7-byte
/// windows before the function returns [`true`].
///
/// Strings shorter than [`ROLLING_WINDOW`] bytes can never yield a match.
/// This is defined behavior, not an error: callers must treat "too short"
/// digests as never similar through this filter.
///
/// # Example
///
/// ```
/// use spamsum::has_common_substring;
///
/// assert!(has_common_substring(b"0123456789", b"abc0123456xyz"));
/// // No common 7-byte substring (even though the strings are equal up
/// // to 6 bytes).
/// assert!(!has_common_substring(b"012345xxxxxxx", b"012345yyyyyyy"));
/// // Too short to ever match.
/// assert!(!has_common_substring(b"abcdef", b"abcdef"));
/// ```
pub fn has_common_substring(s1: &[u8], s2: &[u8]) -> bool {
    if s1.len() < ROLLING_WINDOW || s2.len() < ROLLING_WINDOW {
        return false;
    }
    // Rolling hash value at every position of s1.  Values at positions
    // before the window fills (index < 6) are recorded to keep indexing
    // simple but are never used as candidates below.
    let mut hashes: Vec<u64> = Vec::with_capacity(s1.len());
    let mut hash = RollingHash::new();
    for &ch in s1.iter() {
        hash.update_by_byte(ch);
        hashes.push(hash.value());
    }
    let mut hash = RollingHash::new();
    for (i, &ch) in s2.iter().enumerate() {
        hash.update_by_byte(ch);
        if i < ROLLING_WINDOW - 1 {
            continue;
        }
        let value = hash.value();
        for j in (ROLLING_WINDOW - 1)..s1.len() {
            if hashes[j] != value {
                continue;
            }
            // Candidate hit; rule out a rolling hash collision by
            // comparing the trailing windows byte-by-byte.
            if s1[j + 1 - ROLLING_WINDOW..=j] == s2[i + 1 - ROLLING_WINDOW..=i] {
                return true;
            }
        }
    }
    false
}

// SPDX-License-Identifier: MIT

//! Tests: [`crate::edit_distance`].

#![cfg(test)]

use itertools::Itertools;

use super::{edit_distance, COST_DELETE, COST_INSERT, COST_REPLACE};

const SAMPLES: &[&[u8]] = &[
    b"",
    b"a",
    b"b",
    b"ab",
    b"ba",
    b"abc",
    b"abd",
    b"aabbcc",
    b"abcdefg",
    b"gfedcba",
    b"hello",
    b"world",
    b"spamsum",
    b"spamsumspamsum",
];

#[test]
fn costs() {
    // The cost constants are part of the scoring definition.
    assert_eq!(COST_DELETE, 1);
    assert_eq!(COST_INSERT, 1);
    assert_eq!(COST_REPLACE, 2);
}

#[test]
fn identity_and_empty() {
    for &s in SAMPLES.iter() {
        assert_eq!(edit_distance(s, s), 0, "failed on s={:?}", s);
        assert_eq!(edit_distance(b"", s), s.len() as u32, "failed on s={:?}", s);
        assert_eq!(edit_distance(s, b""), s.len() as u32, "failed on s={:?}", s);
    }
}

#[test]
fn symmetry_and_bounds() {
    for (&s1, &s2) in SAMPLES.iter().cartesian_product(SAMPLES.iter()) {
        let dist = edit_distance(s1, s2);
        // The raw distance is symmetric.
        assert_eq!(
            dist,
            edit_distance(s2, s1),
            "failed on s1={:?}, s2={:?}",
            s1,
            s2
        );
        // Bounds: at least the length difference, at most delete
        // everything and insert everything.
        let len1 = s1.len() as u32;
        let len2 = s2.len() as u32;
        assert!(dist >= u32::abs_diff(len1, len2), "failed on s1={:?}, s2={:?}", s1, s2);
        assert!(dist <= len1 + len2, "failed on s1={:?}, s2={:?}", s1, s2);
        // Parity: replacements cost 2, so the distance has the same
        // parity as the length difference.
        assert_eq!(
            dist % 2,
            u32::abs_diff(len1, len2) % 2,
            "failed on s1={:?}, s2={:?}",
            s1,
            s2
        );
    }
}

#[test]
fn single_edits() {
    assert_eq!(edit_distance(b"abc", b"ab"), 1); // one deletion
    assert_eq!(edit_distance(b"ab", b"abc"), 1); // one insertion
    assert_eq!(edit_distance(b"abc", b"abd"), 2); // one replacement
}

#[test]
fn known_distances() {
    // With replace = delete + insert, the distance equals
    // len1 + len2 - 2 * LCS(s1, s2).
    assert_eq!(edit_distance(b"hello", b"world"), 8); // LCS = 1
    assert_eq!(edit_distance(b"kitten", b"sitting"), 5); // LCS = "ittn"
    assert_eq!(edit_distance(b"abcdefg", b"gfedcba"), 12); // LCS = 1
}

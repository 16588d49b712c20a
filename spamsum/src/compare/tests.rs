// SPDX-License-Identifier: MIT

//! Tests: [`crate::compare`].

#![cfg(test)]

use alloc::string::String;
use alloc::vec::Vec;

use itertools::Itertools;

use crate::block_size;
use crate::signature::{digest, Signature};

use super::{score_strings, SCORE_CAP_BORDER};

/// A small corpus of well-formed signatures with assorted block sizes.
fn sample_signatures() -> Vec<Signature> {
    [
        "3::",
        "3:hello:world",
        "3:abcdefghijklmnop:qrstuvwx",
        "6:abcdefghijklmnop:qrstuvwx",
        "12:abcdefgh:ijklmnop",
        "48:abcdefghijklmnop:ponmlkjihgfedcba",
        "96:abcdefghijklmnop:ponmlkjihgfedcba",
        "18446744073709551615:abcdefghijklmnop:x",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn score_cap_border_value() {
    // ceil(99 / 7) * 3, computed with integer arithmetic.
    assert_eq!(SCORE_CAP_BORDER, 45);
}

#[test]
fn score_strings_identical() {
    // Identical digests, block size at/beyond the capping border.
    assert_eq!(score_strings(b"abcdefg", b"abcdefg", SCORE_CAP_BORDER), 100);
    assert_eq!(score_strings(b"abcdefg", b"abcdefg", u64::MAX), 100);
    // Just below the border, the cap still bites: 44 / 3 * 7 = 98.
    assert_eq!(score_strings(b"abcdefg", b"abcdefg", SCORE_CAP_BORDER - 1), 98);
    // At the minimum block size: 3 / 3 * 7 = 7.
    assert_eq!(score_strings(b"abcdefg", b"abcdefg", block_size::MIN), 7);
}

#[test]
fn score_strings_rejects_long_digests() {
    // One byte over the well-formed bound: not a genuine signature
    // fragment, even though the strings are nearly identical.
    let mut s1 = Vec::new();
    for i in 0..(digest::MAX_LEN + 1) {
        s1.push(if i % 2 == 0 { b'a' } else { b'b' });
    }
    let mut s2 = s1.clone();
    *s2.last_mut().unwrap() = b'z';
    assert_eq!(score_strings(&s1, &s2, 48), 0);
    assert_eq!(score_strings(&s2, &s1, 48), 0);
    // Trimmed back to the bound, the same pair scores high.
    assert!(score_strings(&s1[..digest::MAX_LEN], &s2[..digest::MAX_LEN], 48) > 90);
}

#[test]
fn score_strings_gated_by_common_substring() {
    // No shared 7-byte substring: zero even though the edit distance is
    // small relative to the lengths.
    assert_eq!(score_strings(b"abcdefghijklm", b"nopqrstuvwxyz", 48), 0);
    // Too short to ever pass the filter, identical or not.
    assert_eq!(score_strings(b"abcdef", b"abcdef", 48), 0);
    assert_eq!(score_strings(b"", b"", 48), 0);
}

#[test]
fn score_strings_monotonicity() {
    // Holding the lengths fixed, a larger edit distance never produces a
    // larger score.  Mutate a growing number of tail bytes (the shared
    // prefix keeps the common substring filter passing).
    const BASE: &[u8] = b"abcdefghijklmnop";
    const REPLACEMENT: &[u8] = b"01234567";
    let mut prev_score = u32::MAX;
    for k in 0..=REPLACEMENT.len() {
        let mut mutated = BASE.to_vec();
        for i in 0..k {
            mutated[BASE.len() - 1 - i] = REPLACEMENT[i];
        }
        let score = score_strings(BASE, &mutated, 48);
        if k == 0 {
            assert_eq!(score, 100);
        }
        assert!(
            score <= prev_score,
            "failed on k={}: score={} prev={}",
            k,
            score,
            prev_score
        );
        prev_score = score;
    }
}

#[test]
fn compare_reflexivity() {
    // The exact-match short circuit reports a perfect match for any
    // signature compared with itself, well-formed or not.
    for sig in sample_signatures().iter() {
        assert_eq!(sig.compare(sig), 100, "failed on sig={}", sig);
    }
}

#[test]
fn compare_far_block_sizes() {
    for (sig1, sig2) in sample_signatures().iter().cartesian_product(sample_signatures().iter()) {
        if block_size::is_near(sig1.block_size(), sig2.block_size()) {
            continue;
        }
        assert_eq!(sig1.compare(sig2), 0, "failed on sig1={}, sig2={}", sig1, sig2);
        assert_eq!(sig2.compare(sig1), 0, "failed on sig1={}, sig2={}", sig1, sig2);
    }
}

#[test]
fn compare_exact_match_short_circuit() {
    // Either raw digest pair matching (at equal block sizes) is a perfect
    // match, even when the other pair differs.
    let lhs: Signature = "3:samedigest1:aaa".parse().unwrap();
    let rhs: Signature = "3:samedigest1:bbb".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 100);
    let lhs: Signature = "3:aaa:samedigest2".parse().unwrap();
    let rhs: Signature = "3:bbb:samedigest2".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 100);
    // This includes raw digests that only run-elimination would tell
    // apart, and pairs of empty digests.
    let lhs: Signature = "3:aaaaaaaa:x".parse().unwrap();
    let rhs: Signature = "3:aaaaaaaa:y".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 100);
    let lhs: Signature = "3:abcdefgh:".parse().unwrap();
    let rhs: Signature = "3:ijklmnop:".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 100);
    // The short circuit requires *exactly* equal block sizes.
    let lhs: Signature = "3:samedigest1:aaa".parse().unwrap();
    let rhs: Signature = "6:samedigest1:bbb".parse().unwrap();
    assert_ne!(lhs.compare(&rhs), 100);
}

#[test]
fn compare_normalizes_before_scoring() {
    // Raw digests differ only in run length, so they normalize to equal
    // strings; the digest-2 pairs differ to dodge the short circuit.
    let lhs: Signature = "48:abcdefgaaaa:iiiiijjj".parse().unwrap();
    let rhs: Signature = "48:abcdefgaaaaa:jjjjjiii".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 100);
}

#[test]
fn compare_near_block_sizes() {
    // Block sizes 3 and 6: the digests generated at block size 6 are
    // lhs.digest_2 and rhs.digest_1; both are "abcdefghijk" (length 11),
    // so the raw score is 100, capped to 6 / 3 * 11 = 22.
    let lhs: Signature = "3:abc:abcdefghijk".parse().unwrap();
    let rhs: Signature = "6:abcdefghijk:zzzzzzzz".parse().unwrap();
    assert_eq!(lhs.compare(&rhs), 22);
    // The mirrored comparison selects the mirrored pairing.
    assert_eq!(rhs.compare(&lhs), 22);
}

#[test]
fn compare_equal_block_sizes_takes_the_maximum() {
    // Digest-1 pairs are unrelated (score 0); digest-2 pairs are
    // identical 8-byte strings scored at block size 96 (uncapped): 100.
    let lhs: Signature = "48:abcdefgh:sharedpart".parse().unwrap();
    let rhs: Signature = "48:stuvwxyz:sharedpartZ".parse().unwrap();
    let score = lhs.compare(&rhs);
    assert!(score > 90, "score={}", score);
    // And it is at least as high as either individual pairing.
    let d1 = score_strings(b"abcdefgh", b"stuvwxyz", 48);
    let d2 = score_strings(b"sharedpart", b"sharedpartZ", 96);
    assert_eq!(score, u32::max(d1, d2));
    assert_eq!(d1, 0);
}

#[test]
fn compare_block_size_doubling_overflow() {
    // Equal block sizes at the top of the range: doubling for the
    // digest-2 pair overflows and the pair is scored at the base block
    // size instead.  Far above the capping border either way.
    let text_lhs = format_sig(u64::MAX, b"abcdefghijklmnop", b"iiijjj");
    let text_rhs = format_sig(u64::MAX, b"abcdefghijklmnoq", b"jjjiii");
    let lhs: Signature = text_lhs.parse().unwrap();
    let rhs: Signature = text_rhs.parse().unwrap();
    // One replacement in a 16-byte digest pair: 94 (see Signature::compare docs).
    assert_eq!(lhs.compare(&rhs), 94);
}

/// Formats a signature string from raw parts.
fn format_sig(block_size: u64, digest1: &[u8], digest2: &[u8]) -> String {
    use core::fmt::Write;
    let mut out = String::new();
    write!(out, "{}:", block_size).unwrap();
    for &ch in digest1 {
        out.push(ch as char);
    }
    out.push(':');
    for &ch in digest2 {
        out.push(ch as char);
    }
    out
}

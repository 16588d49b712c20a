// SPDX-License-Identifier: GPL-2.0-or-later

//! Comparison of spamsum (ssdeep-compatible) fuzzy hash signatures.
//!
//! A *fuzzy hash* (here, a spamsum signature) is a compact digest designed
//! so that similar inputs produce similar, not necessarily identical,
//! digests.  A signature is a triple of a block size and two digests
//! (generated at the block size and at twice the block size) written in
//! the canonical text form `"<blockSize>:<digestA>:<digestB>"`.
//!
//! This crate consumes two such signatures, generated elsewhere, and
//! estimates the similarity of the original contents as an integer score
//! in `0..=100` (`100` means a perfect match).  Signature *generation*
//! from raw content is out of scope.
//!
//! The comparison pipeline is a fixed set of pure functions: a
//! [rolling hash](RollingHash)-based
//! [common substring prefilter](has_common_substring()) cheaply rejects
//! unrelated digests, a bounded [weighted edit distance](edit_distance())
//! measures the surviving pairs, and the score normalization and
//! block size-dependent capping rules of
//! [`score_strings()`] turn the distance into the final score.
//! [`Signature::compare()`] reconciles two signatures whose block sizes
//! may differ by a factor of two and combines the per-digest scores.
//!
//! Everything is stateless across calls; [`Signature`] values are
//! immutable and comparisons may run fully in parallel.
//!
//! # Examples
//!
//! ```
//! use spamsum::Signature;
//!
//! let sig: Signature = "3:hello:world".parse().unwrap();
//! assert_eq!(sig.compare(&sig), 100);
//!
//! // The string-level convenience form.
//! assert_eq!(
//!     spamsum::compare("3:hello:world", "3:hello:world").unwrap(),
//!     Some(100)
//! );
//! ```

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// This crate needs no unsafe code.
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]

extern crate alloc;

pub mod block_size;
mod common_substring;
mod compare;
mod compare_easy;
mod edit_distance;
mod macros;
mod rolling_hash;
mod signature;
mod test_utils;

pub use block_size::BlockSizeRelation;
pub use common_substring::has_common_substring;
pub use compare::{score_strings, SCORE_CAP_BORDER};
pub use compare_easy::{compare, ParseErrorEither, ParseErrorSide};
pub use edit_distance::edit_distance;
pub use rolling_hash::{RollingHash, ROLLING_WINDOW};
pub use signature::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind, ParseErrorOrigin};
pub use signature::{digest, eliminate_sequences, Signature};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // We expect that usize is at least 16 bits in width.
    const_assert!(usize::BITS >= 16);

    // A digest must be able to contain a full rolling window, or the
    // common substring filter could never pass for well-formed signatures.
    const_assert!(ROLLING_WINDOW <= digest::MAX_LEN);

    // At the capping border, the cap is already at least 100 for any
    // digest pair long enough to pass the common substring filter
    // (min length ROLLING_WINDOW), so skipping the cap there is sound.
    const_assert!(SCORE_CAP_BORDER / block_size::MIN * (ROLLING_WINDOW as u64) >= 100);
}

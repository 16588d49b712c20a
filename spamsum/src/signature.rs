// SPDX-License-Identifier: GPL-2.0-or-later

//! The spamsum signature value type.

use alloc::vec::Vec;

use crate::block_size;
use crate::signature::parser_state::{ParseError, ParseErrorKind, ParseErrorOrigin};

pub mod parser_state;

/// Constants related to the digest parts of a signature.
pub mod digest {
    /// The maximum length of a digest in a well-formed signature.
    ///
    /// Signatures holding a longer digest are still legal values; they are
    /// merely treated as "not comparable" during scoring (score zero).
    pub const MAX_LEN: usize = 64;

    /// The maximum length of a run of identical bytes kept by
    /// [normalization](crate::Signature::normalize()).
    pub const MAX_SEQUENCE_SIZE: usize = 3;
}

/// A spamsum signature: a block size and two digests.
///
/// A signature is an immutable value parsed from (or serialized to) the
/// canonical text form `"<blockSize>:<digestA>:<digestB>"`.  `digest1` is
/// the digest computed at `block_size` and `digest2` the one computed at
/// `block_size * 2`; two signatures whose block sizes are equal or related
/// by exactly one factor of two can be [compared](Self::compare()).
///
/// There is no mutating API: transforms such as
/// [`normalize()`](Self::normalize()) return a new value and each
/// comparison is a pure function of its two inputs.
///
/// # Example
///
/// ```
/// use spamsum::Signature;
///
/// let sig: Signature = "3:hello:world".parse().unwrap();
/// assert_eq!(sig.block_size(), 3);
/// assert_eq!(sig.digest_1(), b"hello");
/// assert_eq!(sig.digest_2(), b"world");
/// assert_eq!(sig.to_string(), "3:hello:world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The block size (the granularity [`digest1`](Self::digest1) was
    /// produced at).  Immutable after construction.
    block_size: u64,

    /// The digest computed at [`block_size`](Self::block_size).
    digest1: Vec<u8>,

    /// The digest computed at twice [`block_size`](Self::block_size).
    digest2: Vec<u8>,

    /// Whether run-elimination has already been applied to both digests.
    ///
    /// Tracking this makes [`normalize()`](Self::normalize()) idempotent
    /// without rescanning the digests.
    normalized: bool,
}

/// Collapses runs of identical bytes down to at most
/// [`digest::MAX_SEQUENCE_SIZE`] occurrences.
///
/// A long run of a repeated byte carries little discriminating signal for
/// similarity, so runs of 4 or more identical consecutive bytes are
/// shortened before scoring.  The scan keeps a byte unless it is identical
/// to each of the three previously kept bytes; everything not part of an
/// over-long run is preserved.
///
/// Contract: the output length equals the count of retained bytes and the
/// first up-to-3 bytes of the input are always retained.  Applying this
/// function twice is equivalent to applying it once.
///
/// # Example
///
/// ```
/// use spamsum::eliminate_sequences;
///
/// assert_eq!(eliminate_sequences(b"aaaabbbbcc"), b"aaabbbcc");
/// assert_eq!(eliminate_sequences(b"abc"), b"abc");
/// ```
pub fn eliminate_sequences(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut seq: usize = 0;
    let mut prev: Option<u8> = None;
    for &curr in buf.iter() {
        if Some(curr) == prev {
            seq += 1;
            if seq >= digest::MAX_SEQUENCE_SIZE {
                seq = digest::MAX_SEQUENCE_SIZE;
                continue;
            }
        } else {
            seq = 0;
            prev = Some(curr);
        }
        out.push(curr);
    }
    out
}

/// Parses the block size part of the signature from given bytes.
///
/// `i` (output) is updated to the index just past the `':'` terminator to
/// continue parsing if it succeeds.
///
/// Unlike a strict ssdeep parser, any unsigned 64-bit value is accepted
/// (including zero and values written with leading zeros); only overflow
/// and non-digit characters are rejected.
fn parse_block_size_from_bytes(bytes: &[u8], i: &mut usize) -> Result<u64, ParseError> {
    let mut block_size = 0u64;
    let mut is_block_size_in_range = true;
    let mut j = 0;
    for ch in bytes {
        match *ch {
            b'0'..=b'9' => {
                // Update block size (but check arithmetic overflow)
                if is_block_size_in_range {
                    match block_size
                        .checked_mul(10)
                        .and_then(|x| x.checked_add((*ch - b'0') as u64))
                    {
                        Some(bs) => block_size = bs,
                        None => is_block_size_in_range = false,
                    }
                }
            }
            b':' => {
                // End of block size: the field must not be empty.
                if j == 0 {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeIsEmpty,
                        ParseErrorOrigin::BlockSize,
                        0,
                    ));
                }
                if !is_block_size_in_range {
                    return Err(ParseError(
                        ParseErrorKind::BlockSizeIsTooLarge,
                        ParseErrorOrigin::BlockSize,
                        0,
                    ));
                }
                *i = j + 1;
                return Ok(block_size);
            }
            _ => {
                return Err(ParseError(
                    ParseErrorKind::UnexpectedCharacter,
                    ParseErrorOrigin::BlockSize,
                    j,
                ));
            }
        }
        j += 1;
    }
    Err(ParseError(
        ParseErrorKind::UnexpectedEndOfString,
        ParseErrorOrigin::BlockSize,
        j,
    ))
}

impl Signature {
    /// Creates a new [`Signature`] with empty contents.
    ///
    /// This is equivalent to the signature string `3::`.
    pub fn new() -> Self {
        Signature {
            block_size: block_size::MIN,
            digest1: Vec::new(),
            digest2: Vec::new(),
            normalized: true,
        }
    }

    /// Creates a new [`Signature`] from its raw parts, without any
    /// text parsing.
    ///
    /// `normalized` records whether run-elimination has already been
    /// applied to both digests; pass [`false`] unless the digests are
    /// known to be free of runs longer than
    /// [`digest::MAX_SEQUENCE_SIZE`] bytes.
    pub fn new_from_internals(
        block_size: u64,
        digest1: Vec<u8>,
        digest2: Vec<u8>,
        normalized: bool,
    ) -> Self {
        Signature {
            block_size,
            digest1,
            digest2,
            normalized,
        }
    }

    /// Parses a [`Signature`] from the canonical text form
    /// `"<blockSize>:<digestA>:<digestB>"` given as bytes.
    ///
    /// Exactly two `':'` separators are required.  The digest characters
    /// are opaque bytes (no escaping); the block size must parse as an
    /// unsigned 64-bit decimal integer.  A malformed input never silently
    /// succeeds with partial data.
    ///
    /// The result is considered raw ([`is_normalized()`](Self::is_normalized())
    /// is [`false`]) even if the digests happen to contain no long runs.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let mut i: usize = 0;
        let block_size = parse_block_size_from_bytes(bytes, &mut i)?;
        let rest = &bytes[i..];
        let sep = match rest.iter().position(|&ch| ch == b':') {
            Some(sep) => sep,
            None => {
                return Err(ParseError(
                    ParseErrorKind::UnexpectedEndOfString,
                    ParseErrorOrigin::Digest1,
                    bytes.len(),
                ));
            }
        };
        let digest2 = &rest[sep + 1..];
        if let Some(pos) = digest2.iter().position(|&ch| ch == b':') {
            // A third separator would leave trailing data with no meaning.
            return Err(ParseError(
                ParseErrorKind::UnexpectedCharacter,
                ParseErrorOrigin::Digest2,
                i + sep + 1 + pos,
            ));
        }
        Ok(Signature {
            block_size,
            digest1: rest[..sep].to_vec(),
            digest2: digest2.to_vec(),
            normalized: false,
        })
    }

    /// The block size of the signature.
    #[inline(always)]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// The digest computed at the [block size](Self::block_size()).
    #[inline(always)]
    pub fn digest_1(&self) -> &[u8] {
        &self.digest1
    }

    /// The digest computed at twice the [block size](Self::block_size()).
    #[inline(always)]
    pub fn digest_2(&self) -> &[u8] {
        &self.digest2
    }

    /// Whether run-elimination has already been applied to both digests.
    #[inline(always)]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Checks whether both digests are within the
    /// [well-formed length bound](digest::MAX_LEN).
    ///
    /// Signatures holding longer digests are legal values but score zero
    /// against everything (including themselves, unless the exact-match
    /// short circuit applies).
    pub fn is_well_formed(&self) -> bool {
        self.digest1.len() <= digest::MAX_LEN && self.digest2.len() <= digest::MAX_LEN
    }

    /// Returns the normalized form of the signature, with
    /// [run-elimination](eliminate_sequences()) applied to both digests.
    ///
    /// This transform is idempotent: normalizing an already-normalized
    /// signature returns an equal value without rescanning the digests.
    ///
    /// # Example
    ///
    /// ```
    /// use spamsum::Signature;
    ///
    /// let sig: Signature = "3:aaaaaa:bcbcbc".parse().unwrap();
    /// let norm = sig.normalize();
    /// assert_eq!(norm.to_string(), "3:aaa:bcbcbc");
    /// assert_eq!(norm.normalize(), norm);
    /// ```
    pub fn normalize(&self) -> Self {
        if self.normalized {
            return self.clone();
        }
        Signature {
            block_size: self.block_size,
            digest1: eliminate_sequences(&self.digest1),
            digest2: eliminate_sequences(&self.digest2),
            normalized: true,
        }
    }
}

impl core::str::FromStr for Signature {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::from_bytes(s.as_bytes())
    }
}

impl core::fmt::Display for Signature {
    /// Serializes the signature to the canonical text form.
    ///
    /// Digest bytes are written one character per byte (the same
    /// byte-to-char mapping the parser reverses), so parsing the output
    /// yields back an equal raw signature.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;
        write!(f, "{}:", self.block_size)?;
        for &ch in self.digest1.iter() {
            f.write_char(ch as char)?;
        }
        f.write_char(':')?;
        for &ch in self.digest2.iter() {
            f.write_char(ch as char)?;
        }
        Ok(())
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::new()
    }
}

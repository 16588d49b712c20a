// SPDX-License-Identifier: MIT

//! Parse error types for the canonical signature text form.

use crate::macros::impl_error;

/// An enumeration representing a cause of a
/// [`Signature`](crate::Signature) parse error.
///
/// Every variant denotes a malformed signature.  Parsing never silently
/// succeeds with partial data: the first offending byte fails the whole
/// parse.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Block size: the field is empty.
    BlockSizeIsEmpty,
    /// Block size: the value does not fit in an unsigned 64-bit integer.
    BlockSizeIsTooLarge,
    /// Any: an unexpected character is encountered.
    UnexpectedCharacter,
    /// Any: an unexpected end-of-string is encountered
    /// (a `':'` separator is missing).
    UnexpectedEndOfString,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorKind::BlockSizeIsEmpty => "block size field is empty",
            ParseErrorKind::BlockSizeIsTooLarge => "block size is too large",
            ParseErrorKind::UnexpectedCharacter => "an unexpected character is encountered",
            ParseErrorKind::UnexpectedEndOfString => "end-of-string is not expected",
        })
    }
}

/// A part which (possibly) caused a
/// [`Signature`](crate::Signature) parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorOrigin {
    /// Block size.
    BlockSize,
    /// Digest 1 (the digest at the block size).
    Digest1,
    /// Digest 2 (the digest at twice the block size).
    Digest2,
}

impl core::fmt::Display for ParseErrorOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ParseErrorOrigin::BlockSize => "block size",
            ParseErrorOrigin::Digest1 => "digest 1",
            ParseErrorOrigin::Digest2 => "digest 2",
        })
    }
}

/// The error type for parse operations of [`Signature`](crate::Signature)
/// (a malformed signature string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError(
    pub(crate) ParseErrorKind,
    pub(crate) ParseErrorOrigin,
    pub(crate) usize,
);

/// The trait implementing a [`Signature`](crate::Signature) parse error.
pub trait ParseErrorInfo {
    /// Returns the cause of the error.
    fn kind(&self) -> ParseErrorKind;
    /// Returns the part which (possibly) caused the error.
    fn origin(&self) -> ParseErrorOrigin;
    /// Returns the offset which (possibly) caused the error.
    ///
    /// Note that this offset may not be exact but may be usable as a hint.
    fn offset(&self) -> usize;
}

impl ParseErrorInfo for ParseError {
    fn kind(&self) -> ParseErrorKind {
        self.0
    }
    fn origin(&self) -> ParseErrorOrigin {
        self.1
    }
    fn offset(&self) -> usize {
        self.2
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "error occurred while parsing a signature ({1}, at byte offset {2}): {0}",
            self.kind(),
            self.origin(),
            self.offset()
        )
    }
}

impl_error!(ParseError {});

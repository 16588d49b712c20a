// SPDX-License-Identifier: MIT

//! Easy comparison of two signature strings.

use crate::signature::parser_state::{ParseError, ParseErrorInfo, ParseErrorKind, ParseErrorOrigin};
use crate::signature::Signature;


/// The operand (side) which caused a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorSide {
    /// The left hand side.
    Left,
    /// The right hand side.
    Right,
}

/// The error type representing a parse error for one of the operands
/// specified to the [`compare()`] function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseErrorEither(ParseErrorSide, ParseError);

impl ParseErrorEither {
    /// Returns which operand caused a parse error.
    pub fn side(&self) -> ParseErrorSide {
        self.0
    }
}

impl ParseErrorInfo for ParseErrorEither {
    fn kind(&self) -> ParseErrorKind {
        self.1.kind()
    }
    fn origin(&self) -> ParseErrorOrigin {
        self.1.origin()
    }
    fn offset(&self) -> usize {
        self.1.offset()
    }
}

impl core::fmt::Display for ParseErrorEither {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "error occurred while parsing signature {3} ({1}, at byte offset {2}): {0}",
            self.kind(),
            self.origin(),
            self.offset(),
            match self.side() {
                ParseErrorSide::Left => 1,
                ParseErrorSide::Right => 2,
            }
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseErrorEither {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.1)
    }
}
#[cfg(not(feature = "std"))]
impl core::error::Error for ParseErrorEither {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.1)
    }
}

/// Compares two signature strings.
///
/// If a parse error occurs, [`Err`] containing
/// [a parse error](ParseErrorEither) is returned.  If either input string
/// is empty, the comparison cannot be evaluated and [`Ok`] containing
/// [`None`] is returned; this is distinguished from a legitimate zero
/// score on one hand and from a malformed signature on the other.
/// Otherwise, [`Ok`] containing the similarity score (`0..=100`) is
/// returned.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     spamsum::compare("3:hello:world", "3:hello:world").unwrap(),
///     Some(100)
/// );
/// // Unrelated block sizes: a normal zero score.
/// assert_eq!(
///     spamsum::compare("3:hello:world", "24:hello:world").unwrap(),
///     Some(0)
/// );
/// // An empty operand cannot be evaluated at all.
/// assert_eq!(spamsum::compare("", "3:abc:def").unwrap(), None);
/// // A malformed operand is an error.
/// assert!(spamsum::compare("notanumber:abc:def", "3:abc:def").is_err());
/// ```
pub fn compare(lhs: &str, rhs: &str) -> Result<Option<u32>, ParseErrorEither> {
    if lhs.is_empty() || rhs.is_empty() {
        return Ok(None);
    }
    let lhs: Signature = match str::parse(lhs) {
        Ok(value) => value,
        Err(err) => {
            return Err(ParseErrorEither(ParseErrorSide::Left, err));
        }
    };
    let rhs: Signature = match str::parse(rhs) {
        Ok(value) => value,
        Err(err) => {
            return Err(ParseErrorEither(ParseErrorSide::Right, err));
        }
    };
    Ok(Some(lhs.compare(&rhs)))
}

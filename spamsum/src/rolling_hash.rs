// SPDX-License-Identifier: GPL-2.0-or-later

//! A 64-bit rolling hash over a fixed 7-byte window.

use core::ops::AddAssign;

/// See [`RollingHash::WINDOW_SIZE`].
pub const ROLLING_WINDOW: usize = 7;

/// Hasher which computes a variant of the rolling hash used by spamsum.
///
/// The comparator uses this hash only as a cheap prefilter: it lets
/// [`has_common_substring()`](crate::has_common_substring()) scan a digest
/// in time proportional to its length instead of re-hashing a full window
/// at every position.  The hash value itself is never part of the
/// similarity metric.
///
/// All three components are 64 bits wide and wrap on overflow.  In
/// particular, the shift-xor component (`h3`) is *not* masked down to a
/// smaller width; the accumulator's natural 64-bit width is the defined
/// width, and it must match across implementations for identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    /// Current rolling window index (always less than
    /// [`WINDOW_SIZE`](Self::WINDOW_SIZE)).
    index: usize,

    /// Hash component 1.
    ///
    /// This is the sum of the last [`WINDOW_SIZE`](Self::WINDOW_SIZE) bytes.
    h1: u64,

    /// Hash component 2.
    ///
    /// This is the sum of the last [`WINDOW_SIZE`](Self::WINDOW_SIZE) bytes
    /// where the more recent byte has a higher weight (the latest byte has
    /// a weight of [`WINDOW_SIZE`](Self::WINDOW_SIZE) and the last (fading)
    /// byte has a weight of 1).
    h2: u64,

    /// Hash component 3.
    ///
    /// Each time a byte is processed, this value is left-shifted by
    /// [`H3_LSHIFT`](Self::H3_LSHIFT) and xor-ed with the byte value.
    h3: u64,

    /// The last [`WINDOW_SIZE`](Self::WINDOW_SIZE) bytes of the
    /// processed data.
    window: [u8; ROLLING_WINDOW],
}

impl RollingHash {
    /// The window size of the rolling hash.
    ///
    /// This is 7 bytes in spamsum.
    pub const WINDOW_SIZE: usize = ROLLING_WINDOW;

    /// Left shift width of [`h3`](Self::h3) for each byte.
    ///
    /// This is 5 in spamsum.
    pub(crate) const H3_LSHIFT: usize = 5;

    /// Creates a new [`RollingHash`] with the initial value.
    pub fn new() -> Self {
        RollingHash {
            index: 0,
            h1: 0,
            h2: 0,
            h3: 0,
            window: [0; ROLLING_WINDOW],
        }
    }

    /// Updates the hash value by processing a byte.
    ///
    /// The first six bytes produce values from a not-yet-full window.
    /// Such values are still emitted by [`value()`](Self::value()) but the
    /// common substring filter never treats them as match candidates.
    #[inline]
    pub fn update_by_byte(&mut self, ch: u8) -> &mut Self {
        debug_assert!(self.index < Self::WINDOW_SIZE);
        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self
            .h2
            .wrapping_add(u64::wrapping_mul(ROLLING_WINDOW as u64, ch as u64));
        self.h1 = self.h1.wrapping_add(ch as u64);
        self.h1 = self.h1.wrapping_sub(self.window[self.index] as u64);
        self.window[self.index] = ch;
        self.index += 1;
        if self.index == ROLLING_WINDOW {
            self.index = 0;
        }
        self.h3 <<= Self::H3_LSHIFT;
        self.h3 ^= ch as u64;
        self
    }

    /// Updates the hash value by processing an iterator of [`u8`].
    pub fn update_by_iter(&mut self, iter: impl Iterator<Item = u8>) -> &mut Self {
        for ch in iter {
            self.update_by_byte(ch);
        }
        self
    }

    /// Updates the hash value by processing a slice of [`u8`].
    pub fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &ch in buf.iter() {
            self.update_by_byte(ch);
        }
        self
    }

    /// Returns the current hash value.
    ///
    /// Note that there's no "finalization" on this rolling hash.
    /// You can even continue updating after reading the hash value.
    ///
    /// This is the wrapping sum of its three internal states
    /// (`h1`, `h2` and `h3`).
    ///
    /// # Example
    ///
    /// ```
    /// use spamsum::RollingHash;
    ///
    /// let mut hash = RollingHash::new();
    /// assert_eq!(hash.value(), 0);
    /// // One byte `b'A'` (65): h1 = 65, h2 = 7 * 65, h3 = 65.
    /// hash.update_by_byte(b'A');
    /// assert_eq!(hash.value(), 585);
    /// ```
    #[inline]
    pub fn value(&self) -> u64 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}

impl AddAssign<&[u8]> for RollingHash {
    /// Updates the hash value by processing a slice of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8]) {
        self.update(buffer);
    }
}

impl<const N: usize> AddAssign<&[u8; N]> for RollingHash {
    /// Updates the hash value by processing an array of [`u8`].
    #[inline(always)]
    fn add_assign(&mut self, buffer: &[u8; N]) {
        self.update(&buffer[..]);
    }
}

impl AddAssign<u8> for RollingHash {
    /// Updates the hash value by processing a byte.
    #[inline(always)]
    fn add_assign(&mut self, byte: u8) {
        self.update_by_byte(byte);
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: CC0-1.0

//! Internal macros.

/// Implements the [`Error`](std::error::Error) trait, either in `std`
/// or `core`.
///
/// With the `std` feature enabled, the trait is implemented through `std`
/// (the historically compatible path).  Without it, the `core` counterpart
/// is used so that error types stay useful on `no_std`.
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                impl std::error::Error for $type {
                    $($tokens)*
                }
            }
            else {
                impl core::error::Error for $type {
                    $($tokens)*
                }
            }
        }
    }
}
pub(crate) use impl_error_impl as impl_error;

// SPDX-License-Identifier: CC0-1.0

//! Utilities only used on tests.

#![cfg(test)]

/// Test recommended [`Default`] implementation.
#[doc(alias = "test_recommended_default")]
macro_rules! test_recommended_default_impl {
    ($ty: ty) => {{
        let value1 = <$ty>::new();
        let value2 = <$ty>::default();
        assert_eq!(value1, value2);
    }};
}

pub(crate) use test_recommended_default_impl as test_recommended_default;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// A backend that produces cryptographically secure random bytes.
///
/// Implementations must either fill the whole destination or return an
/// error. There is no partial success: on `Err` the caller treats every byte
/// of `dest` as garbage.
///
/// Custom implementations installed through
/// [`set_custom_algorithm`](crate::set_custom_algorithm) are not validated;
/// they are responsible for their own output quality.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the underlying primitive fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Identifier used in diagnostics.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Adapts a plain filling closure into a [`RandomSource`].
///
/// The closure has no error channel, so it always counts as successful. If it
/// can fail, it must stop the process itself rather than return.
///
/// ```rust
/// use randombytes::{FnSource, RandomSource};
///
/// let source = FnSource::new(|dest: &mut [u8]| dest.fill(0xA5));
/// let mut buf = [0u8; 4];
/// source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
/// assert_eq!(buf, [0xA5; 4]);
/// ```
pub struct FnSource<F> {
    fill: F,
}

impl<F> FnSource<F>
where
    F: Fn(&mut [u8]) + Send + Sync,
{
    /// Wraps `fill`.
    pub fn new(fill: F) -> Self {
        Self { fill }
    }
}

impl<F> RandomSource for FnSource<F>
where
    F: Fn(&mut [u8]) + Send + Sync,
{
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (self.fill)(dest);
        Ok(())
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sources backed by a cryptographic library's DRBG.
//!
//! The library is a black box reached through [`Drbg`]: a readiness check, a
//! reseed request and a one-shot generate. [`DrbgSource`] adds the request
//! size check and the bounded reseed loop on top.

use crate::error::EntropyError;
use crate::traits::RandomSource;

/// Maximum reseed requests issued while the DRBG reports it is not ready.
pub const DRBG_RESEED_RETRIES: usize = 3;

/// Primitive operations of a library DRBG.
pub trait Drbg: Send + Sync {
    /// Identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Largest request accepted by a single [`generate`](Drbg::generate).
    fn max_request(&self) -> usize;

    /// Whether the DRBG is seeded and able to produce output.
    fn is_ready(&self) -> bool;

    /// Asks the library to gather fresh entropy.
    fn reseed(&self);

    /// Fills `dest` in one call. Returns `false` on failure.
    ///
    /// `dest.len()` never exceeds [`max_request`](Drbg::max_request).
    fn generate(&self, dest: &mut [u8]) -> bool;
}

/// [`RandomSource`] over a library DRBG.
#[derive(Debug, Default)]
pub struct DrbgSource<D> {
    drbg: D,
}

impl<D: Drbg> DrbgSource<D> {
    /// Wraps `drbg`.
    pub fn new(drbg: D) -> Self {
        Self { drbg }
    }

    /// The wrapped DRBG.
    pub fn drbg(&self) -> &D {
        &self.drbg
    }

    /// Checks readiness, reseeding up to [`DRBG_RESEED_RETRIES`] times.
    ///
    /// Returns whether the DRBG ended up ready.
    fn ensure_ready(&self) -> bool {
        if self.drbg.is_ready() {
            return true;
        }

        for _ in 0..DRBG_RESEED_RETRIES {
            self.drbg.reseed();
            if self.drbg.is_ready() {
                return true;
            }
        }

        false
    }
}

impl<D: Drbg> RandomSource for DrbgSource<D> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let max = self.drbg.max_request();
        if dest.len() > max {
            return Err(EntropyError::RequestTooLarge {
                requested: dest.len(),
                max,
            });
        }

        if !self.ensure_ready() {
            // The library makes the final call on whether it can still serve.
            log::warn!(
                "randombytes: {} DRBG not ready after {DRBG_RESEED_RETRIES} reseeds",
                self.drbg.name()
            );
        }

        if !self.drbg.generate(dest) {
            return Err(EntropyError::DrbgFailure(self.drbg.name()));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        self.drbg.name()
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime selection of the active random source.

use std::sync::{Arc, PoisonError, RwLock};

use zeroize::Zeroize;

use crate::algorithm::Algorithm;
use crate::error::{AlgorithmError, EntropyError};
use crate::fatal::fail_stop;
use crate::system::SystemSource;
use crate::traits::RandomSource;

/// Holds the currently bound [`RandomSource`] and forwards requests to it.
///
/// # Thread safety
///
/// Rebinding and generation may run concurrently from any thread. The lock
/// only guards the pointer swap: a generation call clones the current binding
/// and releases the lock before touching the backend, so it uses either the
/// old or the new source in full, never a mix, and a slow backend never
/// blocks reconfiguration.
pub struct Dispatcher {
    current: RwLock<Arc<dyn RandomSource>>,
}

impl Dispatcher {
    /// Binds the build-time default algorithm
    /// (see [`Algorithm::build_default`]).
    pub fn new() -> Self {
        let source = Algorithm::build_default()
            .source()
            .unwrap_or_else(|_| Arc::new(SystemSource));

        Self::from_arc(source)
    }

    /// Binds `source` from the start.
    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        Self::from_arc(Arc::new(source))
    }

    fn from_arc(source: Arc<dyn RandomSource>) -> Self {
        Self {
            current: RwLock::new(source),
        }
    }

    /// Binds the built-in algorithm called `name` (case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`AlgorithmError::Unknown`] if `name` matches no algorithm
    /// - [`AlgorithmError::Unavailable`] if it is not compiled into this build
    ///
    /// On error the previous binding stays active.
    pub fn switch_algorithm(&self, name: &str) -> Result<Algorithm, AlgorithmError> {
        let resolved = name
            .parse::<Algorithm>()
            .and_then(|alg| alg.source().map(|source| (alg, source)));

        match resolved {
            Ok((alg, source)) => {
                self.bind(source);
                Ok(alg)
            }
            Err(e) => {
                log::warn!("randombytes: switch to {name:?} rejected: {e}");
                Err(e)
            }
        }
    }

    /// Binds a caller-supplied source.
    ///
    /// The source is not validated; it is trusted to fill every buffer or
    /// fail.
    pub fn set_custom_algorithm(&self, source: impl RandomSource + 'static) {
        self.bind(Arc::new(source));
    }

    fn bind(&self, source: Arc<dyn RandomSource>) {
        log::debug!("randombytes: bound source {}", source.name());
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = source;
    }

    fn current(&self) -> Arc<dyn RandomSource> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Name of the bound source.
    pub fn current_name(&self) -> &'static str {
        self.current().name()
    }

    /// Fills `dest` from the bound source.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`EntropyError`]. `dest` is zeroized before the
    /// error is returned, so no partial output survives.
    pub fn try_generate(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let source = self.current();

        source.fill_bytes(dest).inspect_err(|_| dest.zeroize())
    }

    /// Fills `dest` from the bound source, or terminates the process.
    ///
    /// Returning at all means `dest` is completely filled. Any backend failure
    /// is reported on stderr and the process exits with
    /// [`EXIT_FAILURE`](crate::EXIT_FAILURE).
    pub fn generate(&self, dest: &mut [u8]) {
        if let Err(e) = self.try_generate(dest) {
            fail_stop(&e);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

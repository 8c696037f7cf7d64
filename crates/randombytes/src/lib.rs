// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randombytes
//!
//! One call for cryptographically secure random bytes, with the backend chosen
//! at runtime.
//!
//! ## Backends
//!
//! - [`SystemSource`]: operating system entropy (see [`system`])
//! - `OpenSslSource`: OpenSSL's DRBG, with the `openssl` feature; it is the
//!   default binding when compiled in
//! - any [`RandomSource`] installed with [`set_custom_algorithm`]
//!
//! ## Fail-stop
//!
//! [`generate`] has no error return. It either fills the whole buffer or
//! terminates the process with [`EXIT_FAILURE`]; a caller never continues with
//! partial or degraded output. [`try_generate`] reports the failure instead
//! and zeroizes the buffer first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use randombytes::{generate, switch_algorithm};
//!
//! switch_algorithm("System").expect("Failed to switch_algorithm(..)");
//!
//! let mut seed = [0u8; 48];
//! generate(&mut seed);
//! ```
//!
//! ## Thread safety
//!
//! The process-wide binding is swapped under a lock held only for the pointer
//! exchange. Reconfiguring while other threads generate is supported; each
//! call uses exactly one source from start to end. Code that wants a private
//! binding creates its own [`Dispatcher`].
//!
//! ## Cargo features
//!
//! - `openssl`: compile the OpenSSL backend and bind it by default
//! - `embedded`: build without platform entropy; a custom source is required
//! - `test_utils`: export the mocks in `test_utils`

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod algorithm;
mod dispatch;
mod error;
mod fatal;
mod support;
mod traits;

pub mod drbg;
#[cfg(feature = "openssl")]
pub mod libcrypto;
pub mod system;

use std::sync::LazyLock;

pub use algorithm::{ALG_OPENSSL, ALG_SYSTEM, Algorithm};
pub use dispatch::Dispatcher;
pub use drbg::{Drbg, DrbgSource};
pub use error::{AlgorithmError, EntropyError};
pub use fatal::{EXIT_FAILURE, fail_stop};
#[cfg(feature = "openssl")]
pub use libcrypto::{LibCrypto, OpenSslSource};
pub use system::SystemSource;
pub use traits::{FnSource, RandomSource};

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;

static GLOBAL: LazyLock<Dispatcher> = LazyLock::new(Dispatcher::new);

/// Fills `dest` with random bytes from the process-wide source.
///
/// Never returns with `dest` unfilled: on backend failure the process exits
/// with [`EXIT_FAILURE`].
pub fn generate(dest: &mut [u8]) {
    GLOBAL.generate(dest);
}

/// Fills `dest` with random bytes from the process-wide source.
///
/// # Errors
///
/// Returns the backend's [`EntropyError`]; `dest` is zeroized in that case.
pub fn try_generate(dest: &mut [u8]) -> Result<(), EntropyError> {
    GLOBAL.try_generate(dest)
}

/// Binds the process-wide source to the built-in algorithm `name`
/// (case-insensitive, e.g. `"system"`, `"OpenSSL"`).
///
/// # Errors
///
/// Returns [`AlgorithmError`] for unknown names and for backends not compiled
/// into this build. The previous binding stays active.
pub fn switch_algorithm(name: &str) -> Result<Algorithm, AlgorithmError> {
    GLOBAL.switch_algorithm(name)
}

/// Binds the process-wide source to `source`, without validation.
pub fn set_custom_algorithm(source: impl RandomSource + 'static) {
    GLOBAL.set_custom_algorithm(source);
}

/// Name of the process-wide source.
pub fn current_algorithm_name() -> &'static str {
    GLOBAL.current_name()
}

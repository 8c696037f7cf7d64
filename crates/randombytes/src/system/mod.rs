// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Platform entropy sources.
//!
//! Exactly one variant backs [`SystemSource`], chosen at build time:
//!
//! - **`embedded` feature**: no platform entropy; every request fails
//! - **Windows**: CryptoAPI (`CryptAcquireContextW` + `CryptGenRandom`)
//! - **macOS/iOS**: `arc4random_buf`
//! - **Linux (glibc), FreeBSD, OpenBSD, DragonFly, illumos**: `getentropy`
//!   in chunks of [`GETENTROPY_MAX_CHUNK`] bytes
//! - **Other Unix**: read from `/dev/urandom`
//! - **Anything else** (WASI, wasm, UEFI): the `getrandom` crate
//!
//! The chunking and file-reading building blocks are compiled everywhere so
//! they can be driven with test primitives.

pub mod dev_urandom;
pub mod getentropy;
pub(crate) mod portable;

#[cfg(all(not(feature = "embedded"), any(target_os = "macos", target_os = "ios")))]
mod arc4random;
#[cfg(all(not(feature = "embedded"), windows))]
mod crypto_api;
#[cfg(feature = "embedded")]
mod embedded;

pub use dev_urandom::{DEV_URANDOM, DevRandomFile};
pub use getentropy::GETENTROPY_MAX_CHUNK;

use crate::algorithm::ALG_SYSTEM;
use crate::error::EntropyError;
use crate::traits::RandomSource;

#[cfg(feature = "embedded")]
use embedded::fill as platform_fill;

#[cfg(all(not(feature = "embedded"), windows))]
use crypto_api::fill as platform_fill;

#[cfg(all(not(feature = "embedded"), any(target_os = "macos", target_os = "ios")))]
use arc4random::fill as platform_fill;

#[cfg(all(
    not(feature = "embedded"),
    any(
        all(target_os = "linux", target_env = "gnu"),
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "illumos"
    )
))]
use getentropy::fill as platform_fill;

#[cfg(all(not(feature = "embedded"), not(unix), not(windows)))]
use portable::fill as platform_fill;

#[cfg(all(
    not(feature = "embedded"),
    unix,
    not(any(target_os = "macos", target_os = "ios")),
    not(any(
        all(target_os = "linux", target_env = "gnu"),
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "illumos"
    ))
))]
fn platform_fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    DevRandomFile::default().fill_bytes(dest)
}

/// Operating system entropy source.
///
/// Holds no state; the platform handle (file, provider context) lives only
/// for the duration of one [`fill_bytes`](RandomSource::fill_bytes) call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSource;

impl RandomSource for SystemSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        platform_fill(dest)
    }

    fn name(&self) -> &'static str {
        ALG_SYSTEM
    }
}

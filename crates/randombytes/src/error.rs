// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for randombytes.

use std::io;

use thiserror::Error;

use crate::algorithm::Algorithm;

/// Errors raised while retrieving random bytes from a backend.
///
/// Any of these means the destination buffer holds no usable output.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The random device file could not be opened.
    #[error("failed to open random device: {0}")]
    Open(#[source] io::Error),

    /// Reading from the random device failed.
    #[error("failed to read random device: {0}")]
    Read(#[source] io::Error),

    /// The random device returned fewer bytes than requested.
    #[error("short read from random device: expected {expected} bytes, got {read}")]
    ShortRead {
        /// Requested length.
        expected: usize,
        /// Bytes actually read.
        read: usize,
    },

    /// `CryptAcquireContext` failed (Win32 error code).
    #[error("CryptAcquireContext failed with error {0}")]
    AcquireContext(u32),

    /// `CryptGenRandom` failed (Win32 error code).
    #[error("CryptGenRandom failed with error {0}")]
    GenRandom(u32),

    /// An entropy syscall reported failure.
    #[error("entropy syscall failed (errno {errno})")]
    Syscall {
        /// OS error number.
        errno: i32,
    },

    /// The request cannot be expressed in the backend's length type.
    #[error("requested {requested} bytes, backend accepts at most {max}")]
    RequestTooLarge {
        /// Requested length.
        requested: usize,
        /// Largest length the backend accepts.
        max: usize,
    },

    /// The library DRBG returned no randomness.
    #[error("no {0} randomness retrieved, DRBG available?")]
    DrbgFailure(&'static str),

    /// No platform entropy is compiled into this build.
    #[error(
        "system randomness is not available in an embedded build; \
         call set_custom_algorithm() to install a source for your system"
    )]
    Unavailable,
}

/// Errors returned when selecting an algorithm by name.
///
/// The previously bound source stays active whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The name matches no known algorithm.
    #[error("unknown random algorithm {0:?}")]
    Unknown(String),

    /// The algorithm is known but not compiled into this build.
    #[error("random algorithm {0} is not available in this build")]
    Unavailable(Algorithm),
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm identifiers accepted by [`switch_algorithm`](crate::switch_algorithm).

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use crate::error::AlgorithmError;
use crate::system::SystemSource;
use crate::traits::RandomSource;

/// Identifier of the platform entropy source.
pub const ALG_SYSTEM: &str = "system";

/// Identifier of the OpenSSL DRBG source.
pub const ALG_OPENSSL: &str = "openssl";

/// A built-in random source, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Operating system entropy.
    System,
    /// OpenSSL `RAND_bytes` (requires the `openssl` feature).
    OpenSsl,
}

impl Algorithm {
    /// Every known identifier, whether compiled in or not.
    pub const ALL: [Algorithm; 2] = [Algorithm::System, Algorithm::OpenSsl];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::System => ALG_SYSTEM,
            Algorithm::OpenSsl => ALG_OPENSSL,
        }
    }

    /// Whether the backend is compiled into this build.
    pub fn is_available(self) -> bool {
        match self {
            Algorithm::System => true,
            Algorithm::OpenSsl => cfg!(feature = "openssl"),
        }
    }

    /// Instantiates the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Unavailable`] if the backend is not compiled in.
    pub fn source(self) -> Result<Arc<dyn RandomSource>, AlgorithmError> {
        match self {
            Algorithm::System => Ok(Arc::new(SystemSource)),
            #[cfg(feature = "openssl")]
            Algorithm::OpenSsl => Ok(Arc::new(crate::libcrypto::OpenSslSource::default())),
            #[cfg(not(feature = "openssl"))]
            Algorithm::OpenSsl => Err(AlgorithmError::Unavailable(self)),
        }
    }

    /// The algorithm bound when nothing else was selected: OpenSSL if
    /// compiled in, otherwise the system source.
    pub fn build_default() -> Self {
        if cfg!(feature = "openssl") {
            Algorithm::OpenSsl
        } else {
            Algorithm::System
        }
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    /// Case-insensitive (ASCII) lookup.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AlgorithmError::Unknown(name.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

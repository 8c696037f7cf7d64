// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random device file backend.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::algorithm::ALG_SYSTEM;
use crate::error::EntropyError;
use crate::traits::RandomSource;

/// Default random device.
pub const DEV_URANDOM: &str = "/dev/urandom";

/// Reads random bytes from a device file.
///
/// The file is opened and closed on every call; nothing is kept open between
/// requests.
#[derive(Debug, Clone)]
pub struct DevRandomFile {
    path: PathBuf,
}

impl DevRandomFile {
    /// Reads from `path` instead of [`DEV_URANDOM`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Device path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DevRandomFile {
    fn default() -> Self {
        Self::new(DEV_URANDOM)
    }
}

impl RandomSource for DevRandomFile {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut file = File::open(&self.path).map_err(EntropyError::Open)?;
        fill_from_reader(&mut file, dest)
    }

    fn name(&self) -> &'static str {
        ALG_SYSTEM
    }
}

/// Reads exactly `dest.len()` bytes from `reader`.
///
/// End of stream before `dest` is full is reported as
/// [`EntropyError::ShortRead`]; interrupted reads are retried.
pub fn fill_from_reader<R: Read + ?Sized>(
    reader: &mut R,
    dest: &mut [u8],
) -> Result<(), EntropyError> {
    let mut read = 0;

    while read < dest.len() {
        match reader.read(&mut dest[read..]) {
            Ok(0) => {
                return Err(EntropyError::ShortRead {
                    expected: dest.len(),
                    read,
                });
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(EntropyError::Read(e)),
        }
    }

    Ok(())
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getentropy(3)` backend.

use crate::error::EntropyError;

/// Largest request `getentropy` accepts in one call.
pub const GETENTROPY_MAX_CHUNK: usize = 256;

/// Fills `dest` through a primitive limited to [`GETENTROPY_MAX_CHUNK`] bytes
/// per call.
///
/// `chunk_fn` sees consecutive, non-overlapping chunks in order; every chunk
/// is full-size except the last, which holds the remainder. The first failing
/// chunk aborts the whole request.
///
/// ```rust
/// use randombytes::system::getentropy::fill_chunked;
///
/// let mut sizes = Vec::new();
/// let mut buf = [0u8; 600];
/// fill_chunked(&mut buf, |chunk| {
///     sizes.push(chunk.len());
///     Ok(())
/// })
/// .expect("Failed to fill_chunked(..)");
///
/// assert_eq!(sizes, [256, 256, 88]);
/// ```
pub fn fill_chunked<F>(dest: &mut [u8], mut chunk_fn: F) -> Result<(), EntropyError>
where
    F: FnMut(&mut [u8]) -> Result<(), EntropyError>,
{
    for chunk in dest.chunks_mut(GETENTROPY_MAX_CHUNK) {
        chunk_fn(chunk)?;
    }

    Ok(())
}

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
pub(super) fn fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    fill_chunked(dest, getentropy_chunk)
}

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
fn getentropy_chunk(chunk: &mut [u8]) -> Result<(), EntropyError> {
    debug_assert!(chunk.len() <= GETENTROPY_MAX_CHUNK);

    let ret = unsafe { libc::getentropy(chunk.as_mut_ptr().cast::<libc::c_void>(), chunk.len()) };

    if ret == 0 {
        Ok(())
    } else {
        let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        Err(EntropyError::Syscall { errno })
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getrandom` backend for targets without a native variant (WASI, wasm, UEFI, ...).

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;

#[cfg_attr(any(unix, windows, feature = "embedded"), allow(dead_code))]
pub(crate) fn fill_with(
    fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
    dest: &mut [u8],
) -> Result<(), EntropyError> {
    fill_fn(dest).map_err(|e| EntropyError::Syscall {
        errno: e.raw_os_error().unwrap_or(0),
    })
}

#[cfg(all(not(feature = "embedded"), not(unix), not(windows)))]
pub(super) fn fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    fill_with(&getrandom::fill, dest)
}

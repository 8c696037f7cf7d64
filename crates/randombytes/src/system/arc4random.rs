// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// `arc4random_buf` cannot fail and has no length limit.
pub(super) fn fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    unsafe { libc::arc4random_buf(dest.as_mut_ptr().cast::<libc::c_void>(), dest.len()) };

    Ok(())
}

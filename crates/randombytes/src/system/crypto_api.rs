// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Windows CryptoAPI backend.

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::Security::Cryptography::{
    CRYPT_VERIFYCONTEXT, CryptAcquireContextW, CryptGenRandom, CryptReleaseContext, PROV_RSA_FULL,
};

use crate::error::EntropyError;

/// Acquires an ephemeral provider context, generates the whole request in one
/// `CryptGenRandom` call and releases the context.
pub(super) fn fill(dest: &mut [u8]) -> Result<(), EntropyError> {
    // CryptGenRandom takes a DWORD length.
    let len = u32::try_from(dest.len()).map_err(|_| EntropyError::RequestTooLarge {
        requested: dest.len(),
        max: u32::MAX as usize,
    })?;

    let mut provider: usize = 0;
    let acquired = unsafe {
        CryptAcquireContextW(
            &mut provider,
            core::ptr::null(),
            core::ptr::null(),
            PROV_RSA_FULL,
            CRYPT_VERIFYCONTEXT,
        )
    };
    if acquired == 0 {
        return Err(EntropyError::AcquireContext(unsafe { GetLastError() }));
    }

    let generated = unsafe { CryptGenRandom(provider, len, dest.as_mut_ptr()) };
    let gen_error = if generated == 0 {
        unsafe { GetLastError() }
    } else {
        0
    };

    unsafe { CryptReleaseContext(provider, 0) };

    if generated == 0 {
        return Err(EntropyError::GenRandom(gen_error));
    }

    Ok(())
}

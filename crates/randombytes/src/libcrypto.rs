// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! OpenSSL DRBG backend (`openssl` feature).

use core::ffi::c_int;

use crate::algorithm::ALG_OPENSSL;
use crate::drbg::{Drbg, DrbgSource};

unsafe extern "C" {
    // libcrypto itself is linked by openssl-sys.
    fn RAND_poll() -> c_int;
}

/// OpenSSL's process-wide `RAND` DRBG.
///
/// Library initialization is left to `openssl-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibCrypto;

impl Drbg for LibCrypto {
    fn name(&self) -> &'static str {
        ALG_OPENSSL
    }

    fn max_request(&self) -> usize {
        // RAND_bytes takes an int length.
        c_int::MAX as usize
    }

    fn is_ready(&self) -> bool {
        openssl_sys::init();
        unsafe { openssl_sys::RAND_status() == 1 }
    }

    fn reseed(&self) {
        unsafe { RAND_poll() };
    }

    fn generate(&self, dest: &mut [u8]) -> bool {
        openssl::rand::rand_bytes(dest).is_ok()
    }
}

/// OpenSSL-backed [`RandomSource`](crate::RandomSource).
pub type OpenSslSource = DrbgSource<LibCrypto>;

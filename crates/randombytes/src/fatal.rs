// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Exit status used when randomness cannot be produced.
pub const EXIT_FAILURE: i32 = 1;

/// Reports `err` and terminates the process.
///
/// The diagnostic goes to both the logger and stderr: there may be no logger
/// installed, and the process does not get another chance to say anything.
#[cold]
#[inline(never)]
pub fn fail_stop(err: &EntropyError) -> ! {
    log::error!("randombytes: {err}; terminating");
    eprintln!("randombytes: {err}");
    std::process::exit(EXIT_FAILURE)
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod support;
mod traits;

/// Routes `log` output through the test harness (`RUST_LOG=debug`).
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Embedded builds ship without platform entropy. A source must be installed
/// with [`set_custom_algorithm`](crate::set_custom_algorithm).
pub(super) fn fill(_dest: &mut [u8]) -> Result<(), EntropyError> {
    Err(EntropyError::Unavailable)
}

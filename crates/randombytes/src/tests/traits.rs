// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::{FnSource, RandomSource};

#[test]
fn test_fn_source_invokes_closure_with_buffer() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_by_source = Arc::clone(&seen);
    let source = FnSource::new(move |dest: &mut [u8]| {
        seen_by_source.store(dest.len(), Ordering::SeqCst);
        dest.fill(7);
    });

    let mut buf = [0u8; 19];
    source.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(seen.load(Ordering::SeqCst), 19);
    assert_eq!(buf, [7u8; 19]);
}

#[test]
fn test_fn_source_default_name_is_custom() {
    let source = FnSource::new(|_: &mut [u8]| {});
    assert_eq!(source.name(), "custom");
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking random sources and DRBGs.
//!
//! Provides mock implementations with configurable behavior for testing.

mod mock_drbg;
mod mock_random_source;

pub use mock_drbg::{MockDrbg, MockDrbgBehaviour};
pub use mock_random_source::{MockRandomSource, MockRandomSourceBehaviour, RecordedCall};

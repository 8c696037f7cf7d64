// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::drbg::Drbg;

/// Configurable behavior for [`MockDrbg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockDrbgBehaviour {
    /// Ready from the start.
    Ready,
    /// Becomes ready once this many reseeds were requested.
    ReadyAfterReseeds(usize),
    /// Never ready; generate fails.
    NeverReady,
    /// Ready, but generate fails.
    FailAtGenerate,
}

/// Mock library DRBG counting every primitive call.
///
/// Generated output is `0xD5` repeated.
#[derive(Debug)]
pub struct MockDrbg {
    behaviour: MockDrbgBehaviour,
    max_request: usize,
    status_checks: AtomicUsize,
    reseeds: AtomicUsize,
    generates: AtomicUsize,
}

impl MockDrbg {
    /// Byte written by a successful generate.
    pub const OUTPUT: u8 = 0xD5;

    /// Creates a new mock DRBG with the specified behavior.
    pub fn new(behaviour: MockDrbgBehaviour) -> Self {
        Self::with_max_request(behaviour, usize::MAX)
    }

    /// Creates a mock that rejects requests above `max_request`.
    pub fn with_max_request(behaviour: MockDrbgBehaviour, max_request: usize) -> Self {
        Self {
            behaviour,
            max_request,
            status_checks: AtomicUsize::new(0),
            reseeds: AtomicUsize::new(0),
            generates: AtomicUsize::new(0),
        }
    }

    /// Number of readiness checks.
    pub fn status_checks(&self) -> usize {
        self.status_checks.load(Ordering::Relaxed)
    }

    /// Number of reseed requests.
    pub fn reseeds(&self) -> usize {
        self.reseeds.load(Ordering::Relaxed)
    }

    /// Number of generate calls.
    pub fn generates(&self) -> usize {
        self.generates.load(Ordering::Relaxed)
    }

    fn ready(&self) -> bool {
        match self.behaviour {
            MockDrbgBehaviour::Ready | MockDrbgBehaviour::FailAtGenerate => true,
            MockDrbgBehaviour::ReadyAfterReseeds(n) => self.reseeds() >= n,
            MockDrbgBehaviour::NeverReady => false,
        }
    }
}

impl Drbg for MockDrbg {
    fn name(&self) -> &'static str {
        "mock-drbg"
    }

    fn max_request(&self) -> usize {
        self.max_request
    }

    fn is_ready(&self) -> bool {
        self.status_checks.fetch_add(1, Ordering::Relaxed);
        self.ready()
    }

    fn reseed(&self) {
        self.reseeds.fetch_add(1, Ordering::Relaxed);
    }

    fn generate(&self, dest: &mut [u8]) -> bool {
        self.generates.fetch_add(1, Ordering::Relaxed);

        if self.behaviour == MockDrbgBehaviour::FailAtGenerate || !self.ready() {
            return false;
        }

        dest.fill(Self::OUTPUT);
        true
    }
}

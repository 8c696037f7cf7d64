// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::EntropyError;
use crate::traits::RandomSource;

/// Configurable behavior for [`MockRandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRandomSourceBehaviour {
    /// Fill the whole buffer with the mock's tag byte.
    None,
    /// Always fail fill_bytes after writing half the buffer.
    FailAtFillBytes,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
}

/// One `fill_bytes` call seen by [`MockRandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCall {
    /// Address of the destination buffer.
    pub addr: usize,
    /// Length of the destination buffer.
    pub len: usize,
}

#[derive(Debug)]
struct State {
    behaviour: MockRandomSourceBehaviour,
    calls: Vec<RecordedCall>,
}

/// Recording random source for testing.
///
/// Clones share state, so a test can keep one handle while another is bound
/// into a [`Dispatcher`](crate::Dispatcher). Output is the tag byte repeated,
/// which makes the source that served a request identifiable.
#[derive(Debug, Clone)]
pub struct MockRandomSource {
    tag: u8,
    state: Arc<Mutex<State>>,
}

impl MockRandomSource {
    /// Creates a new mock that fills buffers with `tag`.
    pub fn new(tag: u8, behaviour: MockRandomSourceBehaviour) -> Self {
        Self {
            tag,
            state: Arc::new(Mutex::new(State {
                behaviour,
                calls: Vec::new(),
            })),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Byte written on success.
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&self, behaviour: MockRandomSourceBehaviour) {
        self.state().behaviour = behaviour;
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Forgets recorded calls.
    pub fn reset_count(&self) {
        self.state().calls.clear();
    }
}

impl RandomSource for MockRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            addr: dest.as_ptr() as usize,
            len: dest.len(),
        });
        let call = state.calls.len();

        let fail = match state.behaviour {
            MockRandomSourceBehaviour::None => false,
            MockRandomSourceBehaviour::FailAtFillBytes => true,
            MockRandomSourceBehaviour::FailAtNthFillBytes(n) => call == n,
        };

        if fail {
            let half = dest.len() / 2;
            dest[..half].fill(self.tag);
            return Err(EntropyError::Unavailable);
        }

        dest.fill(self.tag);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockRandomSource, MockRandomSourceBehaviour, RecordedCall};
use crate::traits::RandomSource;

#[test]
fn test_mock_random_source_behaviour_none() {
    let mock = MockRandomSource::new(0x3C, MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(buf, [0x3C; 32]);
    assert_eq!(mock.tag(), 0x3C);
}

#[test]
fn test_mock_random_source_behaviour_fail_at_fill_bytes() {
    let mock = MockRandomSource::new(0x3C, MockRandomSourceBehaviour::FailAtFillBytes);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::Unavailable)));
    // Half written, simulating a primitive that dies mid-request
    assert!(buf[..16].iter().all(|byte| *byte == 0x3C));
    assert!(buf[16..].iter().all(|byte| *byte == 0));
}

#[test]
fn test_mock_random_source_behaviour_fail_at_nth_third_call() {
    let mock = MockRandomSource::new(0x3C, MockRandomSourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    // First two calls succeed
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    // Third call fails
    assert!(mock.fill_bytes(&mut buf).is_err());

    // Fourth call succeeds
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_random_source_records_calls() {
    let mock = MockRandomSource::new(0, MockRandomSourceBehaviour::None);
    let mut a = [0u8; 3];
    let mut b = [0u8; 9];

    mock.fill_bytes(&mut a).expect("Failed to fill_bytes(..)");
    mock.fill_bytes(&mut b).expect("Failed to fill_bytes(..)");

    assert_eq!(
        mock.calls(),
        [
            RecordedCall {
                addr: a.as_ptr() as usize,
                len: 3
            },
            RecordedCall {
                addr: b.as_ptr() as usize,
                len: 9
            },
        ]
    );
}

#[test]
fn test_mock_random_source_call_count() {
    let mock = MockRandomSource::new(0, MockRandomSourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert_eq!(mock.call_count(), 0);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 1);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_random_source_clones_share_state() {
    let mock = MockRandomSource::new(0, MockRandomSourceBehaviour::None);
    let clone = mock.clone();
    let mut buf = [0u8; 4];

    clone.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
    assert_eq!(mock.call_count(), 1);

    mock.change_behaviour(MockRandomSourceBehaviour::FailAtFillBytes);
    assert!(clone.fill_bytes(&mut buf).is_err());
}

#[test]
fn test_mock_random_source_change_behaviour() {
    let mock = MockRandomSource::new(0, MockRandomSourceBehaviour::None);
    let mut bytes = [0u8; 32];

    // First works
    assert!(mock.fill_bytes(&mut bytes).is_ok());

    // Change behaviour
    mock.change_behaviour(MockRandomSourceBehaviour::FailAtFillBytes);

    // Now fails
    assert!(mock.fill_bytes(&mut bytes).is_err());

    // Change back
    mock.change_behaviour(MockRandomSourceBehaviour::None);

    // Works again
    assert!(mock.fill_bytes(&mut bytes).is_ok());
}

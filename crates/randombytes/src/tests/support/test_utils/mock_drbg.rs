// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::drbg::Drbg;
use crate::support::test_utils::{MockDrbg, MockDrbgBehaviour};

#[test]
fn test_mock_drbg_ready() {
    let drbg = MockDrbg::new(MockDrbgBehaviour::Ready);
    let mut buf = [0u8; 8];

    assert!(drbg.is_ready());
    assert!(drbg.generate(&mut buf));
    assert_eq!(buf, [MockDrbg::OUTPUT; 8]);
    assert_eq!(drbg.status_checks(), 1);
    assert_eq!(drbg.generates(), 1);
}

#[test]
fn test_mock_drbg_ready_after_reseeds() {
    let drbg = MockDrbg::new(MockDrbgBehaviour::ReadyAfterReseeds(2));

    assert!(!drbg.is_ready());
    drbg.reseed();
    assert!(!drbg.is_ready());
    drbg.reseed();
    assert!(drbg.is_ready());
    assert_eq!(drbg.reseeds(), 2);
}

#[test]
fn test_mock_drbg_never_ready() {
    let drbg = MockDrbg::new(MockDrbgBehaviour::NeverReady);
    let mut buf = [0u8; 8];

    drbg.reseed();
    assert!(!drbg.is_ready());
    assert!(!drbg.generate(&mut buf));
    assert_eq!(buf, [0u8; 8]);
}

#[test]
fn test_mock_drbg_fail_at_generate() {
    let drbg = MockDrbg::new(MockDrbgBehaviour::FailAtGenerate);
    let mut buf = [0u8; 8];

    assert!(drbg.is_ready());
    assert!(!drbg.generate(&mut buf));
}

#[test]
fn test_mock_drbg_max_request() {
    assert_eq!(MockDrbg::new(MockDrbgBehaviour::Ready).max_request(), usize::MAX);
    assert_eq!(
        MockDrbg::with_max_request(MockDrbgBehaviour::Ready, 7).max_request(),
        7
    );
}

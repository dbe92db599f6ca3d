//! Window Buffer Unit Tests.
//!
//! Verifies allocation, image loading, big-endian word access and
//! boundary checks.

use proptest::prelude::*;
use rvss_core::common::error::{AccessKind, LoadError, MemoryError};
use rvss_core::soc::memory::WindowBuffer;

// ══════════════════════════════════════════════════════════
// 1. Allocation and loading
// ══════════════════════════════════════════════════════════

#[test]
fn buffer_initial_zeroed() {
    let buf = WindowBuffer::new(64);
    assert_eq!(buf.len(), 64);
    assert!(buf.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn image_fills_prefix_and_zero_pads() {
    let buf = WindowBuffer::with_image(8, &[1, 2, 3]).unwrap();
    assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0, 0, 0, 0]);
    assert_eq!(buf[2], 3);
}

#[test]
fn oversized_image_is_rejected() {
    let err = WindowBuffer::with_image(4, &[0; 5]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ImageTooLarge {
            bytes: 5,
            capacity: 4
        }
    ));
}

// ══════════════════════════════════════════════════════════
// 2. Word access
// ══════════════════════════════════════════════════════════

#[test]
fn read_is_big_endian() {
    let buf = WindowBuffer::with_image(8, &[0xDE, 0xAD, 0xBE, 0xEF, 0x01]).unwrap();
    assert_eq!(buf.read_u32_be(0, AccessKind::Load).unwrap(), 0xDEAD_BEEF);
    assert_eq!(buf.read_u32_be(1, AccessKind::Load).unwrap(), 0xADBE_EF01);
}

#[test]
fn write_is_big_endian() {
    let mut buf = WindowBuffer::new(8);
    buf.write_u32_be(2, 100).unwrap();
    assert_eq!(buf.as_slice(), &[0, 0, 0, 0, 0, 100, 0, 0]);
}

// ══════════════════════════════════════════════════════════
// 3. Boundary checks
// ══════════════════════════════════════════════════════════

#[test]
fn last_full_word_is_accessible() {
    let mut buf = WindowBuffer::new(1000);
    buf.write_u32_be(996, 0x0102_0304).unwrap();
    assert_eq!(buf.read_u32_be(996, AccessKind::Load).unwrap(), 0x0102_0304);
}

#[test]
fn straddling_word_faults_with_kind() {
    let buf = WindowBuffer::new(1000);
    assert_eq!(
        buf.read_u32_be(997, AccessKind::Fetch),
        Err(MemoryError::OutOfWindow {
            kind: AccessKind::Fetch,
            addr: 997,
            size: 1000
        })
    );
}

#[test]
fn faulting_write_leaves_buffer_untouched() {
    let mut buf = WindowBuffer::new(8);
    let err = buf.write_u32_be(6, u32::MAX).unwrap_err();
    assert!(matches!(
        err,
        MemoryError::OutOfWindow {
            kind: AccessKind::Store,
            ..
        }
    ));
    assert!(buf.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn address_near_u32_max_does_not_wrap() {
    let buf = WindowBuffer::new(1000);
    assert!(buf.read_u32_be(u32::MAX - 1, AccessKind::Load).is_err());
}

proptest! {
    #[test]
    fn write_read_round_trip(addr in 0u32..=996, value in any::<u32>()) {
        let mut buf = WindowBuffer::new(1000);
        buf.write_u32_be(addr, value).unwrap();
        prop_assert_eq!(buf.read_u32_be(addr, AccessKind::Load).unwrap(), value);
    }

    #[test]
    fn out_of_window_always_faults(addr in 997u32..=u32::MAX) {
        let buf = WindowBuffer::new(1000);
        prop_assert!(buf.read_u32_be(addr, AccessKind::Load).is_err());
    }
}

//! # Error Tests
//!
//! Checks that diagnostics carry the offending address, kind and counts.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use rvss_core::common::error::{AccessKind, LoadError, MemoryError, SimError};

#[test]
fn out_of_window_message_names_kind_and_address() {
    let err = MemoryError::OutOfWindow {
        kind: AccessKind::Load,
        addr: 998,
        size: 1000,
    };
    assert_eq!(
        err.to_string(),
        "load at address 0x000003e6 is outside the 1000-byte window"
    );
    assert_eq!(err.addr(), 998);
}

#[test]
fn sim_memory_error_reports_cycle_pc_and_instructions() {
    let err = SimError::Memory {
        cycle: 7,
        pc: 24,
        instructions: 6,
        source: MemoryError::OutOfWindow {
            kind: AccessKind::Store,
            addr: 0x1000,
            size: 1000,
        },
    };
    let msg = err.to_string();
    assert!(msg.contains("cycle 7"), "{msg}");
    assert!(msg.contains("0x00001000"), "{msg}");
    assert!(msg.contains("6 instructions retired"), "{msg}");
    assert!(err.source().is_some());
}

#[test]
fn load_error_is_transparent_inside_sim_error() {
    let load = LoadError::Malformed {
        line: 3,
        content: "0101".to_string(),
    };
    let expected = load.to_string();
    let err = SimError::from(load);
    assert_eq!(err.to_string(), expected);
}

#[test]
fn io_load_error_includes_path() {
    let err = LoadError::Io {
        path: PathBuf::from("missing/imem.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_string().contains("missing/imem.txt"));
}

#[test]
fn access_kind_display() {
    assert_eq!(AccessKind::Fetch.to_string(), "fetch");
    assert_eq!(AccessKind::Load.to_string(), "load");
    assert_eq!(AccessKind::Store.to_string(), "store");
}

#[test]
fn cycle_limit_message() {
    let err = SimError::CycleLimit { limit: 50 };
    assert_eq!(err.to_string(), "machine did not halt within 50 cycles");
}

//! # Fault and Unknown-Opcode Tests

use rvss_core::common::error::{AccessKind, MemoryError, SimError};
use rvss_core::config::{Config, UnknownOpcodePolicy};

use crate::common::builder::instruction::{HALT, addi, lw, sw};
use crate::common::harness::TestContext;

/// An opcode outside the supported subset (`jalr`).
const UNKNOWN: u32 = 0x0000_0067;

fn with_policy(policy: UnknownOpcodePolicy) -> Config {
    let mut config = Config::default();
    config.general.unknown_opcode = policy;
    config
}

#[test]
fn out_of_window_load_reports_address_and_count() {
    let mut ctx = TestContext::new(&[addi(1, 0, 1000), lw(2, 1, 0), HALT]);
    let err = ctx.run_to_halt().unwrap_err();

    match err {
        SimError::Memory {
            cycle,
            pc,
            instructions,
            source,
        } => {
            assert_eq!(cycle, 1);
            assert_eq!(pc, 4);
            assert_eq!(instructions, 1);
            assert_eq!(
                source,
                MemoryError::OutOfWindow {
                    kind: AccessKind::Load,
                    addr: 1000,
                    size: 1000
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn faulting_cycle_commits_nothing() {
    let mut ctx = TestContext::new(&[addi(1, 0, 998), sw(1, 1, 0), HALT]);
    let _ = ctx.step().unwrap();
    assert!(ctx.step().is_err());

    assert_eq!(ctx.cpu.pc(), 4);
    assert_eq!(ctx.cpu.cycle(), 1);
    assert_eq!(ctx.cpu.stats().cycles, 1);
    assert!(ctx.cpu.dmem().snapshot().iter().all(|&b| b == 0));
}

#[test]
fn fetch_past_window_faults() {
    // 250 words of addi fill the window; the 251st fetch is at 1000.
    let program = vec![addi(1, 1, 1); 250];
    let mut ctx = TestContext::new(&program);
    let err = ctx.run_to_halt().unwrap_err();
    assert!(matches!(
        err,
        SimError::Memory {
            source: MemoryError::OutOfWindow {
                kind: AccessKind::Fetch,
                addr: 1000,
                ..
            },
            instructions: 250,
            ..
        }
    ));
}

#[test]
fn unknown_opcode_warn_is_noop_and_flagged() {
    let mut ctx = TestContext::with_config(
        &[UNKNOWN, addi(1, 0, 3), HALT],
        &[],
        &with_policy(UnknownOpcodePolicy::Warn),
    );
    let reports = ctx.run_to_halt().unwrap();

    assert_eq!(reports[0].unknown_opcode, Some(0x67));
    assert_eq!(reports[0].pc, 4);
    assert_eq!(ctx.reg(1), 3);
    assert_eq!(ctx.cpu.stats().inst_unknown, 1);
    assert_eq!(ctx.cpu.stats().instructions_retired, 2);
}

#[test]
fn unknown_opcode_ignore_still_reports() {
    let mut ctx = TestContext::with_config(
        &[UNKNOWN, HALT],
        &[],
        &with_policy(UnknownOpcodePolicy::Ignore),
    );
    let reports = ctx.run_to_halt().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].unknown_opcode, Some(0x67));
}

#[test]
fn unknown_opcode_fault_aborts() {
    let mut ctx = TestContext::with_config(
        &[addi(1, 0, 1), UNKNOWN, HALT],
        &[],
        &with_policy(UnknownOpcodePolicy::Fault),
    );
    let err = ctx.run_to_halt().unwrap_err();
    assert!(matches!(
        err,
        SimError::IllegalInstruction {
            pc: 4,
            inst: UNKNOWN,
            opcode: 0x67
        }
    ));
    assert_eq!(ctx.cpu.pc(), 4);
}

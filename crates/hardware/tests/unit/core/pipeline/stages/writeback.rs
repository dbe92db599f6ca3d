//! Writeback Stage Tests.

use rvss_core::common::RegisterFile;
use rvss_core::core::pipeline::latches::MemWbEntry;
use rvss_core::core::pipeline::signals::ControlSignals;
use rvss_core::core::pipeline::stages::wb_stage;

fn entry(rd: usize, wb_data: u32, reg_write: bool, halt: bool) -> MemWbEntry {
    MemWbEntry {
        rd,
        wb_data,
        ctrl: ControlSignals {
            reg_write,
            halt,
            ..ControlSignals::default()
        },
        ..MemWbEntry::default()
    }
}

#[test]
fn writes_when_enabled() {
    let mut regs = RegisterFile::new();
    assert!(wb_stage(&mut regs, &entry(5, 42, true, false)));
    assert_eq!(regs.read(5), 42);
}

#[test]
fn skips_when_disabled() {
    let mut regs = RegisterFile::new();
    assert!(!wb_stage(&mut regs, &entry(5, 42, false, false)));
    assert_eq!(regs.read(5), 0);
}

#[test]
fn halt_suppresses_write() {
    let mut regs = RegisterFile::new();
    assert!(!wb_stage(&mut regs, &entry(5, 42, true, true)));
    assert_eq!(regs.read(5), 0);
}

#[test]
fn write_to_x0_is_discarded() {
    let mut regs = RegisterFile::new();
    let _ = wb_stage(&mut regs, &entry(0, 42, true, false));
    assert_eq!(regs.read(0), 0);
}

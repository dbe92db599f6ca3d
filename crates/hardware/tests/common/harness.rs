//! CPU test harness.

use rvss_core::common::error::SimError;
use rvss_core::config::Config;
use rvss_core::core::Cpu;
use rvss_core::core::cpu::CycleReport;
use rvss_core::soc::memory::{DataMemory, InstructionMemory};

use crate::common::builder::instruction::image;

/// Upper bound on cycles for `run_to_halt`, so a broken halt fails instead of spinning.
const RUN_LIMIT: u64 = 10_000;

/// Installs a test-writer subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Owns a CPU built from a program and an optional data image.
pub struct TestContext {
    pub cpu: Cpu,
}

impl TestContext {
    /// Creates a context running `program` against zeroed data memory.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(program, &[], &Config::default())
    }

    /// Creates a context with an explicit data image and configuration.
    pub fn with_config(program: &[u32], dmem: &[u8], config: &Config) -> Self {
        init_tracing();
        let imem = InstructionMemory::load(&image(program)).unwrap();
        let dmem = DataMemory::load(dmem).unwrap();
        Self {
            cpu: Cpu::new(imem, dmem, config),
        }
    }

    /// Steps once.
    pub fn step(&mut self) -> Result<CycleReport, SimError> {
        self.cpu.step()
    }

    /// Steps until the CPU halts, returning every report.
    pub fn run_to_halt(&mut self) -> Result<Vec<CycleReport>, SimError> {
        let mut reports = Vec::new();
        while !self.cpu.is_halted() {
            assert!(self.cpu.cycle() < RUN_LIMIT, "program did not halt");
            reports.push(self.cpu.step()?);
        }
        Ok(reports)
    }

    /// Read a general-purpose register value.
    pub fn reg(&self, idx: usize) -> u32 {
        self.cpu.regs().read(idx)
    }

    /// Read a data memory word.
    pub fn mem_word(&self, addr: u32) -> u32 {
        self.cpu.dmem().read(addr).unwrap()
    }
}

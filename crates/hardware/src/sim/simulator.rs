//! Simulator: owns the CPU and the trace sink side-by-side.
//!
//! The driver steps the engine until it halts, hands every executed cycle to
//! the trace sink, and persists the final data memory and metrics.

use std::path::Path;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::CycleReport;
use crate::sim::loader::load_image;
use crate::sim::output::{OutputPaths, write_results};
use crate::sim::trace::{FileTrace, NullTrace, TraceSink};
use crate::soc::memory::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Top-level simulator: datapath engine + trace sink.
#[derive(Debug)]
pub struct Simulator<T: TraceSink> {
    cpu: Cpu,
    trace: T,
    max_cycles: Option<u64>,
}

impl<T: TraceSink> Simulator<T> {
    /// Creates a simulator from raw memory images.
    ///
    /// # Arguments
    ///
    /// * `imem` - Instruction image bytes, starting at address 0.
    /// * `dmem` - Data image bytes, starting at address 0.
    /// * `config` - Simulator configuration.
    /// * `trace` - Sink receiving a snapshot after every executed cycle.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Load` if either image does not fit its window.
    pub fn new(imem: &[u8], dmem: &[u8], config: &Config, trace: T) -> Result<Self, SimError> {
        let imem = InstructionMemory::load(imem)?;
        let dmem = DataMemory::load(dmem)?;
        Ok(Self {
            cpu: Cpu::new(imem, dmem, config),
            trace,
            max_cycles: config.general.max_cycles,
        })
    }

    /// The datapath engine.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The trace sink.
    pub const fn trace(&self) -> &T {
        &self.trace
    }

    /// Consumes the simulator and returns its trace sink.
    pub fn into_trace(self) -> T {
        self.trace
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// Cycles run while the engine was still running (including the halt and
    /// drain cycles) are recorded; steps of a halted engine are not.
    ///
    /// # Errors
    ///
    /// Propagates engine faults, and returns `SimError::Trace` if the
    /// snapshot cannot be recorded.
    pub fn tick(&mut self) -> Result<CycleReport, SimError> {
        let was_halted = self.cpu.is_halted();
        let report = self.cpu.step()?;
        if !was_halted {
            self.trace.record_cycle(&report, self.cpu.regs())?;
        }
        Ok(report)
    }

    /// Runs until the engine halts, then flushes the trace sink.
    ///
    /// The sink is flushed even when the run aborts, so the trace covers
    /// every cycle up to the fault.
    ///
    /// # Errors
    ///
    /// * `SimError::CycleLimit` if `max_cycles` cycles ran without halting.
    /// * Any fault raised by [`Simulator::tick`].
    pub fn run(&mut self) -> Result<&SimStats, SimError> {
        let outcome = self.run_to_halt();
        let flushed = self.trace.finish();
        outcome?;
        flushed?;
        Ok(self.cpu.stats())
    }

    fn run_to_halt(&mut self) -> Result<(), SimError> {
        while !self.cpu.is_halted() {
            if let Some(limit) = self.max_cycles.filter(|&l| self.cpu.cycle() >= l) {
                tracing::error!(limit, pc = self.cpu.pc(), "cycle limit reached");
                return Err(SimError::CycleLimit { limit });
            }
            let _ = self.tick()?;
        }
        Ok(())
    }

    /// Writes the data memory snapshot and metrics report into `dir`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Trace` if either file cannot be written.
    pub fn persist(&self, dir: impl AsRef<Path>) -> Result<(), SimError> {
        write_results(dir, self.cpu.dmem(), self.cpu.stats())?;
        Ok(())
    }
}

impl Simulator<Box<dyn TraceSink>> {
    /// Creates a simulator from the `imem.txt` and `dmem.txt` images in `dir`.
    ///
    /// Trace files are created in `dir` when `general.trace_cycles` is set;
    /// otherwise cycles are not traced.
    ///
    /// # Errors
    ///
    /// * `SimError::Load` if an image is missing, malformed or too large.
    /// * `SimError::Trace` if the trace files cannot be created.
    pub fn from_dir(dir: impl AsRef<Path>, config: &Config) -> Result<Self, SimError> {
        let dir = dir.as_ref();
        let imem = load_image(dir.join(OutputPaths::IMEM))?;
        let dmem = load_image(dir.join(OutputPaths::DMEM))?;

        let trace: Box<dyn TraceSink> = if config.general.trace_cycles {
            Box::new(FileTrace::create(dir)?)
        } else {
            Box::new(NullTrace)
        };

        Self::new(&imem, &dmem, config, trace)
    }
}

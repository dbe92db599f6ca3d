//! Per-cycle trace sinks.
//!
//! After every executed cycle the driver hands the cycle report and the
//! register file to a [`TraceSink`]. The sinks provided here are:
//! 1. **`FileTrace`:** Appends to the register and state trace files in an IO directory.
//! 2. **`MemoryTrace`:** Keeps the rendered blocks in memory.
//! 3. **`NullTrace`:** Discards everything.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::common::RegisterFile;
use crate::core::cpu::CycleReport;
use crate::sim::loader::format_word;
use crate::sim::output::OutputPaths;

/// Width of the separator line that opens each state trace block.
const STATE_SEPARATOR_WIDTH: usize = 70;

/// Destination for per-cycle register and state snapshots.
pub trait TraceSink {
    /// Records the state after one executed cycle.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the snapshot cannot be written.
    fn record_cycle(&mut self, report: &CycleReport, regs: &RegisterFile) -> io::Result<()>;

    /// Flushes anything buffered. Called once when the run ends.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if flushing fails.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn record_cycle(&mut self, report: &CycleReport, regs: &RegisterFile) -> io::Result<()> {
        (**self).record_cycle(report, regs)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Renders the register file block for one cycle.
///
/// The label is followed by one 32-digit binary line per register, in index order.
pub fn format_rf_block(cycle: u64, regs: &RegisterFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "State of RF after executing cycle:  {cycle}");
    for value in regs.snapshot() {
        let _ = writeln!(out, "{}", format_word(value));
    }
    out
}

/// Renders the fetch-stage state block for one cycle.
pub fn format_state_block(report: &CycleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(STATE_SEPARATOR_WIDTH));
    let _ = writeln!(out, "State after executing cycle: {}", report.cycle);
    let _ = writeln!(out, "IF.PC: {}", report.pc);
    let _ = writeln!(
        out,
        "IF.nop: {}",
        if report.fetch_nop { "True" } else { "False" }
    );
    out
}

/// Writes the trace files of an IO directory.
#[derive(Debug)]
pub struct FileTrace {
    rf: BufWriter<File>,
    state: BufWriter<File>,
}

impl FileTrace {
    /// Creates (truncating) the register and state trace files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if either file cannot be created.
    pub fn create(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        let rf = BufWriter::new(File::create(dir.join(OutputPaths::RF_TRACE))?);
        let state = BufWriter::new(File::create(dir.join(OutputPaths::STATE_TRACE))?);
        Ok(Self { rf, state })
    }
}

impl TraceSink for FileTrace {
    fn record_cycle(&mut self, report: &CycleReport, regs: &RegisterFile) -> io::Result<()> {
        self.rf
            .write_all(format_rf_block(report.cycle, regs).as_bytes())?;
        self.state
            .write_all(format_state_block(report).as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.rf.flush()?;
        self.state.flush()
    }
}

/// Collects trace blocks in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryTrace {
    /// Register file blocks, one per recorded cycle.
    pub rf: Vec<String>,
    /// State blocks, one per recorded cycle.
    pub state: Vec<String>,
    /// Whether `finish` has been called.
    pub finished: bool,
}

impl MemoryTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated register file trace text.
    pub fn rf_text(&self) -> String {
        self.rf.concat()
    }

    /// Concatenated state trace text.
    pub fn state_text(&self) -> String {
        self.state.concat()
    }
}

impl TraceSink for MemoryTrace {
    fn record_cycle(&mut self, report: &CycleReport, regs: &RegisterFile) -> io::Result<()> {
        self.rf.push(format_rf_block(report.cycle, regs));
        self.state.push(format_state_block(report));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Discards all trace output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record_cycle(&mut self, _report: &CycleReport, _regs: &RegisterFile) -> io::Result<()> {
        Ok(())
    }
}

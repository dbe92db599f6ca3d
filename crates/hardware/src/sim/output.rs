//! Result persistence.
//!
//! File names used in an IO directory and the writers for the end-of-run
//! data memory snapshot and metrics report.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::sim::loader::format_byte;
use crate::soc::memory::DataMemory;
use crate::stats::SimStats;

/// Names of the files read from and written to an IO directory.
#[derive(Debug)]
pub struct OutputPaths;

impl OutputPaths {
    /// Instruction memory image.
    pub const IMEM: &'static str = "imem.txt";
    /// Initial data memory image.
    pub const DMEM: &'static str = "dmem.txt";
    /// Per-cycle register file trace.
    pub const RF_TRACE: &'static str = "SS_RFResult.txt";
    /// Per-cycle fetch state trace.
    pub const STATE_TRACE: &'static str = "StateResult_SS.txt";
    /// Final data memory contents.
    pub const DMEM_RESULT: &'static str = "SS_DMEMResult.txt";
    /// Run metrics.
    pub const METRICS: &'static str = "SS_Metrics.txt";
}

/// Renders a data memory snapshot, one 8-digit binary line per byte.
pub fn format_dmem(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 9);
    for &b in bytes {
        let _ = writeln!(out, "{}", format_byte(b));
    }
    out
}

/// Writes the data memory snapshot and the metrics report into `dir`.
///
/// # Arguments
///
/// * `dir` - IO directory.
/// * `dmem` - Final data memory.
/// * `stats` - Counters of the finished run.
///
/// # Errors
///
/// Returns the I/O error if either file cannot be written.
pub fn write_results(dir: impl AsRef<Path>, dmem: &DataMemory, stats: &SimStats) -> io::Result<()> {
    let dir = dir.as_ref();
    fs::write(dir.join(OutputPaths::DMEM_RESULT), format_dmem(dmem.snapshot()))?;
    fs::write(dir.join(OutputPaths::METRICS), stats.metrics_report())?;
    tracing::debug!(dir = %dir.display(), "results written");
    Ok(())
}

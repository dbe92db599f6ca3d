//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (load, store, ALU, unknown).

use std::fmt::Write as _;
use std::time::Instant;

/// Simulation statistics structure tracking all performance metrics.
///
/// Counters are owned by the engine and updated once per cycle.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed, including the halt and drain cycles.
    pub cycles: u64,
    /// Number of real instructions executed (halt and drain cycles excluded).
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of ALU (immediate and register-register) instructions retired.
    pub inst_alu: u64,
    /// Count of words with an opcode outside the supported subset.
    pub inst_unknown: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_alu: 0,
            inst_unknown: 0,
        }
    }
}

impl PartialEq for SimStats {
    /// Compares counters only; the host start time is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cycles == other.cycles
            && self.instructions_retired == other.instructions_retired
            && self.inst_load == other.inst_load
            && self.inst_store == other.inst_store
            && self.inst_alu == other.inst_alu
            && self.inst_unknown == other.inst_unknown
    }
}

/// Formats an optional ratio with two decimals, or `undefined`.
fn ratio_text(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| format!("{v:.2}"))
}

impl SimStats {
    /// Cycles per instruction, or `None` when no instruction retired.
    pub fn cpi(&self) -> Option<f64> {
        if self.instructions_retired == 0 {
            None
        } else {
            Some(self.cycles as f64 / self.instructions_retired as f64)
        }
    }

    /// Instructions per cycle, or `None` when no cycle ran.
    pub fn ipc(&self) -> Option<f64> {
        if self.cycles == 0 {
            None
        } else {
            Some(self.instructions_retired as f64 / self.cycles as f64)
        }
    }

    /// Renders the metrics report persisted after a run.
    ///
    /// Ratios use two decimals; a zero denominator renders as `undefined`.
    pub fn metrics_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total Cycles: {}", self.cycles);
        let _ = writeln!(out, "Total Instructions: {}", self.instructions_retired);
        let _ = writeln!(out, "Average CPI: {}", ratio_text(self.cpi()));
        let _ = writeln!(out, "Instructions Per Cycle: {}", ratio_text(self.ipc()));
        out
    }

    /// Prints the run summary and instruction mix to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let share = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {}", ratio_text(self.cpi()));
        println!("sim_ipc                  {}", ratio_text(self.ipc()));
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            share(self.inst_alu)
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            share(self.inst_load)
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            share(self.inst_store)
        );
        println!(
            "  op.unknown             {} ({:.2}%)",
            self.inst_unknown,
            share(self.inst_unknown)
        );
        println!("==========================================================");
    }
}

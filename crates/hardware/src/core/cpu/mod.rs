//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the datapath engine that owns the
//! whole machine. It coordinates the following:
//! 1. **State Management:** Holds the register file, program counter and run state.
//! 2. **Memory Ownership:** Owns the instruction and data windows for its lifetime.
//! 3. **Halt Handling:** Latches the halt word and drains one extra cycle before halting.
//! 4. **Accounting:** Keeps the cycle index and performance counters.

/// Single-cycle execution and cycle reporting.
pub mod execution;

pub use execution::CycleReport;

use crate::common::RegisterFile;
use crate::config::{Config, UnknownOpcodePolicy};
use crate::soc::memory::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Run state of the engine. `Halted` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// The engine executes one instruction (or the drain) per step.
    #[default]
    Running,
    /// The engine has drained after a halt; steps no longer change state.
    Halted,
}

/// The datapath engine.
///
/// Each call to [`Cpu::step`] performs exactly one simulated clock cycle.
#[derive(Debug)]
pub struct Cpu {
    regs: RegisterFile,
    pc: u32,
    imem: InstructionMemory,
    dmem: DataMemory,
    state: RunState,
    /// Set by the cycle that decodes halt; the next cycle drains and halts.
    halt_pending: bool,
    /// Index of the next cycle to run.
    cycle: u64,
    stats: SimStats,
    unknown_opcode: UnknownOpcodePolicy,
}

impl Cpu {
    /// Creates an engine over the given memories.
    ///
    /// Registers start at zero, the PC at 0, and the engine is `Running`.
    ///
    /// # Arguments
    ///
    /// * `imem` - Loaded instruction memory.
    /// * `dmem` - Loaded data memory.
    /// * `config` - Simulator configuration.
    pub fn new(imem: InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            imem,
            dmem,
            state: RunState::Running,
            halt_pending: false,
            cycle: 0,
            stats: SimStats::default(),
            unknown_opcode: config.general.unknown_opcode,
        }
    }

    /// Current program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Returns `true` once the engine has drained after a halt.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns `true` between the cycle that decoded halt and the drain cycle.
    ///
    /// This is the fetch-stage no-op flag reported in the state trace.
    pub const fn halt_pending(&self) -> bool {
        self.halt_pending
    }

    /// Number of cycles run so far (also the index of the next cycle).
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// The instruction memory.
    pub const fn imem(&self) -> &InstructionMemory {
        &self.imem
    }

    /// The data memory.
    pub const fn dmem(&self) -> &DataMemory {
        &self.dmem
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Policy applied to opcodes outside the supported subset.
    pub const fn unknown_opcode_policy(&self) -> UnknownOpcodePolicy {
        self.unknown_opcode
    }
}

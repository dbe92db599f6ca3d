//! Main Execution Cycle.
//!
//! This module implements the single-cycle advance of the engine. It performs the following:
//! 1. **Halt Drain:** Finishes a previously decoded halt and enters the terminal state.
//! 2. **Datapath:** Runs fetch, decode, execute, memory and writeback in order.
//! 3. **PC Update:** Advances the PC by one word, or freezes it on halt.
//! 4. **Accounting:** Updates cycle and instruction counters and reports the cycle.

use super::{Cpu, RunState};
use crate::common::constants::PC_STEP;
use crate::common::error::{MemoryError, SimError};
use crate::config::UnknownOpcodePolicy;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::isa::disasm::disassemble;

/// Externally visible outcome of one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Index of the cycle this report describes (0-based).
    pub cycle: u64,
    /// Program counter after the cycle.
    pub pc: u32,
    /// Fetch-stage no-op flag after the cycle (set once halt has been decoded).
    pub fetch_nop: bool,
    /// Whether the engine is halted after the cycle.
    pub halted: bool,
    /// Instruction word executed this cycle, if any.
    pub inst: Option<u32>,
    /// Whether a real instruction (not halt, not the drain) completed this cycle.
    pub retired: bool,
    /// Opcode of an instruction outside the supported subset executed this cycle.
    pub unknown_opcode: Option<u32>,
}

impl Cpu {
    /// Advances the machine by one clock cycle.
    ///
    /// The cycle after the one that decoded halt performs no fetch; it only
    /// counts the cycle and moves the engine to `Halted`. Once halted, further
    /// calls return the terminal report and change nothing.
    ///
    /// # Errors
    ///
    /// * `SimError::Memory` if the fetch, load or store address is outside its
    ///   window. The faulting cycle commits nothing and is not counted.
    /// * `SimError::IllegalInstruction` if an unknown opcode is decoded under
    ///   [`UnknownOpcodePolicy::Fault`].
    pub fn step(&mut self) -> Result<CycleReport, SimError> {
        if self.state == RunState::Halted {
            return Ok(self.terminal_report());
        }

        if self.halt_pending {
            return Ok(self.drain());
        }

        let cycle = self.cycle;
        let pc = self.pc;

        let if_id = fetch_stage(&self.imem, pc).map_err(|e| self.memory_fault(pc, e))?;
        let id_ex = decode_stage(&self.regs, &if_id);

        let unknown_opcode = if id_ex.ctrl.unknown {
            self.check_unknown(&id_ex)?;
            Some(id_ex.opcode)
        } else {
            None
        };

        let ex_mem = execute_stage(&id_ex);
        let mem_wb = mem_stage(&mut self.dmem, &ex_mem).map_err(|e| self.memory_fault(pc, e))?;
        let wrote = wb_stage(&mut self.regs, &mem_wb);

        tracing::debug!(
            cycle,
            pc,
            inst = format_args!("{:#010x}", if_id.inst),
            wrote,
            "{}",
            disassemble(if_id.inst)
        );

        let halt = id_ex.ctrl.halt;
        if halt {
            self.halt_pending = true;
            tracing::info!(cycle, pc, "halt decoded, draining");
        } else {
            self.pc = pc.wrapping_add(PC_STEP);
            self.account(&id_ex);
        }

        self.stats.cycles += 1;
        self.cycle += 1;

        Ok(CycleReport {
            cycle,
            pc: self.pc,
            fetch_nop: self.halt_pending,
            halted: false,
            inst: Some(if_id.inst),
            retired: !halt,
            unknown_opcode,
        })
    }

    /// Runs the drain cycle that follows a decoded halt.
    fn drain(&mut self) -> CycleReport {
        let cycle = self.cycle;
        self.stats.cycles += 1;
        self.cycle += 1;
        self.state = RunState::Halted;
        tracing::info!(
            cycle,
            pc = self.pc,
            instructions = self.stats.instructions_retired,
            "machine halted"
        );
        self.terminal_report()
    }

    /// Report describing the last cycle of a halted machine.
    fn terminal_report(&self) -> CycleReport {
        CycleReport {
            cycle: self.cycle.saturating_sub(1),
            pc: self.pc,
            fetch_nop: true,
            halted: true,
            inst: None,
            retired: false,
            unknown_opcode: None,
        }
    }

    /// Applies the unknown-opcode policy to a decoded instruction.
    fn check_unknown(&mut self, id_ex: &IdExEntry) -> Result<(), SimError> {
        match self.unknown_opcode {
            UnknownOpcodePolicy::Fault => {
                return Err(SimError::IllegalInstruction {
                    pc: id_ex.pc,
                    inst: id_ex.inst,
                    opcode: id_ex.opcode,
                });
            }
            UnknownOpcodePolicy::Warn => {
                tracing::warn!(
                    pc = id_ex.pc,
                    inst = format_args!("{:#010x}", id_ex.inst),
                    "unknown opcode {:#04x}, executing as no-op",
                    id_ex.opcode
                );
            }
            UnknownOpcodePolicy::Ignore => {}
        }
        self.stats.inst_unknown += 1;
        Ok(())
    }

    /// Counts a completed non-halt instruction.
    fn account(&mut self, id_ex: &IdExEntry) {
        self.stats.instructions_retired += 1;
        let ctrl = id_ex.ctrl;
        if ctrl.mem_read {
            self.stats.inst_load += 1;
        } else if ctrl.mem_write {
            self.stats.inst_store += 1;
        } else if ctrl.reg_write {
            self.stats.inst_alu += 1;
        }
    }

    /// Wraps a storage fault with the context of the current cycle.
    fn memory_fault(&self, pc: u32, source: MemoryError) -> SimError {
        tracing::error!(cycle = self.cycle, pc, "{source}");
        SimError::Memory {
            cycle: self.cycle,
            pc,
            instructions: self.stats.instructions_retired,
            source,
        }
    }
}

//! Single-cycle datapath.
//!
//! The datapath is organized as the classic five stages, all of which run to
//! completion inside one cycle. It includes the following components:
//! 1. **Latches:** Records passed from one stage to the next within a cycle.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Fetch, Decode, Execute, Memory, and Writeback.

/// Inter-stage records (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

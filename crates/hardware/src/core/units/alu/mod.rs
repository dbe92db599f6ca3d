//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Every
//! supported instruction reduces to a 32-bit add or subtract: address
//! generation for loads and stores, `addi`, and the `add`/`sub` pair.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The 32-bit result, wrapped modulo 2^32.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvss_core::core::units::alu::Alu;
    /// use rvss_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), u32::MAX);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        arithmetic::execute(op, a, b)
    }
}

//! Fetch Stage Tests.

use rvss_core::core::pipeline::stages::fetch_stage;
use rvss_core::soc::memory::InstructionMemory;

use crate::common::builder::instruction::{HALT, addi, image};

#[test]
fn fetch_returns_word_and_pc() {
    let imem = InstructionMemory::load(&image(&[addi(1, 0, 1), HALT])).unwrap();
    let if_id = fetch_stage(&imem, 4).unwrap();
    assert_eq!(if_id.pc, 4);
    assert_eq!(if_id.inst, HALT);
}

#[test]
fn fetch_outside_window_is_error() {
    let imem = InstructionMemory::load(&[]).unwrap();
    assert!(fetch_stage(&imem, 1000).is_err());
}

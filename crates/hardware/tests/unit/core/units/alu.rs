//! ALU Arithmetic Tests.

use proptest::prelude::*;
use rvss_core::core::pipeline::signals::AluOp;
use rvss_core::core::units::alu::Alu;

#[test]
fn add_and_sub() {
    assert_eq!(Alu::execute(AluOp::Add, 10, 20), 30);
    assert_eq!(Alu::execute(AluOp::Sub, 30, 12), 18);
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(Alu::execute(AluOp::Add, u32::MAX, 1), 0);
    assert_eq!(Alu::execute(AluOp::Sub, 5, 6), u32::MAX);
}

#[test]
fn adding_sign_extended_minus_one_decrements() {
    assert_eq!(Alu::execute(AluOp::Add, 5, (-1i32) as u32), 4);
}

proptest! {
    #[test]
    fn sub_undoes_add(a in any::<u32>(), b in any::<u32>()) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }
}

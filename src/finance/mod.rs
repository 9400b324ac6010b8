//! 대출 상환 계산 모듈 모음.

pub mod breakdown;
pub mod emi;

pub use breakdown::*;
pub use emi::*;

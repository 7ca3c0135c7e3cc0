//! Random test-corpus generator for arbitrary-precision integer arithmetic.
//!
//! Produces a pair of matched plain-text files: an input file of expressions
//! (`operand1 OP operand2`) and an answer file of exact results computed with
//! `num-bigint`. The files are line-for-line aligned so a downstream diff can
//! check a bigint implementation under test against them.

pub mod bits;
pub mod emit;
pub mod error;
pub mod ops;
pub mod oracle;
pub mod run;
pub mod sample;

pub use bits::{BitPolicy, ScalingShape};
pub use emit::{CaseEmitter, TestCase};
pub use error::{Error, Result};
pub use ops::{Op, OpMode};
pub use oracle::{evaluate, Answer};
pub use run::{run, RunConfig};

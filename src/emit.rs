use std::io::Write;

use num_bigint::BigUint;

use crate::error::Result;
use crate::ops::Op;
use crate::oracle::Answer;

/// One fully evaluated case, ready to be written and discarded.
#[derive(Debug)]
pub struct TestCase {
    pub index: u64,
    pub a: BigUint,
    pub b: BigUint,
    pub op: Op,
    pub answer: Answer,
}

/// Writes matched records to the input and answer sinks, keeping the two
/// files positionally aligned. Cases are newline-separated, with no newline
/// after the last one, and both sinks are flushed after every case so an
/// interrupted run still leaves a usable, aligned pair of files.
pub struct CaseEmitter<W> {
    input: W,
    answer: W,
    written: u64,
}

impl<W: Write> CaseEmitter<W> {
    pub fn new(input: W, answer: W) -> Self {
        CaseEmitter {
            input,
            answer,
            written: 0,
        }
    }

    /// Number of cases emitted so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn emit(&mut self, case: &TestCase) -> Result<()> {
        if self.written > 0 {
            self.input.write_all(b"\n")?;
            self.answer.write_all(b"\n")?;
        }
        write!(self.input, "{} {} {}", case.a, case.op.symbol(), case.b)?;
        match &case.answer {
            Answer::Single(value) => write!(self.answer, "{}", value)?,
            Answer::DivRem {
                quotient,
                remainder,
            } => write!(self.answer, "{}\n{}", quotient, remainder)?,
        }
        self.input.flush()?;
        self.answer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Flush both sinks and hand them back.
    pub fn into_sinks(mut self) -> Result<(W, W)> {
        self.input.flush()?;
        self.answer.flush()?;
        Ok((self.input, self.answer))
    }
}

use std::io::Write;

use log::{debug, info};
use rand::Rng;

use crate::bits::BitPolicy;
use crate::emit::{CaseEmitter, TestCase};
use crate::error::{Error, Result};
use crate::ops::OpMode;
use crate::oracle;
use crate::sample;

/// Everything one run needs besides the sinks and the RNG. Immutable for
/// the duration of the run.
#[derive(Debug)]
pub struct RunConfig {
    pub count: u64,
    pub policy: BitPolicy,
    pub op_mode: OpMode,
}

impl RunConfig {
    fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::Config("case count must be positive".into()));
        }
        match self.policy {
            BitPolicy::Fixed { max_bits } | BitPolicy::SubRange { max_bits }
                if max_bits == 0 =>
            {
                Err(Error::Config("max bits must be positive".into()))
            }
            BitPolicy::Scaling { increment, .. } if increment == 0 => {
                Err(Error::Config("bit increment must be positive".into()))
            }
            _ => Ok(()),
        }
    }
}

/// Generate `config.count` cases in strictly increasing index order, writing
/// each one to both sinks before sampling the next. A failure on any case
/// aborts the whole run; cases already emitted stay aligned on disk.
pub fn run<R, W>(config: &RunConfig, rng: &mut R, input: W, answer: W) -> Result<(W, W)>
where
    R: Rng,
    W: Write,
{
    config.validate()?;
    let mut emitter = CaseEmitter::new(input, answer);
    for index in 1..=config.count {
        let (bits_a, bits_b) = config.policy.widths(rng, index);
        debug!("{}: {} {}", index, bits_a, bits_b);
        let a = sample::random_biguint(rng, bits_a);
        let b = sample::random_biguint(rng, bits_b);
        let op = config.op_mode.resolve(rng);
        let answer = oracle::evaluate(&a, &b, op, index)?;
        emitter.emit(&TestCase {
            index,
            a,
            b,
            op,
            answer,
        })?;
        info!("{}...", index);
    }
    info!("Done.");
    emitter.into_sinks()
}

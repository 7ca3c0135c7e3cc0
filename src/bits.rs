use rand::Rng;

/// Operand shape for scaling corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingShape {
    /// Both operands at the full width, for multiplication benchmarks.
    Full,
    /// Divisor at half the dividend's width, for division benchmarks.
    Halved,
}

/// Decides the bit widths of operands A and B for each case.
#[derive(Debug, Clone, Copy)]
pub enum BitPolicy {
    /// Both operands drawn at `max_bits` every case.
    Fixed { max_bits: u64 },
    /// A at `max_bits`, B uniformly in `[1, max_bits]`. Models the
    /// divisor/dividend size skew of realistic division inputs.
    SubRange { max_bits: u64 },
    /// A grows by `increment` bits every case, so operand size climbs
    /// monotonically across a performance corpus.
    Scaling { increment: u64, shape: ScalingShape },
}

impl BitPolicy {
    /// Bit widths `(bits_a, bits_b)` for the 1-based case `index`.
    pub fn widths<R: Rng>(&self, rng: &mut R, index: u64) -> (u64, u64) {
        match *self {
            BitPolicy::Fixed { max_bits } => (max_bits, max_bits),
            BitPolicy::SubRange { max_bits } => {
                // offset < max_bits, so B keeps at least one bit
                let bits_b = max_bits - rng.gen_range(0..max_bits);
                (max_bits, bits_b)
            }
            BitPolicy::Scaling { increment, shape } => {
                let bits_a = increment * index;
                let bits_b = match shape {
                    ScalingShape::Full => bits_a,
                    ScalingShape::Halved => bits_a / 2,
                };
                (bits_a, bits_b)
            }
        }
    }
}

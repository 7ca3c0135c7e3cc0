use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Random non-negative integer with at most `bits` significant bits,
/// uniformly distributed over `[0, 2^bits)`. A width of zero produces the
/// value zero rather than an error, so a sampled divisor CAN be zero; the
/// oracle is the place that rejects that.
pub fn random_biguint<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    rng.gen_biguint(bits)
}

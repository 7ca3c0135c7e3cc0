use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::ops::Op;

/// Ground truth for one case: a single value, or a quotient/remainder pair
/// derived from the same division so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(BigInt),
    DivRem { quotient: BigUint, remainder: BigUint },
}

/// Exact result of `a op b`. Operands are non-negative by construction, but
/// subtraction may still go negative, so single results are signed. `case`
/// is the 1-based index reported when the divisor is zero.
pub fn evaluate(a: &BigUint, b: &BigUint, op: Op, case: u64) -> Result<Answer> {
    let answer = match op {
        Op::Add => Answer::Single(BigInt::from(a + b)),
        Op::Sub => Answer::Single(BigInt::from(a.clone()) - BigInt::from(b.clone())),
        Op::Mul => Answer::Single(BigInt::from(a * b)),
        Op::Div => {
            reject_zero_divisor(b, case)?;
            Answer::Single(BigInt::from(a / b))
        }
        Op::Mod => {
            reject_zero_divisor(b, case)?;
            Answer::Single(BigInt::from(a % b))
        }
        Op::DivMod => {
            reject_zero_divisor(b, case)?;
            let (quotient, remainder) = a.div_rem(b);
            Answer::DivRem { quotient, remainder }
        }
    };
    Ok(answer)
}

fn reject_zero_divisor(b: &BigUint, case: u64) -> Result<()> {
    if b.is_zero() {
        Err(Error::DivisionByZero { case })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn single(a: u64, b: u64, op: Op) -> BigInt {
        match evaluate(&big(a), &big(b), op, 1).unwrap() {
            Answer::Single(v) => v,
            other => panic!("expected a single result, got {:?}", other),
        }
    }

    #[test]
    fn addition_and_multiplication_are_exact() {
        assert_eq!(single(12, 30, Op::Add), BigInt::from(42));
        assert_eq!(single(6, 7, Op::Mul), BigInt::from(42));
    }

    #[test]
    fn subtraction_can_go_negative() {
        assert_eq!(single(3, 10, Op::Sub), BigInt::from(-7));
    }

    #[test]
    fn division_and_remainder_reconstruct_the_dividend() {
        let q = single(1000, 7, Op::Div);
        let r = single(1000, 7, Op::Mod);
        assert_eq!(q * BigInt::from(7) + r, BigInt::from(1000));
    }

    #[test]
    fn divmod_agrees_with_separate_division_and_modulo() {
        match evaluate(&big(1000), &big(7), Op::DivMod, 1).unwrap() {
            Answer::DivRem { quotient, remainder } => {
                assert_eq!(BigInt::from(quotient), single(1000, 7, Op::Div));
                assert_eq!(BigInt::from(remainder), single(1000, 7, Op::Mod));
            }
            other => panic!("expected quotient and remainder, got {:?}", other),
        }
    }

    #[test]
    fn zero_divisor_reports_the_case_index() {
        for op in [Op::Div, Op::Mod, Op::DivMod].iter().copied() {
            match evaluate(&big(5), &BigUint::zero(), op, 17) {
                Err(Error::DivisionByZero { case }) => assert_eq!(case, 17),
                other => panic!("expected DivisionByZero, got {:?}", other),
            }
        }
    }

    #[test]
    fn zero_dividend_is_fine() {
        assert_eq!(single(0, 5, Op::Div), BigInt::zero());
        assert_eq!(single(0, 5, Op::Mod), BigInt::zero());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = big(123456789);
        let b = BigUint::one() << 20;
        let first = evaluate(&a, &b, Op::DivMod, 1).unwrap();
        let second = evaluate(&a, &b, Op::DivMod, 1).unwrap();
        assert_eq!(first, second);
    }
}

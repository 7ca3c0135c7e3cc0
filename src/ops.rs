use rand::Rng;
use std::str::FromStr;

/// Operators the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// Quotient and remainder from a single division.
    DivMod,
}

/// Pool for random-per-case selection. `DivMod` is only reachable as an
/// explicitly requested operator.
const RANDOM_POOL: [Op; 5] = [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Mod];

impl Op {
    /// The literal character written into the input record. `DivMod`
    /// corpora look like division on the input side; only the answer
    /// file differs.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div | Op::DivMod => '/',
            Op::Mod => '%',
        }
    }
}

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            "%" => Ok(Op::Mod),
            "divmod" => Ok(Op::DivMod),
            other => Err(format!(
                "unknown operator `{}` (expected +, -, *, /, % or divmod)",
                other
            )),
        }
    }
}

/// How the operator for each case is chosen.
#[derive(Debug, Clone, Copy)]
pub enum OpMode {
    /// The same operator for the whole run.
    Fixed(Op),
    /// An independent uniform draw for every case.
    RandomPerCase,
}

impl OpMode {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Op {
        match self {
            OpMode::Fixed(op) => op,
            OpMode::RandomPerCase => RANDOM_POOL[rng.gen_range(0..RANDOM_POOL.len())],
        }
    }
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use structopt::StructOpt;

use bigtestgen::{BitPolicy, Error, Op, OpMode, Result, RunConfig, ScalingShape};

#[derive(StructOpt, Debug)]
#[structopt(name = "perf")]
/// Generate a performance corpus whose operands grow every case
struct Config {
    /// Expression file to write
    #[structopt(short = "i", long, parse(from_os_str))]
    input: PathBuf,
    /// Answer file to write
    #[structopt(short = "o", long, parse(from_os_str))]
    output: PathBuf,
    /// Number of test cases
    #[structopt(short = "c", long)]
    count: u64,
    /// Bits added to operand A on every case
    #[structopt(short = "b", long)]
    bit_increment: u64,
    /// Operator (* / divmod); division keeps the divisor at half width
    #[structopt(long)]
    op: Op,
    /// RNG seed for reproducible corpora
    #[structopt(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let conf: Config = Config::from_args();

    let shape = match conf.op {
        Op::Mul => ScalingShape::Full,
        Op::Div | Op::DivMod => ScalingShape::Halved,
        other => {
            return Err(Error::Config(format!(
                "operator `{}` has no performance corpus shape (use *, / or divmod)",
                other.symbol()
            )))
        }
    };

    info!("Generating {} cases", conf.count);
    info!("Input {}", conf.input.display());
    info!("Output {}", conf.output.display());
    info!("Bit increment {}", conf.bit_increment);
    info!("Operator {}", conf.op.symbol());

    let mut rng = match conf.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let input = BufWriter::new(File::create(&conf.input)?);
    let answer = BufWriter::new(File::create(&conf.output)?);
    let config = RunConfig {
        count: conf.count,
        policy: BitPolicy::Scaling {
            increment: conf.bit_increment,
            shape,
        },
        op_mode: OpMode::Fixed(conf.op),
    };
    bigtestgen::run(&config, &mut rng, input, answer)?;
    Ok(())
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use structopt::StructOpt;

use bigtestgen::{BitPolicy, Op, OpMode, Result, RunConfig};

#[derive(StructOpt, Debug)]
#[structopt(name = "stress")]
/// Generate a random bigint arithmetic corpus with matching exact answers
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
    /// Maximum operand bit width
    #[structopt(short = "b", long)]
    max_bits: u64,
    /// Operator (+ - * / % divmod); omitted means a random one per case
    #[structopt(long)]
    op: Option<Op>,
    /// Draw operand B at the full width instead of a random sub-range
    #[structopt(long)]
    full_width: bool,
    /// RNG seed for reproducible corpora
    #[structopt(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let conf: Config = Config::from_args();

    info!("Generating {} cases", conf.count);
    info!("Input {}", conf.input.display());
    info!("Output {}", conf.output.display());
    info!("Max number of bits {}", conf.max_bits);

    let policy = if conf.full_width {
        BitPolicy::Fixed {
            max_bits: conf.max_bits,
        }
    } else {
        BitPolicy::SubRange {
            max_bits: conf.max_bits,
        }
    };
    let op_mode = match conf.op {
        Some(op) => {
            info!("Operator {}", op.symbol());
            OpMode::Fixed(op)
        }
        None => OpMode::RandomPerCase,
    };
    let mut rng = match conf.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let input = BufWriter::new(File::create(&conf.input)?);
    let answer = BufWriter::new(File::create(&conf.output)?);
    let config = RunConfig {
        count: conf.count,
        policy,
        op_mode,
    };
    bigtestgen::run(&config, &mut rng, input, answer)?;
    Ok(())
}

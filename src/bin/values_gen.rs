use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use values_gen::generator::{
    DEFAULT_ELEMENTS, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_OUTPUT, DEFAULT_SET_QUANTITY,
};
use values_gen::{values_generator, GeneratorConfig};

/// Append sets of uniformly distributed random integers to a text file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Number of sets (lines) to append
    #[arg(short = 'n', long, default_value_t = DEFAULT_SET_QUANTITY)]
    set_quantity: u64,
    /// Inclusive lower bound for values
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_negative_numbers = true)]
    min_value: i64,
    /// Inclusive upper bound for values
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, allow_negative_numbers = true)]
    max_value: i64,
    /// Values per set
    #[arg(short = 'e', long, default_value_t = DEFAULT_ELEMENTS)]
    min_elements: usize,
    /// Upper bound on values per set; lengths are drawn from [min, max]
    #[arg(long)]
    max_elements: Option<usize>,
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        Self {
            set_quantity: args.set_quantity,
            min_value: args.min_value,
            max_value: args.max_value,
            min_elements: args.min_elements,
            max_elements: args.max_elements,
            output: args.output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = GeneratorConfig::from(Args::parse());

    tracing::info!(
        sets = config.set_quantity,
        min = config.min_value,
        max = config.max_value,
        "gen integers.."
    );
    values_generator(&config)
        .with_context(|| format!("generating into {}", config.output.display()))?;

    Ok(())
}

// SUPPORT

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "values_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

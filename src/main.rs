use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cyclenote::{
    canonical::canonicalize,
    inverse::{invert_i, invert_j, is_bijection},
    permutation::Permutation,
};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cyclenote",
    about = "Multiply, normalize and invert permutations written in cycle notation."
)]
struct Cli {
    /// Log filter, e.g. `cyclenote=trace`.
    #[arg(long, value_name = "FILTER", env = "RUST_LOG", default_value = "warn")]
    log: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of a permutation.
    Canonical {
        /// Cycle form, e.g. `(316)(54)(2)`.
        cycles: String,
    },
    /// Multiply permutations, applying them from left to right.
    Multiply {
        /// Cycle forms, e.g. `(acf)(bd)` `(abd)(ef)`.
        #[arg(required = true)]
        factors: Vec<String>,
    },
    /// Invert a permutation of 1..=n given in one-line notation.
    Invert {
        #[arg(long, value_enum, default_value_t = Method::Both)]
        method: Method,
        /// Images of 1, 2, ..., n.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<isize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Knuth's Algorithm I.
    I,
    /// Knuth's Algorithm J.
    J,
    /// Run both and check they agree.
    Both,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("invalid log filter")?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Canonical { cycles } => {
            let canonical = canonicalize(&cycles)
                .with_context(|| format!("failed to normalize {cycles}"))?;
            println!("{canonical}");
            println!("{}", canonical.without_parens());
        }
        Command::Multiply { factors } => {
            let factors: Vec<Permutation> = factors
                .iter()
                .map(|factor| {
                    factor
                        .parse::<Permutation>()
                        .with_context(|| format!("failed to read permutation {factor}"))
                })
                .collect::<Result<_>>()?;
            let product = Permutation::product(&factors).context("failed to multiply")?;
            println!("{product}");
            if let Some(canonical) = product.canonical_form() {
                println!("{canonical}");
            }
        }
        Command::Invert { method, values } => {
            ensure!(
                is_bijection(&values),
                "values must be a permutation of 1..={}",
                values.len()
            );
            let inverse = match method {
                Method::I => invert_i(&mut values.clone())?.to_vec(),
                Method::J => invert_j(&mut values.clone())?.to_vec(),
                Method::Both => {
                    let by_i = invert_i(&mut values.clone())?.to_vec();
                    let by_j = invert_j(&mut values.clone())?.to_vec();
                    if by_i != by_j {
                        bail!("algorithms disagree: I gave {by_i:?}, J gave {by_j:?}");
                    }
                    by_i
                }
            };
            println!("{}", inverse.iter().join(" "));
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use std::io;
use tabula_core::{write_table, Product, RealFunction, SampleRange, Square, SquareRoot};

/// Tabula - Value tables of real functions
#[derive(Parser)]
#[command(name = "tabula")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prints the value table of a real function over a stepped range")]
struct Cli {
    /// Function to tabulate
    #[arg(long, value_enum, default_value_t = FunctionKind::Product)]
    function: FunctionKind,

    /// First sample point
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    from: f64,

    /// Last sample point (inclusive)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    to: f64,

    /// Distance between sample points
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FunctionKind {
    /// SquareRoot(x) * Square(x)
    Product,
    /// SquareRoot(x)
    Sqrt,
    /// Square(x)
    Square,
}

impl FunctionKind {
    fn build(self) -> Box<dyn RealFunction> {
        match self {
            FunctionKind::Product => Box::new(Product::new(Box::new(SquareRoot), Box::new(Square))),
            FunctionKind::Sqrt => Box::new(SquareRoot),
            FunctionKind::Square => Box::new(Square),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let range = SampleRange::checked(cli.from, cli.to, cli.step).context("invalid sample range")?;
    let function = cli.function.build();
    debug!("selected {:?}: {}", cli.function, function.describe());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, function.as_ref(), range).context("could not print value table")?;

    Ok(())
}

//! secret-solver CLI: reconstruct polynomial constant terms from a JSON file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use secret_core::report::{emit, JsonReporter, TextReporter};
use secret_core::{solve_file, Method, OutputFormat, RunnerConfig};

#[derive(Parser)]
#[command(name = "secret-solver")]
#[command(about = "Recover the constant term of polynomials from base-encoded shares")]
#[command(version)]
struct Cli {
    /// JSON file holding one test case or an array of them
    input: PathBuf,

    /// Interpolation arithmetic: exact or float
    #[arg(short, long, default_value_t = Method::Exact)]
    method: Method,

    /// Also run the other arithmetic and warn when the results disagree
    #[arg(long)]
    cross_check: bool,

    /// Process cases one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Report format: text or json
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> RunnerConfig {
        RunnerConfig::new(self.method)
            .with_cross_check(self.cross_check)
            .with_parallel(!self.sequential)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .init();
}

fn run(cli: &Cli) -> secret_core::Result<()> {
    let reports = solve_file(&cli.input, &cli.config())?;

    match cli.format {
        OutputFormat::Text => {
            let mut reporter =
                TextReporter::new(io::stdout().lock(), io::stderr().lock());
            emit(&mut reporter, &reports)?;
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(io::stdout().lock());
            emit(&mut reporter, &reports)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

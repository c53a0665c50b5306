use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use payout::cli::{handle_report_command, ReportArgs};
use payout::config::Settings;

#[derive(Parser)]
#[command(
    name = "payout-report",
    version,
    about = "Employee salary report generator",
    long_about = "Employee salary report generator.\n\n\
                  Reads one or more CSV files of employee hours and rates and \
                  prints the total payout, broken down by department."
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// JSON settings file (delimiter, currency symbol)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    let outcome = handle_report_command(settings, cli.report)?;

    println!("{}", outcome.message());
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, takes precedence over the flag
    builder.parse_default_env();
    builder.init();
}

//! `nid`: decode Egyptian national IDs from the command line.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use national_id::CalendarDate;
use national_id::logging::{LogConfig, LogFormat, init_logging};
use national_id::response::{respond, respond_on};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nid",
    version,
    about = "Decode Egyptian national IDs into birth date, governorate and gender",
    long_about = "Decode Egyptian national IDs into birth date, governorate and gender.\n\n\
                  Prints one JSON object per ID, in the same shape the HTTP endpoint returns.\n\
                  Exits with status 1 if any ID is invalid."
)]
struct Cli {
    /// National IDs to decode (14 digits each).
    #[arg(value_name = "NATIONAL_ID", required = true)]
    national_ids: Vec<String>,

    /// Reference date for the future-birth-date check (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<CalendarDate>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    LogConfig::default()
        .with_level(cli.verbosity.tracing_level_filter())
        .with_format(format)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(!cli.verbosity.is_present())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();
    let mut all_valid = true;
    for national_id in &cli.national_ids {
        let response = match cli.today {
            Some(today) => respond_on(national_id, today),
            None => respond(national_id),
        };
        all_valid &= response.is_success();

        let line = match response.to_json() {
            Ok(line) => line,
            Err(error) => {
                eprintln!("error: failed to render response: {error}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(error) = writeln!(stdout, "{line}") {
            eprintln!("error: failed to write output: {error}");
            return ExitCode::FAILURE;
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

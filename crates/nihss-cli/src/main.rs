use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nihss_cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "nihss",
    about = "Score NIHSS stroke assessments and interpret the result",
    version
)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an assessment payload and print the result as JSON
    Evaluate {
        /// JSON payload file; reads stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Request a generated interpretation when Bedrock is configured
        #[arg(long)]
        augment: bool,
        /// Reject out-of-range item scores instead of clamping them
        #[arg(long)]
        strict: bool,
    },
    /// List the available instruments
    Instruments,
    /// Print an instrument's domains and item ranges as JSON
    Instrument {
        /// Instrument id, e.g. "nihss"
        id: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    match cli.command {
        Command::Evaluate {
            input,
            augment,
            strict,
        } => commands::evaluate(input, augment, strict).await,
        Command::Instruments => commands::list_instruments(),
        Command::Instrument { id } => commands::show_instrument(&id),
    }
}

fn init_logging(format: LogFormat) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.with_target(false).compact().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_flags_come_from_arguments_only() {
        let cli = Cli::try_parse_from(["nihss", "evaluate", "--strict", "-i", "case.json"])
            .expect("parse should succeed");

        match cli.command {
            Command::Evaluate {
                input,
                augment,
                strict,
            } => {
                assert_eq!(input, Some(PathBuf::from("case.json")));
                assert!(!augment);
                assert!(strict);
            }
            other => panic!("expected Command::Evaluate, got {other:?}"),
        }
        assert!(matches!(cli.log_format, LogFormat::Text));
    }
}

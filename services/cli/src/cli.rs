use crate::commands::{run_report, run_transfers, ReportArgs, TransfersArgs};
use clap::{Parser, Subcommand};
use staff_transfers::config::AppConfig;
use staff_transfers::error::AppError;
use staff_transfers::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "staff-transfers",
    about = "Summarize department rosters and explore salary-raising staff transfers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each department's roster with its average salary
    Report(ReportArgs),
    /// Enumerate transfer sets and list moves that raise both departments' averages
    Transfers(TransfersArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "staff transfers ready");

    match cli.command {
        Command::Report(args) => run_report(args),
        Command::Transfers(args) => run_transfers(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_transfers_with_overrides() {
        let cli = Cli::try_parse_from([
            "staff-transfers",
            "transfers",
            "--input",
            "roster.csv",
            "--max-roster-size",
            "12",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Transfers(args) => {
                assert_eq!(args.input.to_str(), Some("roster.csv"));
                assert_eq!(args.max_roster_size, Some(12));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn report_defaults_to_text() {
        let cli = Cli::try_parse_from(["staff-transfers", "report", "--input", "roster.csv"])
            .expect("arguments parse");
        match cli.command {
            Command::Report(args) => assert_eq!(args.format, OutputFormat::Text),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn requires_an_input_file() {
        assert!(Cli::try_parse_from(["staff-transfers", "report"]).is_err());
    }
}

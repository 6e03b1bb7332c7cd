use crate::render::{proposal_lines, roster_lines};
use clap::{Args, ValueEnum};
use serde::Serialize;
use staff_transfers::config::AppConfig;
use staff_transfers::error::AppError;
use staff_transfers::staffing::{
    OrganizationReport, RosterImporter, TransferPlanner, TransferProposal,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV roster export with Name, Department and Salary columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct TransfersArgs {
    /// CSV roster export with Name, Department and Salary columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Largest department roster to enumerate (overrides TRANSFERS_MAX_ROSTER_SIZE)
    #[arg(long)]
    pub(crate) max_roster_size: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct TransfersResponse<'a> {
    max_roster_size: usize,
    transfer_sets: usize,
    proposals: &'a [TransferProposal],
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { input, format } = args;

    let organization = RosterImporter::from_path(&input)?;
    let report = OrganizationReport::build(&organization);

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for department in &report.departments {
                for line in roster_lines(department) {
                    writeln!(out, "{line}")?;
                }
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

pub(crate) fn run_transfers(args: TransfersArgs, config: &AppConfig) -> Result<(), AppError> {
    let TransfersArgs {
        input,
        max_roster_size,
        format,
    } = args;

    let limit = config.enumeration.limit(max_roster_size)?;
    let mut organization = RosterImporter::from_path(&input)?;
    let transfer_sets = organization.recompute_transfer_sets(&limit)?;
    let proposals = TransferPlanner::new().plan(&organization)?;
    info!(
        input = %input.display(),
        transfer_sets,
        proposals = proposals.len(),
        "transfer plan built"
    );

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let response = TransfersResponse {
                max_roster_size: limit.max_roster_size(),
                transfer_sets,
                proposals: &proposals,
            };
            serde_json::to_writer_pretty(&mut out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Evaluated {} transfer sets across {} departments",
                transfer_sets,
                organization.len()
            )?;
            for line in proposal_lines(&proposals) {
                writeln!(out, "{line}")?;
            }
        }
    }

    Ok(())
}

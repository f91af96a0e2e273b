//! Report generation command.
//!
//! Reads every exported timesheet page from the configured data directory,
//! builds one report table per person, and either prints the tables or
//! writes them to the output directory together with a combined file.

use crate::api::youtrack::YouTrack;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::markup::SchemaVersion;
use crate::libs::messages::Message;
use crate::libs::report::{self, ReportTable};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print, msg_success, msg_warning};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the report command.
#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    /// Output format for the generated report files
    #[arg(long, value_enum, default_value = "excel")]
    format: ExportFormat,

    /// Output directory, overriding the configured one
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the tables to the terminal instead of writing files
    #[arg(long)]
    display: bool,

    /// Markup schema of the exported pages, overriding the configured one
    #[arg(long, value_enum)]
    schema: Option<SchemaVersion>,
}

/// Executes the report command.
///
/// Pages are processed in file-name order so repeated runs over the same
/// input produce identical output.
pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let mut report_config = config.report.ok_or_else(|| msg_error_anyhow!(Message::ReportConfigMissing))?;
    let youtrack_config = config.youtrack.ok_or_else(|| msg_error_anyhow!(Message::YouTrackConfigMissing))?;

    if let Some(schema) = report_args.schema {
        report_config.schema = schema;
    }
    if let Some(output) = report_args.output {
        report_config.output_dir = output;
    }

    let youtrack = YouTrack::new(&youtrack_config)?;
    let exporter = Exporter::new(report_args.format, report_config.output_dir.clone());

    let mut pages: Vec<PathBuf> = fs::read_dir(&report_config.data_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
                .unwrap_or(false)
        })
        .collect();
    pages.sort();

    if pages.is_empty() {
        msg_warning!(Message::NoExportPages(report_config.data_dir.display().to_string()));
        return Ok(());
    }

    let mut combined = ReportTable::new();
    for page_path in &pages {
        let person = page_path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default().to_string();
        msg_print!(Message::ParsingPersonFile(person.clone()));

        let page = fs::read_to_string(page_path)?;
        let table = report::build_person_table(&person, &page, &report_config, &youtrack).await?;

        if report_args.display {
            msg_print!(Message::ReportHeader(person.clone()), true);
            View::report(&table)?;
        } else {
            let path = exporter.export_person(&person, &table)?;
            msg_success!(Message::PersonReportSaved(path.display().to_string()));
        }

        combined.extend_from(&table);
    }

    if report_args.display {
        msg_print!(Message::CombinedReportHeader, true);
        View::report(&combined)?;
    } else {
        let path = exporter.export_combined(&combined)?;
        msg_success!(Message::CombinedReportSaved(path.display().to_string()));
    }

    Ok(())
}

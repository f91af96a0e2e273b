//! Report file generation in CSV, JSON and Excel formats.
//!
//! One file per person plus one combined file per run, written into the
//! configured output directory. Excel is the primary format (the reports
//! feed a spreadsheet-driven process); CSV and JSON cover integration and
//! backup needs.

use crate::libs::report::{ReportTable, REPORT_COLUMNS};
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// File stem of the cross-person concatenation.
pub const COMBINED_FILE_STEM: &str = "combined";

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with formatted headers, the default.
    Excel,
}

/// Writes report tables to the output directory in one selected format.
pub struct Exporter {
    format: ExportFormat,
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_dir: PathBuf) -> Self {
        Self { format, output_dir }
    }

    /// Writes one person's table as `<person>.<ext>` and returns the path.
    pub fn export_person(&self, person: &str, table: &ReportTable) -> Result<PathBuf> {
        self.export_table(person, table)
    }

    /// Writes the combined table and returns the path.
    pub fn export_combined(&self, table: &ReportTable) -> Result<PathBuf> {
        self.export_table(COMBINED_FILE_STEM, table)
    }

    fn export_table(&self, stem: &str, table: &ReportTable) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.{}", stem, self.extension()));

        match self.format {
            ExportFormat::Csv => self.write_csv(&path, table)?,
            ExportFormat::Json => self.write_json(&path, table)?,
            ExportFormat::Excel => self.write_excel(&path, table)?,
        }

        Ok(path)
    }

    fn extension(&self) -> &'static str {
        match self.format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }

    fn write_csv(&self, path: &PathBuf, table: &ReportTable) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(REPORT_COLUMNS)?;

        for row in &table.rows {
            wtr.write_record(&[
                row.person.clone(),
                row.project.clone(),
                row.task.clone(),
                row.indicator.clone().unwrap_or_default(),
                format_workdays(row.workdays),
                row.date.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &PathBuf, table: &ReportTable) -> Result<()> {
        let json = serde_json::to_string_pretty(&table.rows)?;
        File::create(path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, path: &PathBuf, table: &ReportTable) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, title) in REPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            let excel_row = i as u32 + 1;
            worksheet.write_string(excel_row, 0, &row.person)?;
            worksheet.write_string(excel_row, 1, &row.project)?;
            worksheet.write_string(excel_row, 2, &row.task)?;
            worksheet.write_string(excel_row, 3, row.indicator.as_deref().unwrap_or(""))?;
            worksheet.write_number(excel_row, 4, row.workdays)?;
            worksheet.write_string(excel_row, 5, &row.date)?;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}

/// Workdays fractions are rendered with two decimals in textual formats;
/// Excel keeps the raw number so spreadsheet formulas stay exact.
pub fn format_workdays(value: f64) -> String {
    format!("{:.2}", value)
}

//! Shared report assembly logic.
//!
//! Runs the full per-person pipeline — day scanning, per-day aggregation,
//! shortfall smoothing, window accumulation, low-value bucketing — and
//! shapes the result into a [`ReportTable`] ready for display or export.

use crate::libs::bucket;
use crate::libs::config::ReportConfig;
use crate::libs::error::Result;
use crate::libs::markup::{self, MarkupSchema};
use crate::libs::messages::Message;
use crate::libs::timesheet;
use crate::libs::window::{TaskNames, WindowAccumulator, WindowRow};
use crate::msg_warning;
use serde::Serialize;

/// Column titles of every emitted report.
pub const REPORT_COLUMNS: [&str; 6] = ["Employee", "Project", "Task", "Indicator", "Workdays", "Date"];

/// Ordered report rows for one person, or for all persons combined.
/// Assembled once per run and never mutated afterwards.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReportTable {
    pub rows: Vec<WindowRow>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a copy of another table's rows, used to build the combined
    /// cross-person table.
    pub fn extend_from(&mut self, other: &ReportTable) {
        self.rows.extend(other.rows.iter().cloned());
    }
}

/// Builds the finalized report table for one person's exported page.
///
/// Day units are scanned in page order, which is chronological in the
/// exports. Days outside the configured window are skipped without parsing
/// their work items; a window that never reaches the end day emits a
/// warning and produces no rows.
pub async fn build_person_table(person: &str, page: &str, config: &ReportConfig, names: &impl TaskNames) -> Result<ReportTable> {
    let schema = MarkupSchema::for_version(config.schema);
    let units = config.unit_table();
    let mut accumulator = WindowAccumulator::new(person, config);

    for day_html in markup::class_blocks(page, "div", schema.day_class) {
        if accumulator.is_finalized() {
            break;
        }
        let day = timesheet::day_date(day_html, schema)?;
        if !accumulator.wants(day) {
            continue;
        }

        let mut tasks = timesheet::parse_day(day_html, schema, &units)?;
        if config.smooth_shortfall {
            timesheet::balance_to_norm(&mut tasks, config.norm_minutes());
        }
        accumulator.accumulate(day, tasks, names).await?;
    }

    if !accumulator.is_finalized() {
        msg_warning!(Message::WindowNeverClosed(person.to_string()));
    }

    let mut rows = accumulator.finish();
    if config.bucket_low_value {
        rows = bucket::bucket_low_value(rows);
    }
    Ok(ReportTable { rows })
}

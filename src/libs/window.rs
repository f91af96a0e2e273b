//! Accumulation of day aggregates over a configured reporting window.
//!
//! The accumulator is a small state machine per person:
//! `NotStarted → Accumulating → Finalized`. It starts on the first day
//! matching the configured start day, folds every day up to and including
//! the end day into a mapping keyed by the resolved task display name, and
//! ignores everything after. If the end day is never seen the window stays
//! open and no rows are emitted; callers surface that case to the operator.

use crate::libs::config::ReportConfig;
use crate::libs::error::Result;
use crate::libs::timesheet::DayAggregate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seam to the external name-resolution service.
///
/// Implemented by the YouTrack client and by test stubs. Lookups are not
/// cached: a task appearing on several days is resolved once per day.
#[allow(async_fn_in_trait)]
pub trait TaskNames {
    /// Returns the full display name of a task identifier.
    async fn full_name(&self, key: &str) -> Result<String>;
}

/// One report row for a resolved task within the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRow {
    /// Person the source page belongs to.
    pub person: String,
    /// Project display name resolved from the task identifier prefix.
    pub project: String,
    /// Resolved task display name (or the catch-all bucket label).
    pub task: String,
    /// Indicator value column; always empty in this report.
    pub indicator: Option<String>,
    /// Accumulated effort as a fraction of workdays.
    pub workdays: f64,
    /// Last date the task was touched, as `DD.<month suffix>`.
    pub date: String,
}

/// Lifecycle of one person's reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    NotStarted,
    Accumulating,
    Finalized,
}

/// Folds per-day aggregates into [`WindowRow`]s for one person.
pub struct WindowAccumulator<'a> {
    person: String,
    config: &'a ReportConfig,
    state: WindowState,
    rows: BTreeMap<String, WindowRow>,
}

impl<'a> WindowAccumulator<'a> {
    pub fn new(person: &str, config: &'a ReportConfig) -> Self {
        Self {
            person: person.to_string(),
            config,
            state: WindowState::NotStarted,
            rows: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == WindowState::Finalized
    }

    /// Whether a day with this date should be parsed at all.
    ///
    /// Days before the first occurrence of the start day are skipped; once
    /// the window is finalized nothing further is accepted.
    pub fn wants(&self, day: u32) -> bool {
        match self.state {
            WindowState::NotStarted => day == self.config.start_day,
            WindowState::Accumulating => true,
            WindowState::Finalized => false,
        }
    }

    /// Merges one day's aggregate into the window.
    ///
    /// Every task identifier is resolved to its display name and to a
    /// project via the configured prefix mapping; both failures abort the
    /// run. Processing the day equal to the configured end day finalizes
    /// the window.
    pub async fn accumulate(&mut self, day: u32, tasks: DayAggregate, names: &impl TaskNames) -> Result<()> {
        if self.state == WindowState::NotStarted && day == self.config.start_day {
            self.state = WindowState::Accumulating;
        }
        if self.state != WindowState::Accumulating {
            return Ok(());
        }

        let date = format!("{:02}.{}", day, self.config.month_suffix);
        let norm = (self.config.required_hours * 60) as f64;

        for (key, minutes) in tasks {
            let prefix = key.split('-').next().unwrap_or_default();
            let project = self.config.project_name(prefix)?.to_string();
            let task = names.full_name(&key).await?;
            let fraction = minutes as f64 / norm;

            self.rows
                .entry(task.clone())
                .and_modify(|row| {
                    row.workdays += fraction;
                    row.date = date.clone();
                })
                .or_insert_with(|| WindowRow {
                    person: self.person.clone(),
                    project,
                    task,
                    indicator: None,
                    workdays: fraction,
                    date: date.clone(),
                });
        }

        if day == self.config.end_day {
            self.state = WindowState::Finalized;
        }
        Ok(())
    }

    /// Consumes the accumulator and returns the finalized rows in resolved
    /// task name order. A window that never reached the end day yields no
    /// rows.
    pub fn finish(self) -> Vec<WindowRow> {
        match self.state {
            WindowState::Finalized => self.rows.into_values().collect(),
            _ => Vec::new(),
        }
    }
}

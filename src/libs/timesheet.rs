//! Extraction and per-day aggregation of timesheet entries.
//!
//! A day unit of the exported page holds one work item card per tracked
//! entry; the same task may appear several times within one day. This
//! module turns one day unit into a [`DayAggregate`] (task identifier →
//! total minutes) and optionally smooths the day total to the configured
//! working norm.

use crate::libs::duration::{self, UnitTable};
use crate::libs::error::{Result, TabelError};
use crate::libs::markup::{self, MarkupSchema};
use std::collections::BTreeMap;

/// Accumulated minutes per task identifier for exactly one calendar day.
///
/// A `BTreeMap` keeps the fold deterministic; summation is commutative, so
/// final values do not depend on card order anyway.
pub type DayAggregate = BTreeMap<String, i64>;

/// One parsed work item entry: task identifier and elapsed minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Task identifier of the form `<PROJECT_CODE>-<number>`.
    pub key: String,
    /// Elapsed time in minutes.
    pub minutes: i64,
}

/// Reads the day-of-month number from a day unit.
pub fn day_date(day_html: &str, schema: &MarkupSchema) -> Result<u32> {
    let paragraph = markup::first_class_block(day_html, "p", schema.date_class)
        .ok_or(TabelError::Markup("day date paragraph"))?;
    markup::text(paragraph).parse().map_err(|_| TabelError::Markup("numeric day date"))
}

/// All work item cards within one day unit.
pub fn task_units<'a>(day_html: &'a str, schema: &MarkupSchema) -> Vec<&'a str> {
    markup::class_blocks(day_html, "div", schema.task_class)
}

/// Extracts one [`TaskRecord`] from a work item card.
///
/// Both fields are located by the schema's named paths; a missing step is
/// fatal for the run since it means the page layout changed.
pub fn extract_task(task_html: &str, schema: &MarkupSchema, units: &UnitTable) -> Result<TaskRecord> {
    let elapsed = markup::text(markup::field(task_html, &schema.elapsed)?);
    let minutes = duration::parse_elapsed(&elapsed, units)?;

    let key = markup::text(markup::field(task_html, &schema.task_key)?);
    if key.is_empty() {
        return Err(TabelError::Markup("non-empty task identifier"));
    }

    Ok(TaskRecord { key, minutes })
}

/// Folds all work item cards of one day unit into a [`DayAggregate`],
/// summing minutes of identical task identifiers.
pub fn parse_day(day_html: &str, schema: &MarkupSchema, units: &UnitTable) -> Result<DayAggregate> {
    let mut tasks = DayAggregate::new();
    for unit in task_units(day_html, schema) {
        let record = extract_task(unit, schema, units)?;
        *tasks.entry(record.key).or_insert(0) += record.minutes;
    }
    Ok(tasks)
}

/// Spreads the difference between the day total and the working norm
/// evenly across the day's tasks.
///
/// Days with no entries, a zero total, or an exact-norm total are left
/// untouched. Minutes stay integral: the remainder of the division is
/// handed out one minute at a time in key order, so the adjusted total
/// hits the norm exactly.
pub fn balance_to_norm(tasks: &mut DayAggregate, norm_minutes: i64) {
    if tasks.is_empty() {
        return;
    }
    let spent: i64 = tasks.values().sum();
    if spent == 0 || spent == norm_minutes {
        return;
    }

    let count = tasks.len() as i64;
    let difference = norm_minutes - spent;
    let per_task = difference.div_euclid(count);
    let mut remainder = difference.rem_euclid(count);

    for minutes in tasks.values_mut() {
        *minutes += per_task;
        if remainder > 0 {
            *minutes += 1;
            remainder -= 1;
        }
    }
}

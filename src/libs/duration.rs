//! Parsing of compact elapsed-time strings from timesheet cells.
//!
//! YouTrack renders spent time as a whitespace-separated token sequence like
//! `"2ч 30м"` or `"1д"`, each token being an integer followed by a single
//! unit character. The unit table maps every character to a minute
//! multiplier; the day unit is derived from the configured norm of working
//! hours per day.

use crate::libs::error::{Result, TabelError};
use std::collections::HashMap;

/// Minute multipliers keyed by a one-character unit symbol.
pub type UnitTable = HashMap<char, i64>;

/// Builds the default unit table: `ч` (hours), `м` (minutes), `д` (days).
///
/// One day equals `required_hours` working hours, so a "1д" entry fills the
/// entire daily norm.
pub fn unit_table(required_hours: i64) -> UnitTable {
    HashMap::from([('ч', 60), ('м', 1), ('д', required_hours * 60)])
}

/// Converts an elapsed-time string to total minutes.
///
/// Integer arithmetic throughout; no rounding. Fails on a token whose
/// trailing character is not in the unit table or whose leading part is not
/// an integer.
pub fn parse_elapsed(work_time: &str, units: &UnitTable) -> Result<i64> {
    let mut total_minutes = 0;
    for token in work_time.split_whitespace() {
        let unit = token.chars().next_back().ok_or_else(|| TabelError::BadTimeValue(token.to_string()))?;
        let value: i64 = token[..token.len() - unit.len_utf8()]
            .parse()
            .map_err(|_| TabelError::BadTimeValue(token.to_string()))?;
        let multiplier = units.get(&unit).ok_or(TabelError::UnknownTimeUnit {
            unit,
            token: token.to_string(),
        })?;
        total_minutes += value * multiplier;
    }
    Ok(total_minutes)
}

use crate::libs::export::format_workdays;
use crate::libs::report::ReportTable;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn report(report: &ReportTable) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "PROJECT", "TASK", "INDICATOR", "WORKDAYS", "DATE"]);
        for entry in &report.rows {
            table.add_row(row![
                entry.person,
                entry.project,
                entry.task,
                entry.indicator.clone().unwrap_or_default(),
                format_workdays(entry.workdays),
                entry.date
            ]);
        }
        table.printstd();

        Ok(())
    }
}

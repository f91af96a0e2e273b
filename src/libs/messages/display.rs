//! Display implementation for tabel application messages.
//!
//! Single source of truth for all user-facing message text. Keeping the
//! wording in one place makes the rest of the code read as intent
//! (`Message::ConfigSaved`) and leaves formatting concerns here.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::PromptSelectModules => "Select the modules to configure".to_string(),
            Message::ConfigModuleYouTrack => "YouTrack settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::PromptYouTrackUrl => "Enter the YouTrack base URL".to_string(),
            Message::PromptYouTrackToken => "Enter the YouTrack access token (empty to use YOUTRACK_TOKEN)".to_string(),
            Message::PromptDataDir => "Directory with exported timesheet pages".to_string(),
            Message::PromptOutputDir => "Directory for generated reports".to_string(),
            Message::PromptMonthSuffix => "Month and year suffix for report dates (MM.YYYY)".to_string(),
            Message::PromptStartDay => "First day of the reporting window".to_string(),
            Message::PromptEndDay => "Last day of the reporting window".to_string(),
            Message::PromptRequiredHours => "Required working hours per day".to_string(),
            Message::PromptProjectCode => "Project code (leave empty to finish)".to_string(),
            Message::PromptProjectName => "Project display name".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportConfigMissing => "Report module is not configured. Run 'tabel init' first".to_string(),
            Message::YouTrackConfigMissing => "YouTrack module is not configured. Run 'tabel init' first".to_string(),
            Message::NoExportPages(dir) => format!("No exported timesheet pages found in {}", dir),
            Message::ParsingPersonFile(person) => format!("Building report for {}", person),
            Message::ReportHeader(person) => format!("Report for {}", person),
            Message::CombinedReportHeader => "Combined report".to_string(),
            Message::PersonReportSaved(path) => format!("Report written to {}", path),
            Message::CombinedReportSaved(path) => format!("Combined report written to {}", path),
            Message::WindowNeverClosed(person) => {
                format!("Reporting window for {} never reached the configured end day; no rows emitted", person)
            }
        };
        write!(f, "{}", text)
    }
}

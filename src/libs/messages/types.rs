#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptSelectModules,
    ConfigModuleYouTrack,
    ConfigModuleReport,
    PromptYouTrackUrl,
    PromptYouTrackToken,
    PromptDataDir,
    PromptOutputDir,
    PromptMonthSuffix,
    PromptStartDay,
    PromptEndDay,
    PromptRequiredHours,
    PromptProjectCode,
    PromptProjectName,

    // === REPORT MESSAGES ===
    ReportConfigMissing,
    YouTrackConfigMissing,
    NoExportPages(String),          // data directory
    ParsingPersonFile(String),      // person
    ReportHeader(String),           // person
    CombinedReportHeader,
    PersonReportSaved(String),      // file path
    CombinedReportSaved(String),    // file path
    WindowNeverClosed(String),      // person
}

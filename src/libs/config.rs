//! Configuration management for the tabel application.
//!
//! Settings live in a JSON file in the platform application-data directory
//! and are loaded once at process start; every component receives the
//! loaded value and treats it as immutable. Each integration is an optional
//! module so the file stays focused on what the user actually configured.
//!
//! ## Modules
//!
//! - **YouTrack**: base URL and access token of the name-resolution API
//! - **Report**: input/output directories, reporting window, working norm,
//!   normalization flags, schema version and the project mapping
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tabel::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(report) = &config.report {
//!     println!("window: {}..={}", report.start_day, report.end_day);
//! }
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::api::youtrack::YouTrackConfig;
use crate::libs::duration::{self, UnitTable};
use crate::libs::error::TabelError;
use crate::libs::markup::SchemaVersion;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module shown in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used for configuration routing.
    pub key: String,
    /// Display name shown during interactive setup.
    pub name: String,
}

/// Report pipeline settings.
///
/// `start_day` and `end_day` are day-of-month numbers forming an inclusive
/// reporting window; `month_suffix` is appended to the day number when
/// formatting row dates (`05.08.2022`). The project mapping translates task
/// identifier prefixes into display names and must cover every prefix that
/// occurs in the window.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Directory with one exported timesheet page per person.
    pub data_dir: PathBuf,

    /// Directory the report files are written to.
    pub output_dir: PathBuf,

    /// Month and year suffix of row dates, e.g. `08.2022`.
    pub month_suffix: String,

    /// First day of the reporting window (inclusive).
    pub start_day: u32,

    /// Last day of the reporting window (inclusive).
    pub end_day: u32,

    /// Working norm in hours per day; also the value of the `д` time unit.
    pub required_hours: i64,

    /// Spread a day's deviation from the norm evenly across its tasks.
    #[serde(default = "default_true")]
    pub smooth_shortfall: bool,

    /// Merge sub-threshold rows into catch-all buckets per project.
    #[serde(default = "default_true")]
    pub bucket_low_value: bool,

    /// Export generation of the source pages.
    #[serde(default)]
    pub schema: SchemaVersion,

    /// Task identifier prefix → project display name.
    pub projects: HashMap<String, String>,

    /// Optional override of the time-unit multiplier table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<HashMap<char, i64>>,
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            data_dir: PathBuf::from("./youtrack_export"),
            output_dir: PathBuf::from("./results"),
            month_suffix: Local::now().format("%m.%Y").to_string(),
            start_day: 1,
            end_day: 31,
            required_hours: 8,
            smooth_shortfall: true,
            bucket_low_value: true,
            schema: SchemaVersion::default(),
            projects: HashMap::new(),
            units: None,
        }
    }
}

impl ReportConfig {
    /// The working norm in minutes.
    pub fn norm_minutes(&self) -> i64 {
        self.required_hours * 60
    }

    /// The effective time-unit multiplier table.
    pub fn unit_table(&self) -> UnitTable {
        match &self.units {
            Some(units) => units.clone(),
            None => duration::unit_table(self.required_hours),
        }
    }

    /// Resolves a task identifier prefix to its project display name.
    pub fn project_name(&self, prefix: &str) -> Result<&str, TabelError> {
        self.projects
            .get(prefix)
            .map(String::as_str)
            .ok_or_else(|| TabelError::UnknownProject(prefix.to_string()))
    }
}

/// Main configuration container.
///
/// All modules are optional; missing ones simply disable the commands that
/// need them. `skip_serializing_if` keeps unconfigured modules out of the
/// JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// YouTrack API connection for task name resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtrack: Option<YouTrackConfig>,

    /// Report pipeline settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to the default (empty)
    /// configuration when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, then walks the selected ones.
    /// Existing values are offered as defaults so re-running the wizard
    /// only to tweak one setting is cheap.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![
            YouTrackConfig::module(),
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
        ];

        let selected_modules = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_modules {
            match module_descriptions[selection].key.as_str() {
                "youtrack" => config.youtrack = Some(YouTrackConfig::init(&config.youtrack)?),
                "report" => {
                    let default = config.report.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleReport);
                    let mut report = ReportConfig {
                        data_dir: PathBuf::from(
                            Input::<String>::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptDataDir.to_string())
                                .default(default.data_dir.display().to_string())
                                .interact_text()?,
                        ),
                        output_dir: PathBuf::from(
                            Input::<String>::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptOutputDir.to_string())
                                .default(default.output_dir.display().to_string())
                                .interact_text()?,
                        ),
                        month_suffix: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMonthSuffix.to_string())
                            .default(default.month_suffix.clone())
                            .interact_text()?,
                        start_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStartDay.to_string())
                            .default(default.start_day)
                            .interact_text()?,
                        end_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptEndDay.to_string())
                            .default(default.end_day)
                            .interact_text()?,
                        required_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRequiredHours.to_string())
                            .default(default.required_hours)
                            .interact_text()?,
                        projects: default.projects.clone(),
                        ..default
                    };

                    // Project mapping entries, one code at a time.
                    loop {
                        let code: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptProjectCode.to_string())
                            .allow_empty(true)
                            .interact_text()?;
                        if code.is_empty() {
                            break;
                        }
                        let name: String = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptProjectName.to_string())
                            .default(report.projects.get(&code).cloned().unwrap_or_default())
                            .interact_text()?;
                        report.projects.insert(code, name);
                    }

                    config.report = Some(report);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

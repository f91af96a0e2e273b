//! # Tabel - YouTrack timesheet report builder
//!
//! A command-line utility that parses exported YouTrack timesheet pages,
//! normalizes work time and builds monthly effort reports.
//!
//! ## Features
//!
//! - **Timesheet Parsing**: Tolerant extraction of day and task entries from exported HTML pages
//! - **Time Aggregation**: Per-day and per-window accumulation of elapsed work time
//! - **Normalization**: Daily shortfall smoothing and low-value bucketing into an "Other" row
//! - **Name Resolution**: Task display names fetched from the YouTrack REST API
//! - **Data Export**: Per-person and combined reports in Excel, CSV and JSON formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tabel::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

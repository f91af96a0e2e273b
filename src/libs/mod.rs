//! Core building blocks: configuration, parsing, aggregation, and output.

pub mod bucket;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod export;
pub mod markup;
pub mod messages;
pub mod report;
pub mod timesheet;
pub mod view;
pub mod window;

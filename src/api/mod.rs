//! API client modules for external service integrations.
//!
//! Currently hosts the YouTrack client used to resolve task keys into
//! human-readable task names for the report output.

pub mod youtrack;

pub use youtrack::YouTrackConfig;

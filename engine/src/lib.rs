// Rule engine library root.
// Row rules applied to extracted invoice rows, plus their settings and the
// adapters that turn raw rows into `shared::models::Record`.

pub mod config;
pub mod data;
pub mod error;
pub mod rules;

pub use config::RescaleSettings;
pub use error::EngineError;
pub use rules::{apply_rescale, CaseRescaleRule, RescaleOutcome, RowRule, SkipReason};

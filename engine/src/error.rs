use thiserror::Error;

/// Errors raised at the edges of the engine: loading rule settings and
/// adapting raw rows. Applying a rule never produces one.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),
}

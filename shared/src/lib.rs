pub mod models;
pub mod utils;

// Row data types and numeric helpers used by the rule engine.
pub use models::{FieldValue, ParsedNumber, Record, RowContext};
pub use utils::{parse_number, round_to, try_parse_number};

// Row rules applied to extracted rows before they are saved.
pub mod case_rescale;

pub use case_rescale::{apply_rescale, CaseRescaleRule, RescaleOutcome, SkipReason};

use shared::models::{Record, RowContext};

// Common trait for all row rules
pub trait RowRule: Send + Sync {
    fn name(&self) -> &str;
    /// Mutates `record` in place. Rules never fail; inputs they cannot use are skipped.
    fn apply(&self, record: &mut Record, ctx: &RowContext);
}

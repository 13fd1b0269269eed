// Case-unit rescale: rows quoted per case ("CS") carry per-unit rates, so the
// rate fields are multiplied by the pack quantity of the same row.
use super::RowRule;
use crate::config::RescaleSettings;
use shared::models::{FieldValue, ParsedNumber, Record, RowContext};
use shared::utils::{parse_number, round_to, try_parse_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ChannelMismatch,
    FormTypeMismatch,
    UnitMismatch,
    /// Pack quantity absent, non-numeric, zero or negative.
    InvalidMultiplier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RescaleOutcome {
    /// The row was left untouched.
    Skipped(SkipReason),
    Applied {
        multiplier: f64,
        rescaled: Vec<String>,
        /// Target fields that were not numeric and kept their value.
        skipped_fields: Vec<String>,
    },
}

pub struct CaseRescaleRule {
    name: String,
    settings: RescaleSettings,
}

impl CaseRescaleRule {
    pub fn new(settings: RescaleSettings) -> Self {
        Self {
            name: format!("case_rescale({})", settings.unit_marker),
            settings,
        }
    }

    pub fn settings(&self) -> &RescaleSettings {
        &self.settings
    }

    pub fn evaluate(&self, record: &mut Record, ctx: &RowContext) -> RescaleOutcome {
        self.evaluate_flags(record, ctx.form_type.as_deref(), ctx.upload_channel.as_deref())
    }

    /// Runs the guards in order and rescales the target fields if all pass.
    /// A failed guard returns before anything in `record` is touched.
    pub fn evaluate_flags(
        &self,
        record: &mut Record,
        form_type: Option<&str>,
        upload_channel: Option<&str>,
    ) -> RescaleOutcome {
        let multiplier = match self.check_guards(record, form_type, upload_channel) {
            Ok(m) => m,
            Err(reason) => {
                tracing::debug!(rule = %self.name, ?reason, "Row skipped.");
                return RescaleOutcome::Skipped(reason);
            }
        };

        let mut rescaled = Vec::new();
        let mut skipped_fields = Vec::new();
        for field in &self.settings.target_fields {
            let value = match try_parse_number(record.get(field)) {
                Ok(v) => round_to(v * multiplier, self.settings.decimal_places),
                Err(e) => {
                    tracing::debug!(rule = %self.name, field = %field, error = %e, "Target field not numeric, left unchanged.");
                    skipped_fields.push(field.clone());
                    continue;
                }
            };
            if !value.is_finite() {
                tracing::debug!(rule = %self.name, field = %field, "Rescaled value overflowed, left unchanged.");
                skipped_fields.push(field.clone());
                continue;
            }
            record.insert(field.as_str(), FieldValue::Float(value));
            rescaled.push(field.clone());
        }

        tracing::debug!(
            rule = %self.name,
            multiplier,
            rescaled = rescaled.len(),
            skipped = skipped_fields.len(),
            "Rescaled case-unit row."
        );
        RescaleOutcome::Applied {
            multiplier,
            rescaled,
            skipped_fields,
        }
    }

    fn check_guards(
        &self,
        record: &Record,
        form_type: Option<&str>,
        upload_channel: Option<&str>,
    ) -> Result<f64, SkipReason> {
        if upload_channel != Some(self.settings.channel_marker.as_str()) {
            return Err(SkipReason::ChannelMismatch);
        }
        if form_type.unwrap_or("").trim() != self.settings.form_type {
            return Err(SkipReason::FormTypeMismatch);
        }

        let unit = record
            .get(&self.settings.unit_field)
            .and_then(FieldValue::as_text)
            .unwrap_or("");
        if unit.trim() != self.settings.unit_marker {
            return Err(SkipReason::UnitMismatch);
        }

        match parse_number(record.get(&self.settings.multiplier_field)) {
            ParsedNumber::Parsed(m) if m > 0.0 => Ok(m),
            _ => Err(SkipReason::InvalidMultiplier),
        }
    }
}

impl Default for CaseRescaleRule {
    fn default() -> Self {
        Self::new(RescaleSettings::default())
    }
}

impl RowRule for CaseRescaleRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, record: &mut Record, ctx: &RowContext) {
        self.evaluate(record, ctx);
    }
}

/// Rescales `仕切` and `本部長` by `入数` for case-unit rows of finet form 01.
///
/// Not idempotent: applying it twice to the same row multiplies twice, so
/// callers re-running it after an edit must start from the original values.
pub fn apply_rescale(record: &mut Record, form_type: Option<&str>, upload_channel: Option<&str>) {
    CaseRescaleRule::default().evaluate_flags(record, form_type, upload_channel);
}

// Settings for the case-unit rescale rule, optionally loaded from JSON.
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANNEL_MARKER: &str = "finet";
pub const DEFAULT_FORM_TYPE: &str = "01";
pub const DEFAULT_UNIT_MARKER: &str = "CS";

pub const QUANTITY_UNIT_FIELD: &str = "数量単位";
pub const PACK_QUANTITY_FIELD: &str = "入数";
pub const SHIKIRI_FIELD: &str = "仕切";
pub const HONBUCHO_FIELD: &str = "本部長";

pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
const MAX_DECIMAL_PLACES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RescaleSettings {
    /// Upload channel the rule applies to. Compared without trimming.
    pub channel_marker: String,
    /// Form identifier, compared against the trimmed form type.
    pub form_type: String,
    /// Quantity-unit value marking a case-unit row.
    pub unit_marker: String,
    pub unit_field: String,
    pub multiplier_field: String,
    pub target_fields: Vec<String>,
    pub decimal_places: u32,
}

impl Default for RescaleSettings {
    fn default() -> Self {
        RescaleSettings {
            channel_marker: DEFAULT_CHANNEL_MARKER.to_string(),
            form_type: DEFAULT_FORM_TYPE.to_string(),
            unit_marker: DEFAULT_UNIT_MARKER.to_string(),
            unit_field: QUANTITY_UNIT_FIELD.to_string(),
            multiplier_field: PACK_QUANTITY_FIELD.to_string(),
            target_fields: vec![SHIKIRI_FIELD.to_string(), HONBUCHO_FIELD.to_string()],
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl RescaleSettings {
    /// Parses settings from JSON; keys left out keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let settings: RescaleSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let required = [
            ("channel_marker", &self.channel_marker),
            ("form_type", &self.form_type),
            ("unit_marker", &self.unit_marker),
            ("unit_field", &self.unit_field),
            ("multiplier_field", &self.multiplier_field),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(EngineError::ConfigError(format!("'{}' must not be empty", name)));
            }
        }

        if self.target_fields.is_empty() {
            return Err(EngineError::ConfigError("at least one target field is required".to_string()));
        }
        for (idx, field) in self.target_fields.iter().enumerate() {
            if field.is_empty() {
                return Err(EngineError::ConfigError("target field names must not be empty".to_string()));
            }
            if *field == self.unit_field || *field == self.multiplier_field {
                return Err(EngineError::ConfigError(format!(
                    "target field '{}' overlaps the unit or multiplier field",
                    field
                )));
            }
            if self.target_fields[..idx].contains(field) {
                return Err(EngineError::ConfigError(format!("target field '{}' is listed twice", field)));
            }
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(EngineError::ConfigError(format!(
                "decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }
        Ok(())
    }
}

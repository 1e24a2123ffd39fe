//! Widget configuration and its property schema
//!
//! The host stores widget properties as a JSON bag with camelCase keys.
//! [`WidgetConfig`] is the typed, validated view of that bag, and
//! [`configuration_schema`] describes the editable fields to the host's
//! property panel.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::markup::RenderOptions;

/// Version of the stored property format
pub const DATA_VERSION: &str = "1.0";

const FONT_SIZE_UNITS: &[&str] = &["px", "pt", "rem", "em", "%"];

const FONT_SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "smaller", "larger",
];

/// Properties configured by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Name of the remote list holding alert items
    #[serde(default)]
    pub list_name: String,

    /// Size applied to alert titles (e.g. "18", "18px", "1.2em")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<String>,

    /// Free-text description kept with the properties, not rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WidgetConfig {
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            ..Default::default()
        }
    }

    pub fn with_title_font_size(mut self, size: impl Into<String>) -> Self {
        self.title_font_size = Some(size.into());
        self
    }

    /// Parse and validate the host property bag
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_name.trim().is_empty() {
            return Err(ConfigError::EmptyListName);
        }
        if let Some(raw) = &self.title_font_size {
            // Display-only setting: an unusable size is dropped, not fatal
            if !raw.trim().is_empty() && normalize_font_size(raw).is_none() {
                tracing::warn!(title_font_size = %raw, "Ignoring invalid title font size");
            }
        }
        Ok(())
    }

    /// Trimmed list name used in requests
    pub fn list_name(&self) -> &str {
        self.list_name.trim()
    }

    /// Title font size as a CSS value; bare numbers are taken as pixels.
    /// `None` when unset or not a usable size.
    pub fn title_font_size(&self) -> Option<String> {
        self.title_font_size.as_deref().and_then(normalize_font_size)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title_font_size: self.title_font_size(),
        }
    }
}

fn normalize_font_size(raw: &str) -> Option<String> {
    let value = raw.trim();

    let keyword = value.to_ascii_lowercase();
    if FONT_SIZE_KEYWORDS.contains(&keyword.as_str()) {
        return Some(keyword);
    }

    let unit = FONT_SIZE_UNITS
        .iter()
        .find(|unit| value.ends_with(*unit))
        .copied()
        .unwrap_or("");
    let number = &value[..value.len() - unit.len()];

    if !is_decimal(number) || number.parse::<f64>().ok()? <= 0.0 {
        return None;
    }

    let unit = if unit.is_empty() { "px" } else { unit };
    Some(format!("{number}{unit}"))
}

/// Digits with an optional fraction; a `.` must be followed by a digit
fn is_decimal(s: &str) -> bool {
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    match s.split_once('.') {
        Some((whole, fraction)) => {
            all_digits(whole) && !fraction.is_empty() && all_digits(fraction)
        }
        None => !s.is_empty() && all_digits(s),
    }
}

/// Property panel description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationSchema {
    pub pages: Vec<SchemaPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaPage {
    pub header: String,
    pub groups: Vec<SchemaGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaGroup {
    pub group_name: String,
    pub fields: Vec<SchemaField>,
}

/// Editable field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Property key in the host bag
    pub target_property: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl SchemaField {
    fn text(target_property: &str, label: &str, required: bool) -> Self {
        Self {
            target_property: target_property.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            required,
        }
    }
}

/// Fields the host shows for this widget
pub fn configuration_schema() -> ConfigurationSchema {
    ConfigurationSchema {
        pages: vec![SchemaPage {
            header: "Configure the alert list".to_string(),
            groups: vec![SchemaGroup {
                group_name: "Basic".to_string(),
                fields: vec![
                    SchemaField::text("listName", "List Name", true),
                    SchemaField::text("titleFontSize", "Title Font Size", false),
                ],
            }],
        }],
    }
}

//! Listing profiles
//!
//! A profile bundles every constant of one product line: title, theme code,
//! matrix layout, pricing, and the fixed field values stamped onto parent
//! and child records. Two profiles ship with the binary; any other profile
//! is read from a YAML file.

use crate::error::{ListingError, ListingResult};
use crate::matrix::MatrixShape;
use crate::types::FieldValue;
use jsonschema::JSONSchema;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Template used when no `--template` is given
pub const DEFAULT_TEMPLATE_FILE: &str = "amazon_template.xlsx";

const BUILTIN_PROFILES: &[(&str, &str)] = &[
    ("multi", include_str!("../../profiles/multi.yaml")),
    ("city", include_str!("../../profiles/city.yaml")),
];

/// Complete configuration of one product line
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub theme: String,
    pub input_shape: MatrixShape,
    #[serde(default)]
    pub input_file: Option<PathBuf>,
    /// Parent `item_name` is `"{title} - {theme}"` instead of the bare title
    #[serde(default)]
    pub parent_name_includes_theme: bool,
    #[serde(default = "default_child_name_prefix")]
    pub child_name_prefix: String,
    pub pricing: Pricing,
    #[serde(default)]
    pub sale_window: SaleWindow,
    pub parent_fields: FieldSet,
    pub child_fields: FieldSet,
    #[serde(default)]
    pub dimensions: Option<FieldSet>,
}

fn default_child_name_prefix() -> String {
    "Phone Case".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pricing {
    pub standard_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub list_price: Option<f64>,
}

/// Sale period relative to the run date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SaleWindow {
    #[serde(default = "default_starts_days_before")]
    pub starts_days_before: u32,
    #[serde(default = "default_ends_days_after")]
    pub ends_days_after: u32,
}

fn default_starts_days_before() -> u32 {
    2
}

fn default_ends_days_after() -> u32 {
    365
}

impl Default for SaleWindow {
    fn default() -> Self {
        Self {
            starts_days_before: default_starts_days_before(),
            ends_days_after: default_ends_days_after(),
        }
    }
}

/// Ordered field constants. A `None` value marks a field as absent: it is
/// never written to a record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct FieldSet(Vec<(String, Option<FieldValue>)>);

impl FieldSet {
    pub fn new(fields: Vec<(String, Option<FieldValue>)>) -> Self {
        Self(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Mapping> for FieldSet {
    type Error = String;

    fn try_from(map: Mapping) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(map.len());
        for (key, value) in map {
            let name = key
                .as_str()
                .ok_or_else(|| format!("Field name must be a string, got {:?}", key))?
                .to_string();
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(FieldValue::Text(s)),
                Value::Number(n) => Some(FieldValue::Number(n.as_f64().ok_or_else(|| {
                    format!("Field '{}' has an unrepresentable number", name)
                })?)),
                other => {
                    return Err(format!(
                        "Field '{}' must be text, a number or null, got {:?}",
                        name, other
                    ))
                }
            };
            fields.push((name, value));
        }
        Ok(Self(fields))
    }
}

/// Names of the profiles embedded in the binary
pub fn builtin_profile_names() -> Vec<&'static str> {
    BUILTIN_PROFILES.iter().map(|(name, _)| *name).collect()
}

/// YAML source of an embedded profile
pub fn builtin_profile_source(name: &str) -> Option<&'static str> {
    BUILTIN_PROFILES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, src)| *src)
}

/// Resolve a profile by built-in name or by path to a YAML file.
pub fn load_profile(name_or_path: &str) -> ListingResult<Profile> {
    if let Some(source) = builtin_profile_source(name_or_path) {
        return parse_profile(source);
    }

    let path = Path::new(name_or_path);
    let looks_like_file = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if looks_like_file || path.exists() {
        return load_profile_file(path);
    }

    Err(ListingError::Config(format!(
        "Unknown profile '{}'. Built-in profiles: {}",
        name_or_path,
        builtin_profile_names().join(", ")
    )))
}

/// Read and validate a profile YAML file
pub fn load_profile_file(path: &Path) -> ListingResult<Profile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ListingError::Config(format!("Cannot read profile {}: {}", path.display(), e))
    })?;
    parse_profile(&content)
}

/// Parse a profile document, validating it against the profile schema first.
pub fn parse_profile(content: &str) -> ListingResult<Profile> {
    let yaml: Value = serde_yaml::from_str(content)?;
    validate_against_schema(&yaml)?;
    let profile: Profile = serde_yaml::from_value(yaml)?;
    Ok(profile)
}

/// Validate YAML against the profile JSON Schema
fn validate_against_schema(yaml: &Value) -> ListingResult<()> {
    let schema_str = include_str!("../../schema/profile.schema.json");
    let schema_value: serde_json::Value = serde_json::from_str(schema_str)
        .map_err(|e| ListingError::Config(format!("Failed to parse schema: {}", e)))?;

    let compiled_schema = JSONSchema::compile(&schema_value)
        .map_err(|e| ListingError::Config(format!("Failed to compile schema: {}", e)))?;

    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| ListingError::Config(format!("Failed to convert YAML to JSON: {}", e)))?;

    if let Err(errors) = compiled_schema.validate(&json_value) {
        let error_messages: Vec<String> = errors.map(|e| format!("  - {}", e)).collect();
        return Err(ListingError::Config(format!(
            "Profile validation failed:\n{}",
            error_messages.join("\n")
        )));
    }

    Ok(())
}

//! Permissive field coercion used when reading drafts, patches and
//! persisted records.

use agromarket_types::{Category, Priority};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Name given to records persisted without a usable one.
pub(crate) const UNNAMED: &str = "Unnamed";

/// Clamps an amount to a finite, non-negative value. Anything else becomes `0`.
#[must_use]
pub fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Numbers pass through, numeric strings are parsed, everything else is `0`.
fn coerce_value(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    normalize_amount(raw)
}

/// Trimmed text; numbers are rendered, while null, blank and other values
/// fall back to [`UNNAMED`].
pub(crate) fn name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };
    Ok(if text.is_empty() { UNNAMED.to_string() } else { text })
}

pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

pub(crate) fn amount_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| coerce_value(&value)))
}

pub(crate) fn category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Category::parse_or_default(value.as_str()))
}

pub(crate) fn category_opt<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| Category::parse_or_default(value.as_str())))
}

pub(crate) fn priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Priority::parse_or_default(value.as_str()))
}

pub(crate) fn priority_opt<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| Priority::parse_or_default(value.as_str())))
}

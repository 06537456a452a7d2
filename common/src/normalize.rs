//! Turns the host's raw card configuration into a [`DisplayConfig`].

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::model::config::{DisplayConfig, FieldKey};

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid separator pattern"));
static NON_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z_]").expect("valid key pattern"));

/// Accepted spellings for each field, including the canonical names.
const FIELD_ALIASES: &[(&str, FieldKey)] = &[
    ("amount_due", FieldKey::AmountDue),
    ("amount", FieldKey::AmountDue),
    ("due_date", FieldKey::DueDate),
    ("due", FieldKey::DueDate),
    ("duedate", FieldKey::DueDate),
    ("account", FieldKey::Account),
    ("accountnumber", FieldKey::Account),
    ("account_number", FieldKey::Account),
    ("billing_period", FieldKey::BillingPeriod),
    ("billing", FieldKey::BillingPeriod),
    ("billingperiod", FieldKey::BillingPeriod),
    ("period", FieldKey::BillingPeriod),
];

/// Validates and canonicalizes a raw configuration object.
///
/// Fails only when `entity` is missing or empty. Every other malformed key is
/// dropped and the card falls back to its default for it.
pub fn normalize_config(raw: &Value) -> Result<DisplayConfig, ConfigError> {
    let entity = raw
        .get("entity")
        .and_then(Value::as_str)
        .filter(|entity| !entity.is_empty())
        .ok_or(ConfigError::MissingEntity)?;

    Ok(DisplayConfig {
        entity: entity.to_string(),
        title: non_empty(raw.get("title")),
        provider: non_empty(raw.get("provider")),
        bill_index: raw.get("bill_index").and_then(parse_bill_index),
        fields: raw.as_object().and_then(fields_input).and_then(normalize_fields),
    })
}

/// The raw value the field selection is read from: `fields` unless it is
/// missing or `null`, then the legacy `display_fields`.
pub fn fields_input(raw: &Map<String, Value>) -> Option<&Value> {
    raw.get("fields")
        .filter(|value| !value.is_null())
        .or_else(|| raw.get("display_fields"))
}

/// Keeps any non-empty string. Whitespace-only text is kept as written.
fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Reads a bill index from a number or numeric string. Only integral values
/// are kept; negatives pass through and later select nothing.
///
/// Empty or whitespace-only strings and booleans count as absent, even though
/// a JS `Number("")` or `Number(true)` would coerce them to `0` or `1`.
pub fn parse_bill_index(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_i64().map(|i| i as f64).or_else(|| n.as_f64())?,
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number.fract() != 0.0 {
        debug!("ignoring non-integer bill_index {}", number);
        return None;
    }
    if number < i64::MIN as f64 || number > i64::MAX as f64 {
        return None;
    }

    let index = number as i64;
    if index < 0 {
        warn!("bill_index {} is negative and will never match a bill", index);
    }
    Some(index)
}

/// Canonicalizes a field selection given as a list of tokens or a
/// comma-separated string.
///
/// Returns `None` when nothing resolves, meaning the default set applies.
pub fn normalize_fields(value: &Value) -> Option<Vec<FieldKey>> {
    let tokens: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(token_text).collect(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        _ => return None,
    };

    let mut fields = Vec::new();
    for token in tokens {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        match resolve_field_token(&token) {
            Some(key) if !fields.contains(&key) => fields.push(key),
            Some(_) => {}
            None => debug!("dropping unrecognized field {:?}", token),
        }
    }

    (!fields.is_empty()).then_some(fields)
}

fn token_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolves one lowercased, trimmed token to a field key.
fn resolve_field_token(token: &str) -> Option<FieldKey> {
    let underscored = SEPARATORS.replace_all(token, "_").into_owned();
    let stripped = NON_KEY_CHARS
        .replace_all(&underscored, "")
        .trim_matches('_')
        .to_string();

    [token.to_string(), underscored, stripped]
        .iter()
        .find_map(|candidate| {
            FieldKey::from_canonical(candidate).or_else(|| {
                FIELD_ALIASES
                    .iter()
                    .find(|(alias, _)| alias == candidate)
                    .map(|(_, key)| *key)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_entity_is_rejected() {
        for raw in [
            json!({}),
            json!({ "entity": "" }),
            json!({ "entity": null }),
            json!({ "entity": 5 }),
            json!("sensor.bills"),
            Value::Null,
        ] {
            assert_eq!(normalize_config(&raw), Err(ConfigError::MissingEntity));
        }
    }

    #[test]
    fn missing_entity_message() {
        assert_eq!(ConfigError::MissingEntity.to_string(), "Entity is required");
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = normalize_config(&json!({ "entity": "sensor.x" })).unwrap();
        assert_eq!(config.entity, "sensor.x");
        assert_eq!(config.title(), "Utilities");
        assert_eq!(config.provider, None);
        assert_eq!(config.bill_index, None);
        assert_eq!(config.fields, None);
    }

    #[test]
    fn type_and_unknown_keys_are_dropped() {
        let config = normalize_config(&json!({
            "type": "custom:utilities-email-tracker-card",
            "entity": "sensor.x",
            "title": "Bills",
            "color": "red"
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "entity": "sensor.x", "title": "Bills" })
        );
    }

    #[test]
    fn bill_index_accepts_integers_and_numeric_strings() {
        assert_eq!(parse_bill_index(&json!(1)), Some(1));
        assert_eq!(parse_bill_index(&json!(2.0)), Some(2));
        assert_eq!(parse_bill_index(&json!(" 3 ")), Some(3));
        assert_eq!(parse_bill_index(&json!(-1)), Some(-1));
    }

    #[test]
    fn bill_index_rejects_non_integers() {
        assert_eq!(parse_bill_index(&json!(1.5)), None);
        assert_eq!(parse_bill_index(&json!("abc")), None);
        assert_eq!(parse_bill_index(&json!("")), None);
        assert_eq!(parse_bill_index(&json!(true)), None);
        assert_eq!(parse_bill_index(&Value::Null), None);
    }

    #[test]
    fn fields_from_comma_string_with_aliases() {
        let config = normalize_config(&json!({ "entity": "sensor.x", "fields": "amount,due" })).unwrap();
        assert_eq!(config.fields, Some(vec![FieldKey::AmountDue, FieldKey::DueDate]));
    }

    #[test]
    fn fields_resolve_spacing_and_punctuation() {
        let fields = normalize_fields(&json!([
            "Billing Period",
            "due-date",
            "Account #",
            " AMOUNT_DUE "
        ]));
        assert_eq!(
            fields,
            Some(vec![
                FieldKey::BillingPeriod,
                FieldKey::DueDate,
                FieldKey::Account,
                FieldKey::AmountDue
            ])
        );
    }

    #[test]
    fn fields_deduplicate_in_first_seen_order() {
        let fields = normalize_fields(&json!("period, amount, billing_period, amount_due, due"));
        assert_eq!(
            fields,
            Some(vec![FieldKey::BillingPeriod, FieldKey::AmountDue, FieldKey::DueDate])
        );
    }

    #[test]
    fn unresolvable_fields_mean_no_override() {
        assert_eq!(normalize_fields(&json!("foo, , bar")), None);
        assert_eq!(normalize_fields(&json!([])), None);
        assert_eq!(normalize_fields(&json!(42)), None);
        assert_eq!(normalize_fields(&json!({ "amount": true })), None);
    }

    #[test]
    fn legacy_display_fields_key() {
        let config = normalize_config(&json!({
            "entity": "sensor.x",
            "display_fields": ["account"]
        }))
        .unwrap();
        assert_eq!(config.fields, Some(vec![FieldKey::Account]));

        let config = normalize_config(&json!({
            "entity": "sensor.x",
            "fields": ["due"],
            "display_fields": ["account"]
        }))
        .unwrap();
        assert_eq!(config.fields, Some(vec![FieldKey::DueDate]));
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let first = normalize_config(&json!({
            "entity": "sensor.x",
            "title": "Home",
            "provider": "Acme",
            "bill_index": "1",
            "fields": "period,amount"
        }))
        .unwrap();
        let second = normalize_config(&serde_json::to_value(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_title_and_provider_are_absent() {
        let config = normalize_config(&json!({
            "entity": "sensor.x",
            "title": "",
            "provider": ""
        }))
        .unwrap();
        assert_eq!(config.title, None);
        assert_eq!(config.provider, None);
    }

    #[test]
    fn whitespace_title_and_provider_are_kept() {
        let config = normalize_config(&json!({
            "entity": "sensor.x",
            "title": "  ",
            "provider": " "
        }))
        .unwrap();
        assert_eq!(config.title.as_deref(), Some("  "));
        assert_eq!(config.provider.as_deref(), Some(" "));
    }

    #[test]
    fn null_fields_fall_back_to_display_fields() {
        let config = normalize_config(&json!({
            "entity": "sensor.x",
            "fields": null,
            "display_fields": ["account"]
        }))
        .unwrap();
        assert_eq!(config.fields, Some(vec![FieldKey::Account]));
    }
}

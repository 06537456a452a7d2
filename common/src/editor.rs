//! Working configuration behind the card editor.
//!
//! The editor keeps the raw, possibly partial config object the host gave it.
//! Each edit updates that object and produces a [`ConfigChanged`] payload for
//! the host, which persists it and later feeds it back through the card's
//! normalizer.

use log::debug;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::model::config::FieldKey;
use crate::model::hass::HassSnapshot;
use crate::normalize::{fields_input, normalize_fields};

pub const KEY_ENTITY: &str = "entity";
pub const KEY_TITLE: &str = "title";
pub const KEY_PROVIDER: &str = "provider";
pub const KEY_BILL_INDEX: &str = "bill_index";
pub const KEY_FIELDS: &str = "fields";
pub const KEY_DISPLAY_FIELDS: &str = "display_fields";

/// Payload of the `config-changed` event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigChanged {
    pub config: Value,
}

/// Selectable entity in the editor's source picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    config: Map<String, Value>,
}

impl EditorState {
    /// Starts from the host's config. Non-objects start an empty config.
    pub fn new(config: &Value) -> Self {
        match config {
            Value::Object(map) => Self { config: map.clone() },
            _ => Self::default(),
        }
    }

    pub fn config(&self) -> Value {
        Value::Object(self.config.clone())
    }

    /// Sets `key`, or removes it when `value` is null or an empty string.
    pub fn set_value(&mut self, key: &str, value: Value) -> ConfigChanged {
        if is_blank(&value) {
            self.config.remove(key);
        } else {
            self.config.insert(key.to_string(), value);
        }
        self.changed()
    }

    pub fn set_text(&mut self, key: &str, text: &str) -> ConfigChanged {
        self.set_value(key, Value::String(text.to_string()))
    }

    /// Applies the raw text of the bill index input. Empty or non-numeric
    /// input removes the index.
    pub fn set_bill_index_input(&mut self, raw: &str) -> ConfigChanged {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .map(number_value)
            .unwrap_or(Value::Null);
        self.set_value(KEY_BILL_INDEX, value)
    }

    /// Adds or removes one field from the selection, keeping the order of
    /// the fields already chosen. An empty selection is stored as `null` so
    /// the card reverts to its default fields.
    pub fn toggle_field(&mut self, key: FieldKey, checked: bool) -> ConfigChanged {
        let mut fields = self.selected_fields();
        if checked {
            if !fields.contains(&key) {
                fields.push(key);
            }
        } else {
            fields.retain(|&field| field != key);
        }

        let value = if fields.is_empty() {
            debug!("no fields selected, reverting to defaults");
            Value::Null
        } else {
            Value::Array(fields.iter().map(|key| Value::from(key.as_str())).collect())
        };
        self.config.remove(KEY_DISPLAY_FIELDS);
        self.config.insert(KEY_FIELDS.to_string(), value);
        self.changed()
    }

    /// Fields currently checked in the form.
    pub fn selected_fields(&self) -> Vec<FieldKey> {
        fields_input(&self.config)
            .and_then(normalize_fields)
            .unwrap_or_else(|| FieldKey::DEFAULT.to_vec())
    }

    /// Form text for `key`, empty when unset.
    pub fn text(&self, key: &str) -> String {
        match self.config.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn changed(&self) -> ConfigChanged {
        ConfigChanged {
            config: self.config(),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn number_value(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Value::from(number as i64)
    } else {
        Number::from_f64(number).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Entities exposing a `bills` attribute, sorted by label.
pub fn entity_options(snapshot: &HassSnapshot) -> Vec<EntityOption> {
    let mut options: Vec<EntityOption> = snapshot
        .states
        .iter()
        .filter(|(_, state)| state.has_bills_attribute())
        .map(|(id, state)| EntityOption {
            value: id.clone(),
            label: state.friendly_name().unwrap_or(id).to_string(),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_config;
    use serde_json::json;

    #[test]
    fn empty_values_remove_keys() {
        let mut editor = EditorState::new(&json!({ "entity": "sensor.x", "title": "Home" }));
        let changed = editor.set_text(KEY_TITLE, "");
        assert_eq!(changed.config, json!({ "entity": "sensor.x" }));

        let changed = editor.set_value(KEY_ENTITY, Value::Null);
        assert_eq!(changed.config, json!({}));
    }

    #[test]
    fn edits_emit_full_config() {
        let mut editor = EditorState::new(&json!({
            "type": "custom:utilities-email-tracker-card",
            "entity": "sensor.x"
        }));
        let changed = editor.set_text(KEY_PROVIDER, "Acme");
        assert_eq!(
            changed.config,
            json!({
                "type": "custom:utilities-email-tracker-card",
                "entity": "sensor.x",
                "provider": "Acme"
            })
        );
        assert_eq!(
            serde_json::to_value(&changed).unwrap(),
            json!({ "config": changed.config })
        );
    }

    #[test]
    fn non_object_config_starts_empty() {
        let mut editor = EditorState::new(&Value::Null);
        assert_eq!(editor.set_text(KEY_ENTITY, "sensor.x").config, json!({ "entity": "sensor.x" }));
    }

    #[test]
    fn bill_index_input_parses_numbers() {
        let mut editor = EditorState::new(&json!({ "entity": "sensor.x" }));
        assert_eq!(editor.set_bill_index_input("2").config["bill_index"], json!(2));
        assert_eq!(editor.text(KEY_BILL_INDEX), "2");
        assert_eq!(editor.set_bill_index_input("1.5").config["bill_index"], json!(1.5));
        assert!(editor.set_bill_index_input("").config.get("bill_index").is_none());
        editor.set_bill_index_input("3");
        assert!(editor.set_bill_index_input("abc").config.get("bill_index").is_none());
    }

    #[test]
    fn toggling_fields_starts_from_defaults() {
        let mut editor = EditorState::new(&json!({ "entity": "sensor.x" }));
        assert_eq!(editor.selected_fields(), FieldKey::DEFAULT.to_vec());

        let changed = editor.toggle_field(FieldKey::Account, false);
        assert_eq!(
            changed.config["fields"],
            json!(["amount_due", "due_date", "billing_period"])
        );
    }

    #[test]
    fn toggling_on_reads_existing_string_fields() {
        let mut editor = EditorState::new(&json!({ "entity": "sensor.x", "fields": "due" }));
        let changed = editor.toggle_field(FieldKey::AmountDue, true);
        assert_eq!(changed.config["fields"], json!(["due_date", "amount_due"]));
    }

    #[test]
    fn toggling_on_keeps_custom_order() {
        let mut editor = EditorState::new(&json!({
            "entity": "sensor.x",
            "fields": ["account", "amount_due"]
        }));
        let changed = editor.toggle_field(FieldKey::DueDate, true);
        assert_eq!(changed.config["fields"], json!(["account", "amount_due", "due_date"]));

        let changed = editor.toggle_field(FieldKey::Account, true);
        assert_eq!(changed.config["fields"], json!(["account", "amount_due", "due_date"]));

        let changed = editor.toggle_field(FieldKey::AmountDue, false);
        assert_eq!(changed.config["fields"], json!(["account", "due_date"]));
    }

    #[test]
    fn legacy_display_fields_drive_the_checkboxes() {
        let mut editor = EditorState::new(&json!({
            "entity": "sensor.x",
            "display_fields": ["account"]
        }));
        assert_eq!(editor.selected_fields(), vec![FieldKey::Account]);

        let config = editor.toggle_field(FieldKey::Account, false).config;
        assert_eq!(config, json!({ "entity": "sensor.x", "fields": null }));
        assert_eq!(normalize_config(&config).unwrap().fields, None);
        assert_eq!(editor.selected_fields(), FieldKey::DEFAULT.to_vec());
    }

    #[test]
    fn toggling_replaces_legacy_display_fields() {
        let mut editor = EditorState::new(&json!({
            "entity": "sensor.x",
            "display_fields": "amount,account"
        }));
        let config = editor.toggle_field(FieldKey::DueDate, true).config;
        assert_eq!(
            config,
            json!({ "entity": "sensor.x", "fields": ["amount_due", "account", "due_date"] })
        );
    }

    #[test]
    fn clearing_every_field_emits_null() {
        let mut editor = EditorState::new(&json!({ "entity": "sensor.x" }));
        let mut last = None;
        for key in FieldKey::DEFAULT {
            last = Some(editor.toggle_field(key, false));
        }
        let config = last.unwrap().config;
        assert_eq!(config.get("fields"), Some(&Value::Null));
        assert_eq!(editor.selected_fields(), FieldKey::DEFAULT.to_vec());
    }

    #[test]
    fn entity_options_list_bill_sources_by_label() {
        let snapshot: HassSnapshot = serde_json::from_value(json!({
            "states": {
                "sensor.water": { "attributes": { "bills": [], "friendly_name": "Water Bills" } },
                "sensor.power": { "attributes": { "bills": null } },
                "sensor.temperature": { "attributes": { "unit": "C" } },
                "sensor.gas": { "attributes": { "bills": [], "friendly_name": "Gas Bills" } }
            }
        }))
        .unwrap();
        assert_eq!(
            entity_options(&snapshot),
            vec![
                EntityOption {
                    value: "sensor.gas".to_string(),
                    label: "Gas Bills".to_string()
                },
                EntityOption {
                    value: "sensor.water".to_string(),
                    label: "Water Bills".to_string()
                },
                EntityOption {
                    value: "sensor.power".to_string(),
                    label: "sensor.power".to_string()
                },
            ]
        );
    }
}

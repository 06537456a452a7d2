use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::bill::BillRecord;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CURRENCY: &str = "USD";

/// The slice of the host's live state that the card and editor read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HassSnapshot {
    #[serde(default)]
    pub states: BTreeMap<String, EntityState>,
    #[serde(default)]
    pub locale: LocaleSettings,
}

impl HassSnapshot {
    pub fn state(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }
}

/// State object of one host entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// Bill records from the `bills` attribute. Anything but an array reads as
    /// no bills.
    pub fn bills(&self) -> Vec<BillRecord> {
        match self.attributes.get("bills") {
            Some(Value::Array(items)) => items.iter().map(BillRecord::from_value).collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_bills_attribute(&self) -> bool {
        self.attributes.contains_key("bills")
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes
            .get("friendly_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Host locale preferences used by date and currency formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl LocaleSettings {
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|language| !language.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|currency| !currency.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }
}

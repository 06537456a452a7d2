use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider-like keys shown in the bill header, in lookup order.
pub const PROVIDER_KEYS: &[&str] = &["provider", "provider_name", "providerName", "from", "subject"];

/// Keys examined when matching a provider filter.
pub const PROVIDER_MATCH_KEYS: &[&str] = &[
    "provider",
    "provider_name",
    "providerName",
    "from",
    "subject",
    "from_address",
];

pub const ACCOUNT_KEYS: &[&str] = &["account_number", "account", "accountNumber"];
pub const SERVICE_ADDRESS_KEYS: &[&str] = &["service_address", "serviceAddress"];

/// One parsed utility bill, as written into the sensor's `bills` attribute by
/// the email tracker integration.
///
/// The upstream record shape is not stable, so the record is kept as a raw JSON
/// object and each logical attribute is read through an ordered list of key
/// spellings (see [`BillRecord::first_text`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillRecord(Map<String, Value>);

impl BillRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record from any JSON value. Non-objects become an empty record
    /// so list positions are preserved.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text form of a single key, or `None` when the value is falsy or not a scalar.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(value_text)
    }

    /// First non-empty text among `keys`, tried in order.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// Every non-empty text among `keys`, in order.
    pub fn all_text(&self, keys: &[&str]) -> Vec<String> {
        keys.iter().filter_map(|key| self.text(key)).collect()
    }

    /// Numeric value of `key`, only when the JSON value is a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }
}

impl From<Map<String, Value>> for BillRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Coerces a scalar to text. `null`, `false`, `0` and `""` count as absent,
/// and so do arrays and objects.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

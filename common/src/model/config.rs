use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Utilities";

/// One of the bill attributes a card can be told to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    AmountDue,
    DueDate,
    Account,
    BillingPeriod,
}

impl FieldKey {
    /// Fields shown when the configuration does not override them, in display order.
    pub const DEFAULT: [FieldKey; 4] = [
        FieldKey::AmountDue,
        FieldKey::DueDate,
        FieldKey::BillingPeriod,
        FieldKey::Account,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::AmountDue => "amount_due",
            FieldKey::DueDate => "due_date",
            FieldKey::Account => "account",
            FieldKey::BillingPeriod => "billing_period",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::AmountDue => "Amount Due",
            FieldKey::DueDate => "Due Date",
            FieldKey::Account => "Account",
            FieldKey::BillingPeriod => "Billing Period",
        }
    }

    /// Exact canonical-name lookup. Aliases are handled by the normalizer.
    pub fn from_canonical(name: &str) -> Option<FieldKey> {
        FieldKey::DEFAULT.into_iter().find(|key| key.as_str() == name)
    }
}

/// Validated card configuration.
///
/// Built by [`crate::normalize::normalize_config`] whenever the host replaces the
/// configuration, and left untouched until the next replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldKey>>,
}

impl DisplayConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Configured fields, or [`FieldKey::DEFAULT`] when there is no override.
    pub fn fields(&self) -> &[FieldKey] {
        self.fields.as_deref().unwrap_or(&FieldKey::DEFAULT)
    }
}

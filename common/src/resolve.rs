//! Resolves a raw bill record into display-ready text.

use crate::format::{format_amount, format_date_field, LocaleFormatter};
use crate::model::bill::{BillRecord, ACCOUNT_KEYS, PROVIDER_KEYS, SERVICE_ADDRESS_KEYS};
use crate::model::config::FieldKey;
use crate::model::hass::LocaleSettings;

pub const DEFAULT_PROVIDER: &str = "Utility";
pub const OVERDUE_STATUS: &str = "overdue";

/// Display text for every attribute of one bill. `None` means the row is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBill {
    pub provider: String,
    pub account: Option<String>,
    pub due_date: Option<String>,
    pub billing_period: Option<String>,
    pub amount_due: Option<String>,
    pub received: Option<String>,
    pub service_address: Option<String>,
    /// Lowercased status, if any.
    pub status: Option<String>,
}

impl ResolvedBill {
    pub fn field(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::AmountDue => self.amount_due.as_deref(),
            FieldKey::DueDate => self.due_date.as_deref(),
            FieldKey::Account => self.account.as_deref(),
            FieldKey::BillingPeriod => self.billing_period.as_deref(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.status.as_deref() == Some(OVERDUE_STATUS)
    }
}

pub fn resolve_bill(
    bill: &BillRecord,
    locale: &LocaleSettings,
    formatter: &dyn LocaleFormatter,
) -> ResolvedBill {
    let due_iso = bill.text("due_date_iso");
    let due_raw = bill.text("due_date");
    let received = bill.text("received");

    ResolvedBill {
        provider: bill
            .first_text(PROVIDER_KEYS)
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
        account: bill.first_text(ACCOUNT_KEYS),
        due_date: format_date_field(due_iso.as_deref(), due_raw.as_deref(), locale, formatter),
        billing_period: resolve_billing_period(bill, locale, formatter),
        amount_due: format_amount(
            bill.text("amount_due").as_deref(),
            bill.number("amount_due_value"),
            locale,
            formatter,
        ),
        received: format_date_field(received.as_deref(), received.as_deref(), locale, formatter),
        service_address: bill.first_text(SERVICE_ADDRESS_KEYS),
        status: bill.text("status").map(|status| status.to_lowercase()),
    }
}

fn resolve_billing_period(
    bill: &BillRecord,
    locale: &LocaleSettings,
    formatter: &dyn LocaleFormatter,
) -> Option<String> {
    if let Some(period) = bill.text("billing_period") {
        return Some(period);
    }
    let iso = bill.text("billing_date_iso");
    let raw = bill.text("billing_date");
    format_date_field(iso.as_deref(), raw.as_deref(), locale, formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::BasicFormatter;
    use serde_json::{json, Value};

    fn resolve(value: Value) -> ResolvedBill {
        resolve_bill(
            &BillRecord::from_value(&value),
            &LocaleSettings::default(),
            &BasicFormatter,
        )
    }

    #[test]
    fn full_bill_resolves_every_field() {
        let bill = resolve(json!({
            "provider": "Acme Water",
            "account_number": "123-456",
            "due_date_iso": "2024-02-01",
            "due_date": "02/01/2024",
            "billing_period": "Jan 1 - Jan 31",
            "amount_due": "$87.20",
            "amount_due_value": 87.2,
            "received": "2024-01-10T09:15:00Z",
            "service_address": "12 Main St",
            "status": "OVERDUE"
        }));
        assert_eq!(bill.provider, "Acme Water");
        assert_eq!(bill.account.as_deref(), Some("123-456"));
        assert_eq!(bill.due_date.as_deref(), Some("Feb 1, 2024"));
        assert_eq!(bill.billing_period.as_deref(), Some("Jan 1 - Jan 31"));
        assert_eq!(bill.amount_due.as_deref(), Some("$87.20"));
        assert_eq!(bill.received.as_deref(), Some("Jan 10, 2024"));
        assert_eq!(bill.service_address.as_deref(), Some("12 Main St"));
        assert_eq!(bill.status.as_deref(), Some("overdue"));
        assert!(bill.is_overdue());
    }

    #[test]
    fn empty_bill_uses_fallbacks() {
        let bill = resolve(json!({}));
        assert_eq!(bill.provider, "Utility");
        for key in FieldKey::DEFAULT {
            assert_eq!(bill.field(key), None);
        }
        assert_eq!(bill.status, None);
        assert!(!bill.is_overdue());
    }

    #[test]
    fn provider_falls_through_to_sender() {
        let bill = resolve(json!({ "provider": "", "from": "billing@acme.com", "subject": "Bill" }));
        assert_eq!(bill.provider, "billing@acme.com");
    }

    #[test]
    fn billing_period_falls_back_to_billing_date() {
        let bill = resolve(json!({ "billing_date_iso": "2023-12-31" }));
        assert_eq!(bill.billing_period.as_deref(), Some("Dec 31, 2023"));

        let bill = resolve(json!({ "billing_date_iso": "garbage", "billing_date": "Dec 2023" }));
        assert_eq!(bill.billing_period.as_deref(), Some("Dec 2023"));
    }

    #[test]
    fn numeric_amount_is_formatted() {
        let bill = resolve(json!({ "amount_due_value": 42.5 }));
        assert_eq!(bill.amount_due.as_deref(), Some("$42.50"));
    }

    #[test]
    fn unparseable_received_is_kept_verbatim() {
        let bill = resolve(json!({ "received": "yesterday" }));
        assert_eq!(bill.received.as_deref(), Some("yesterday"));
    }

    #[test]
    fn other_statuses_are_not_overdue() {
        let bill = resolve(json!({ "status": "Paid" }));
        assert_eq!(bill.status.as_deref(), Some("paid"));
        assert!(!bill.is_overdue());
    }
}

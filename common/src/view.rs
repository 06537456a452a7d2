//! Presentation tree for the bill card, independent of any markup library.

use crate::format::LocaleFormatter;
use crate::model::config::DisplayConfig;
use crate::model::hass::HassSnapshot;
use crate::resolve::{resolve_bill, ResolvedBill};
use crate::select::select_bills;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    /// The configured entity is not in the snapshot.
    EntityNotFound { entity: String },
    /// The entity exists but no bill survived selection.
    NoBills,
    Bills(Vec<BillView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillView {
    pub provider: String,
    pub status: Option<StatusBadge>,
    /// Rows for the configured fields, in configured order.
    pub rows: Vec<FieldRow>,
    /// Received date and service address, when known.
    pub details: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: String,
    pub overdue: bool,
}

/// Builds the card for the current snapshot.
pub fn build_card_view(
    config: &DisplayConfig,
    snapshot: &HassSnapshot,
    formatter: &dyn LocaleFormatter,
) -> CardView {
    let title = config.title().to_string();

    let Some(state) = snapshot.state(&config.entity) else {
        return CardView {
            title,
            body: CardBody::EntityNotFound {
                entity: config.entity.clone(),
            },
        };
    };

    let bills = state.bills();
    let selected = select_bills(&bills, config);
    if selected.is_empty() {
        return CardView {
            title,
            body: CardBody::NoBills,
        };
    }

    let views = selected
        .into_iter()
        .map(|bill| bill_view(&resolve_bill(bill, &snapshot.locale, formatter), config))
        .collect();

    CardView {
        title,
        body: CardBody::Bills(views),
    }
}

fn bill_view(bill: &ResolvedBill, config: &DisplayConfig) -> BillView {
    let rows = config
        .fields()
        .iter()
        .filter_map(|&key| {
            bill.field(key).map(|value| FieldRow {
                label: key.label(),
                value: value.to_string(),
            })
        })
        .collect();

    let details = [
        ("Received", bill.received.as_deref()),
        ("Service", bill.service_address.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value.map(|value| FieldRow {
            label,
            value: value.to_string(),
        })
    })
    .collect();

    BillView {
        provider: bill.provider.clone(),
        status: bill.status.as_ref().map(|text| StatusBadge {
            text: text.clone(),
            overdue: bill.is_overdue(),
        }),
        rows,
        details,
    }
}

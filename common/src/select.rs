//! Picks which bills a card shows.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::bill::{BillRecord, PROVIDER_MATCH_KEYS};
use crate::model::config::DisplayConfig;

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s-]+").expect("valid separator pattern"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("valid alphanumeric pattern"));

/// Applies the provider filter and then the bill index.
///
/// A provider filter that matches nothing is ignored rather than emptying the
/// card. An index outside the filtered list yields no bills.
pub fn select_bills<'a>(bills: &'a [BillRecord], config: &DisplayConfig) -> Vec<&'a BillRecord> {
    let mut filtered: Vec<&BillRecord> = bills.iter().collect();

    if let Some(filter) = config.provider.as_deref() {
        let matching: Vec<&BillRecord> = bills
            .iter()
            .filter(|bill| matches_provider(bill, filter))
            .collect();
        if matching.is_empty() {
            debug!("provider filter {:?} matched no bills, showing all", filter);
        } else {
            filtered = matching;
        }
    }

    match config.bill_index {
        Some(index) => usize::try_from(index)
            .ok()
            .and_then(|index| filtered.get(index).copied())
            .into_iter()
            .collect(),
        None => filtered,
    }
}

/// Case- and punctuation-insensitive match of `filter` against the bill's
/// provider-like fields.
pub fn matches_provider(bill: &BillRecord, filter: &str) -> bool {
    if bill.is_empty() || filter.is_empty() {
        return false;
    }

    let raw_filter = filter.trim().to_lowercase();
    let normalized_filter = normalize_provider(filter);

    bill.all_text(PROVIDER_MATCH_KEYS).iter().any(|candidate| {
        let lower = candidate.to_lowercase();
        if lower.contains(&raw_filter) {
            return true;
        }
        normalize_provider(candidate).contains(&normalized_filter)
    })
}

/// Lowercases and keeps only `[a-z0-9]`, so "Acme-Water Co." becomes "acmewaterco".
pub fn normalize_provider(value: &str) -> String {
    let lower = value.to_lowercase();
    let joined = SEPARATOR_RUNS.replace_all(&lower, "");
    NON_ALPHANUMERIC.replace_all(&joined, "").into_owned()
}

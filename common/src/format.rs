//! Date and currency formatting.
//!
//! The browser card formats through the host's `Intl` primitives; this module
//! defines the seam ([`LocaleFormatter`]), the fallback rules around it, and a
//! native [`BasicFormatter`] used off-browser and in tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use num_format::{Locale, ToFormattedString};

use crate::error::FormatError;
use crate::model::hass::LocaleSettings;

/// Locale-aware formatting primitives provided by the host.
pub trait LocaleFormatter {
    /// Medium date: numeric year, short month name, numeric day.
    fn format_date(&self, date: NaiveDate, language: &str) -> Result<String, FormatError>;

    /// Currency amount in `currency` (ISO 4217) for `language`.
    fn format_currency(&self, amount: f64, language: &str, currency: &str) -> Result<String, FormatError>;
}

/// Parses the ISO forms the integration writes: RFC 3339, a naive date-time,
/// or a bare `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

/// Formats an ISO date, falling back to the preformatted text.
pub fn format_date_field(
    iso: Option<&str>,
    fallback: Option<&str>,
    locale: &LocaleSettings,
    formatter: &dyn LocaleFormatter,
) -> Option<String> {
    let formatted = iso.and_then(|iso| {
        let date = parse_iso_date(iso)?;
        formatter
            .format_date(date, locale.language())
            .inspect_err(|err| debug!("date {:?} left unformatted: {}", iso, err))
            .ok()
    });

    formatted
        .or_else(|| fallback.map(str::to_string))
        .filter(|text| !text.is_empty())
}

/// Uses the display string when present, otherwise formats the numeric value as
/// currency. A formatting failure degrades to the plain number.
pub fn format_amount(
    display: Option<&str>,
    numeric: Option<f64>,
    locale: &LocaleSettings,
    formatter: &dyn LocaleFormatter,
) -> Option<String> {
    if let Some(display) = display.filter(|display| !display.is_empty()) {
        return Some(display.to_string());
    }

    let amount = numeric?;
    let formatted = formatter
        .format_currency(amount, locale.language(), locale.currency())
        .unwrap_or_else(|err| {
            debug!("amount {} left unformatted: {}", amount, err);
            plain_number(amount)
        });
    Some(formatted)
}

/// Shortest decimal text for a number, without a trailing `.0` for integers.
pub fn plain_number(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

/// Formatter with English month names and a small currency symbol table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatter;

impl BasicFormatter {
    fn currency_symbol(currency: &str) -> Option<&'static str> {
        match currency {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            "CAD" => Some("CA$"),
            "AUD" => Some("A$"),
            "INR" => Some("₹"),
            _ => None,
        }
    }

    fn minor_digits(currency: &str) -> usize {
        match currency {
            "JPY" | "KRW" => 0,
            _ => 2,
        }
    }
}

impl LocaleFormatter for BasicFormatter {
    fn format_date(&self, date: NaiveDate, _language: &str) -> Result<String, FormatError> {
        Ok(date.format("%b %-d, %Y").to_string())
    }

    fn format_currency(&self, amount: f64, language: &str, currency: &str) -> Result<String, FormatError> {
        let code = currency.to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormatError::InvalidCurrency(currency.to_string()));
        }
        if !amount.is_finite() {
            return Err(FormatError::Host(format!("{} is not a finite amount", amount)));
        }

        let locale = Locale::from_name(language).unwrap_or(Locale::en);
        let digits = Self::minor_digits(&code);
        let fixed = format!("{:.*}", digits, amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let whole: u64 = whole
            .parse()
            .map_err(|_| FormatError::Host(format!("{} is out of range", amount)))?;

        let mut number = whole.to_formatted_string(&locale);
        if !fraction.is_empty() {
            number.push_str(locale.decimal());
            number.push_str(fraction);
        }

        let sign = if amount < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9')) {
            locale.minus_sign()
        } else {
            ""
        };
        Ok(match Self::currency_symbol(&code) {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{} {}", sign, code, number),
        })
    }
}

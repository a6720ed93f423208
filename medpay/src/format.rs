//! Display formatting for amounts and dates shown to the user.

use medpay_model::Cents;

use crate::config::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    currency_symbol: String,
    date_format: String,
}

impl Formatter {
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            date_format: date_format.into(),
        }
    }

    /// `$70.00`, `-$5.00`
    pub fn money(&self, amount: Cents) -> String {
        if amount.is_negative() {
            format!("-{}{}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }

    /// Render a stored ISO date in the configured display format.
    pub fn date(&self, iso_date: &str) -> String {
        fmt_date_with_format(iso_date, &self.date_format)
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new("$", "MM/DD/YYYY")
    }
}

impl From<&Settings> for Formatter {
    fn from(settings: &Settings) -> Self {
        Self::new(&settings.currency_symbol, &settings.date_format)
    }
}

/// Substitute the `YYYY`, `MM` and `DD` placeholders of `format` with the
/// parts of an ISO `YYYY-MM-DD` date. Anything else is returned unchanged.
pub fn fmt_date_with_format(date_str: &str, format: &str) -> String {
    let mut parts = date_str.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date_str.to_string();
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return date_str.to_string();
    }

    format
        .replace("YYYY", year)
        .replace("MM", month)
        .replace("DD", day)
}

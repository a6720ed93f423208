use medpay_model::{Payment, Provider};

use crate::error::{Error, Result};
use crate::views::{provider_name, UNKNOWN};

pub const EXPORT_FILENAME: &str = "healthcare_payments.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

pub const EXPORT_HEADER: [&str; 8] = [
    "Date",
    "Provider",
    "Service",
    "Total Amount",
    "Insurance Coverage",
    "Your Cost",
    "Status",
    "Notes",
];

/// Render every payment, in collection order, as a CSV document.
///
/// Amounts are written as plain numbers (`350`, `96.5`) and dates as stored.
/// Fields containing commas, quotes or line breaks are quoted.
pub fn export_csv(payments: &[Payment], providers: &[Provider]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;

    for payment in payments {
        let total = payment.total_amount.to_plain_string();
        let insurance = payment.insurance_coverage.to_plain_string();
        let cost = payment.your_cost.to_plain_string();

        writer.write_record([
            payment.service_date.as_str(),
            provider_name(providers, payment.provider_id).unwrap_or(UNKNOWN),
            payment.service_type.as_str(),
            total.as_str(),
            insurance.as_str(),
            cost.as_str(),
            payment.status.as_str(),
            payment.notes.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

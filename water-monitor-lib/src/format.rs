//! Display formatting shared by both terminals. Precisions mirror the
//! server's units: liters carry two decimals, per-liter tariffs are
//! fractions of a tenge and need more.

use chrono::{Datelike, NaiveDate};

use crate::text::{self, Lang};

pub fn liters(value: f64) -> String {
    format!("{value:.2}")
}

/// Dashboard money readouts (today/total cost, price per liter).
pub fn currency(value: f64) -> String {
    format!("{value:.4}")
}

/// Price-per-liter cell on the bill.
pub fn price_per_liter(value: f64) -> String {
    format!("{value:.3}")
}

/// Total amount due on the bill.
pub fn bill_total(value: f64) -> String {
    format!("{value:.2}")
}

/// Cost of a single breakdown day.
pub fn row_cost(day_liters: f64, price_per_liter: f64) -> String {
    format!("{:.3}", day_liters * price_per_liter)
}

/// Long localized date for breakdown rows, e.g. «15 октября 2025 г.» or
/// "October 15, 2025". Input that is not `YYYY-MM-DD` is shown as-is.
pub fn long_date(date: &str, lang: Lang) -> String {
    let parsed = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(_) => return date.to_string(),
    };
    let month = text::month_name(lang, parsed.month());
    match lang {
        Lang::Ru => format!("{} {} {} г.", parsed.day(), month, parsed.year()),
        Lang::En => format!("{} {}, {}", month, parsed.day(), parsed.year()),
    }
}

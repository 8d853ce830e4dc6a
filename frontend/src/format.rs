//! Display formatting helpers shared by the dashboard panels.

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Formats an amount in the user's preferred currency. Unknown codes
/// fall back to `amount CODE`.
pub fn format_currency(amount: f64, code: &str) -> String {
    match currency_symbol(code) {
        Some(symbol) if amount < 0.0 => format!("-{}{:.2}", symbol, amount.abs()),
        Some(symbol) => format!("{}{:.2}", symbol, amount),
        None => format!("{:.2} {}", amount, code),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

/// "2026-08" -> "August 2026"; unparsable keys pass through.
pub fn month_year_label(month_key: &str) -> String {
    match shared::split_month_key(month_key) {
        Some((year, month)) => match month.parse::<u32>() {
            Ok(m @ 1..=12) => format!("{} {}", month_name(m), year),
            _ => month_key.to_string(),
        },
        None => month_key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_currencies_with_symbol() {
        assert_eq!(format_currency(1234.5, "INR"), "₹1234.50");
        assert_eq!(format_currency(-42.0, "USD"), "-$42.00");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        assert_eq!(format_currency(10.0, "CHF"), "10.00 CHF");
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_year_label("2026-08"), "August 2026");
        assert_eq!(month_year_label("2026-1"), "January 2026");
        assert_eq!(month_year_label("garbage"), "garbage");
    }
}

//! Money helpers for displayed prices

/// Currency symbol used on every rendered price
pub const CURRENCY_SYMBOL: &str = "£";

/// Rounds to whole pence, half away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a price as symbol plus exactly two decimals, no thousands separator
///
/// # Examples
///
/// ```
/// use contracts::shared::money::format_money;
/// assert_eq!(format_money(120.0), "£120.00");
/// assert_eq!(format_money(1234.5), "£1234.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_to_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(119.988), 119.99);
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(600.0), 600.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(120.0), "£120.00");
        assert_eq!(format_money(333.6), "£333.60");
        assert_eq!(format_money(0.0), "£0.00");
        assert_eq!(format_money(12345.678), "£12345.68");
    }
}

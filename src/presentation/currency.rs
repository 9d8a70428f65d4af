//! Currency formatting for prices shown to shoppers.

/// Formats an amount as US dollars the way an `en-US` storefront shows it.
///
/// Two decimals, comma thousands separators, and the sign ahead of the
/// dollar symbol.
///
/// # Example
///
/// ```rust
/// use jewelry_api::presentation::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-5.0), "-$5.00");
/// ```
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };

    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

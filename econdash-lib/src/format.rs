//! Display formatting for numbers shown in tables and charts.
//!
//! Output follows en-US conventions: `,` thousands separator, `.` decimal
//! point, leading `-` for negatives. Everything produced here reads back
//! through [`extract_number`](crate::table::extract_number).

/// Placeholder shown for missing values.
pub const MISSING: &str = "N/A";

/// Format with a fixed number of decimals and thousands grouping.
///
/// ```
/// use econdash_lib::format::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-0.5, 0), "-1");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let magnitude = round_half_away(value.abs(), decimals);
    let digits = format!("{:.*}", decimals, magnitude);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && magnitude != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a US dollar amount with two decimals.
///
/// ```
/// use econdash_lib::format::format_currency;
///
/// assert_eq!(format_currency(1200.0), "$1,200.00");
/// assert_eq!(format_currency(-45.5), "-$45.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    let formatted = format_number(amount, 2);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}

/// Format a value that is already expressed in percent.
///
/// ```
/// use econdash_lib::format::format_percentage;
///
/// assert_eq!(format_percentage(12.345, 1), "12.3%");
/// ```
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{}%", format_number(value, decimals))
}

/// Apply `format` to a present value, or return [`MISSING`].
pub fn format_optional(value: Option<f64>, format: impl FnOnce(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals.min(15) as i32);
    let scaled = value * factor;
    // Magnitudes this large have no fractional part left to round.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

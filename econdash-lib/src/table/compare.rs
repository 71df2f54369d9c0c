//! Cell comparators.
//!
//! Both comparators work on trimmed display text and return the ascending
//! ordering; direction is applied by the caller.

use std::cmp::Ordering;

/// Extract the number shown in a formatted cell.
///
/// Every char that is not an ASCII digit, `-` or `.` is dropped, then the
/// longest leading float literal is parsed. Text with no such prefix yields
/// `NaN`.
///
/// ```
/// use econdash_lib::table::extract_number;
///
/// assert_eq!(extract_number("$1,200"), 1200.0);
/// assert_eq!(extract_number("12.5%"), 12.5);
/// assert!(extract_number("N/A").is_nan());
/// ```
pub fn extract_number(text: &str) -> f64 {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    parse_float_prefix(&stripped)
}

/// Parse `-?digits[.digits]` from the start of `s`, ignoring the rest.
fn parse_float_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Numeric comparison of two display strings.
///
/// `NaN` sorts after every number and all `NaN`s are equal, so the order is
/// total. `-0` and `0` are equal.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    let (x, y) = (extract_number(a), extract_number(b));
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Locale-style string comparison.
///
/// Levels, in order: base letters ignoring case and accents, then accents,
/// then case (lowercase first), then raw code points. Ligatures and `ß`
/// count as their two letters at the first level.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.chars().map(lower).cmp(b.chars().map(lower)))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().map(lower) {
        match c {
            'ß' => key.push_str("ss"),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            _ => key.push(base_letter(c)),
        }
    }
    key
}

/// Strip the diacritic from a lowercase Latin letter.
fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' | 'ĺ' => 'l',
        'ñ' | 'ń' | 'ň' | 'ņ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ŕ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

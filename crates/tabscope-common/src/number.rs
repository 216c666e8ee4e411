//! Fixed-precision number rendering.
//!
//! Statistics, sums, and numeric sample cells all go through [`format_number`],
//! so a value reads the same wherever it appears in a profile.

/// Renders `value` with exactly `decimals` fractional digits and `,` thousands
/// separators. Ties round half-to-even.
///
/// Returns `None` for NaN and infinities, which have no fixed-precision form.
///
/// # Examples
///
/// ```
/// use tabscope_common::format_number;
///
/// assert_eq!(format_number(30.75, 2).as_deref(), Some("30.75"));
/// assert_eq!(format_number(1234.5, 2).as_deref(), Some("1,234.50"));
/// assert_eq!(format_number(f64::NAN, 2), None);
/// ```
pub fn format_number(value: f64, decimals: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let fixed = format!("{value:.decimals$}");
    let (sign, body) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

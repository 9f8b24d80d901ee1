//! Number formatting for reports.

/// Two decimals with comma thousands separators: `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    group_thousands(&format!("{:.2}", value))
}

/// Six decimals, the precision used for descriptive statistics.
pub fn format_stat(value: f64) -> String {
    format!("{:.6}", value)
}

/// Insert commas into the integer part of an already formatted number.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // inf / NaN
        return formatted.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

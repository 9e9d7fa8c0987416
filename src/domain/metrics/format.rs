//! Display formatting for stat cards and trend indicators.

/// Formats a Rand amount with thousands separators, rounded to the
/// nearest whole Rand: `1234567.0` becomes `"R1,234,567"`.
pub fn format_rand(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = if value.is_finite() {
        value.abs().round() as u64
    } else {
        0
    };

    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative && rounded > 0 {
        format!("-R{}", grouped)
    } else {
        format!("R{}", grouped)
    }
}

/// Formats a percentage with one decimal place: `12.34` becomes
/// `"12.3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Month-over-month change as a percentage of the previous value.
///
/// Returns `None` when there is no previous value to compare against,
/// or the previous value is zero or non-finite. Callers render the
/// change with [`format_percent`].
pub fn percent_change(current: f64, previous: Option<f64>) -> Option<f64> {
    let previous = previous?;
    if !previous.is_finite() || previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

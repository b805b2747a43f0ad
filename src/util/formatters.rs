//! Shared number formatting for labels and explanations.

/// Format a value in its shortest exact form (`1`, `-0.5`, `2.25`).
///
/// Negative zero prints as `0`.
pub fn format_value(val: f64) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    format!("{}", val)
}

/// Format a value with a fixed number of decimals, without a `-0.0`.
pub fn format_fixed(val: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, val);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Format a math point as `(x, y)` with fixed decimals.
pub fn format_point(x: f64, y: f64, decimals: usize) -> String {
    format!("({}, {})", format_fixed(x, decimals), format_fixed(y, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_form() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(-0.5), "-0.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(2.25), "2.25");
    }

    #[test]
    fn fixed_form_drops_negative_zero() {
        assert_eq!(format_fixed(-4.0, 1), "-4.0");
        assert_eq!(format_fixed(-0.04, 1), "0.0");
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_point(1.0, 5.0, 2), "(1.00, 5.00)");
    }
}

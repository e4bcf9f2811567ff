/// Glyph shown for values that are missing or not a number.
pub const PLACEHOLDER: &str = "—";

/// Renders a nullable real as fixed-point text with `digits` decimals.
///
/// `None` and `NaN` both render as [`PLACEHOLDER`]. Rounds rather than truncates.
pub fn fmt(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.*}", digits, v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Renders a 0–1 confidence as a percentage with one decimal, e.g. `87.0%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(fmt(None, 3), "—");
        assert_eq!(fmt(Some(f64::NAN), 2), "—");
    }

    #[test]
    fn values_are_rounded_not_truncated() {
        assert_eq!(fmt(Some(1.23456), 3), "1.235");
        assert_eq!(fmt(Some(10.5), 3), "10.500");
        assert_eq!(fmt(Some(500.0), 0), "500");
    }

    #[test]
    fn confidence_renders_as_percent() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }
}

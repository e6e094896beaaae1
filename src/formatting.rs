use crate::trend::Trend;

pub fn format_usd(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Whole pounds, halves rounded to even.
pub fn format_gold(value: Option<f64>) -> String {
    value.map_or_else(
        || "N/A".to_string(),
        |v| format!("{:.0}", v.round_ties_even()),
    )
}

pub fn format_cell(formatted: &str, trend: Trend) -> String {
    format!("{formatted} {trend}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_has_two_decimals() {
        assert_eq!(format_usd(Some(49.4)), "49.40");
        assert_eq!(format_usd(Some(49.516_666)), "49.52");
        assert_eq!(format_usd(None), "N/A");
    }

    #[test]
    fn gold_is_rounded() {
        assert_eq!(format_gold(Some(3225.0)), "3225");
        assert_eq!(format_gold(Some(47.744)), "48");
        assert_eq!(format_gold(Some(2.5)), "2");
        assert_eq!(format_gold(None), "N/A");
    }

    #[test]
    fn cell_keeps_blank_indicator_width() {
        assert_eq!(format_cell("N/A", Trend::Unknown), "N/A    ");
        assert_eq!(format_cell("3250", Trend::Up), "3250 🟢");
    }
}

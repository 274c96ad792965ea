//! Pure helpers turning raw metrics into the strings the dashboard shows.

/// Compact count with thousands/millions suffixes.
///
/// Values under 1000 print unchanged; larger values get one decimal and a
/// "K" or "M" suffix.
pub fn format_number(value: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value_f = value as f64;
    if value >= 1_000_000 {
        format!("{:.1}M", value_f / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value_f / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Chart tooltip form: value scaled to thousands, one decimal, "K" suffix.
pub fn format_thousands(value: f64) -> String {
    format!("{:.1}K", value / 1_000.0)
}

/// Signed percent for the subscriber delta badge ("+4.2%", "-1.0%").
pub fn format_growth(rate: f64) -> String {
    if rate >= 0.0 {
        format!("+{rate}%")
    } else {
        format!("{rate}%")
    }
}

pub fn format_percent(rate: f64) -> String {
    format!("{rate}%")
}

#[cfg(test)]
mod tests {
    use super::{format_growth, format_number, format_percent, format_thousands};

    #[test]
    fn format_number_suffixes() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn format_number_keeps_one_decimal() {
        assert_eq!(format_number(60_800), "60.8K");
        assert_eq!(format_number(1_938_039), "1.9M");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn format_thousands_scales_raw_counts() {
        assert_eq!(format_thousands(25_800.0), "25.8K");
        assert_eq!(format_thousands(5_000_000.0), "5000.0K");
    }

    #[test]
    fn format_growth_carries_sign() {
        assert_eq!(format_growth(4.2), "+4.2%");
        assert_eq!(format_growth(-1.5), "-1.5%");
        assert_eq!(format_growth(0.0), "+0%");
    }

    #[test]
    fn format_percent_prints_raw_rate() {
        assert_eq!(format_percent(4.5), "4.5%");
        assert_eq!(format_percent(3.0), "3%");
    }
}

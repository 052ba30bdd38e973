//! Shared utility functions for DFL crates.

/// Column header repair
pub mod headers {
    /// UTF-8 Danish letters as they appear when the bytes are decoded as Mac Roman.
    const MAC_ROMAN_MOJIBAKE: [(&str, &str); 6] = [
        ("√Ö", "Å"),
        ("√Ü", "Æ"),
        ("√ò", "Ø"),
        ("√•", "å"),
        ("√¶", "æ"),
        ("√∏", "ø"),
    ];

    /// Repair Mac Roman mojibake in a header, e.g. "Landet v√¶gt (kg)" -> "Landet vægt (kg)".
    pub fn repair_mojibake(header: &str) -> String {
        let mut repaired = header.to_string();
        for (broken, fixed) in MAC_ROMAN_MOJIBAKE {
            if repaired.contains(broken) {
                repaired = repaired.replace(broken, fixed);
            }
        }
        repaired
    }

    /// Normalize a header for alias matching: repaired, trimmed, BOM-stripped, lowercased.
    pub fn normalize_header(header: &str) -> String {
        repair_mojibake(header.trim_start_matches('\u{feff}').trim()).to_lowercase()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_repair_mojibake() {
            assert_eq!(repair_mojibake("√Ör"), "År");
            assert_eq!(repair_mojibake("Levende v√¶gt (kg)"), "Levende vægt (kg)");
            assert_eq!(repair_mojibake("V√¶rdi (kr)"), "Værdi (kr)");
            assert_eq!(repair_mojibake("Landingsplads"), "Landingsplads");
        }

        #[test]
        fn test_normalize_header() {
            assert_eq!(normalize_header("\u{feff} √Ör "), "år");
            assert_eq!(normalize_header("Landet v√¶gt (kg)"), "landet vægt (kg)");
        }
    }
}

/// Numeric coercion with missing-value awareness
pub mod numbers {
    /// Cell texts treated as an absent value rather than a malformed one.
    const MISSING_MARKERS: [&str; 7] = ["", "nan", "na", "n/a", "null", "-", "---"];

    /// Outcome of coercing one cell.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Coerced<T> {
        Value(T),
        /// Blank or an explicit missing marker
        Missing,
        /// Text present but not a number
        Invalid,
    }

    impl<T> Coerced<T> {
        pub fn value(self) -> Option<T> {
            match self {
                Coerced::Value(v) => Some(v),
                _ => None,
            }
        }

        pub fn is_invalid(&self) -> bool {
            matches!(self, Coerced::Invalid)
        }
    }

    pub fn is_missing(cell: &str) -> bool {
        let lowered = cell.trim().to_lowercase();
        MISSING_MARKERS.contains(&lowered.as_str())
    }

    /// Parse a float strictly. Non-finite results count as invalid.
    pub fn parse_float(cell: &str) -> Coerced<f64> {
        if is_missing(cell) {
            return Coerced::Missing;
        }
        match cell.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Coerced::Value(v),
            _ => Coerced::Invalid,
        }
    }

    /// Parse a weight or currency amount, dropping "," thousands separators first.
    pub fn parse_amount(cell: &str) -> Coerced<f64> {
        if is_missing(cell) {
            return Coerced::Missing;
        }
        parse_float(&cell.replace(',', ""))
    }

    /// Parse a year. Integral floats such as "2020.0" are accepted.
    pub fn parse_year(cell: &str) -> Coerced<i32> {
        if is_missing(cell) {
            return Coerced::Missing;
        }
        let trimmed = cell.trim();
        if let Ok(year) = trimmed.parse::<i32>() {
            return Coerced::Value(year);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64 => {
                Coerced::Value(v as i32)
            }
            _ => Coerced::Invalid,
        }
    }

    /// Format an amount rounded to whole units with "," thousands separators.
    pub fn format_amount(amount: f64) -> String {
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if rounded < 0.0 {
            grouped.insert(0, '-');
        }
        grouped
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_amount() {
            assert_eq!(format_amount(0.0), "0");
            assert_eq!(format_amount(999.4), "999");
            assert_eq!(format_amount(1200.0), "1,200");
            assert_eq!(format_amount(1234567.8), "1,234,568");
            assert_eq!(format_amount(-4500.0), "-4,500");
        }

        #[test]
        fn test_parse_amount_strips_thousands() {
            assert_eq!(parse_amount("1,234,567"), Coerced::Value(1234567.0));
            assert_eq!(parse_amount(" 12.5 "), Coerced::Value(12.5));
            assert_eq!(parse_amount(""), Coerced::Missing);
            assert_eq!(parse_amount("NaN"), Coerced::Missing);
            assert_eq!(parse_amount("lots"), Coerced::Invalid);
        }

        #[test]
        fn test_parse_float_is_strict() {
            assert_eq!(parse_float("56.1"), Coerced::Value(56.1));
            assert_eq!(parse_float("56,1"), Coerced::Invalid);
            assert_eq!(parse_float("inf"), Coerced::Invalid);
            assert_eq!(parse_float("---"), Coerced::Missing);
        }

        #[test]
        fn test_parse_year() {
            assert_eq!(parse_year("2020"), Coerced::Value(2020));
            assert_eq!(parse_year("2020.0"), Coerced::Value(2020));
            assert_eq!(parse_year("2020.5"), Coerced::Invalid);
            assert_eq!(parse_year("n/a"), Coerced::Missing);
            assert_eq!(parse_year("abc").value(), None);
        }
    }
}

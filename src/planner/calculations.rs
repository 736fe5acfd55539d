/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Mass ratio against the 100 g reference unit used by every table.
#[inline]
pub fn per_100g_factor(amount_grams: f64) -> f64 {
    amount_grams / 100.0
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Title-case a name: uppercase each letter that follows a non-letter,
/// lowercase the rest ("chicken breast" -> "Chicken Breast").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.370000000000005, 2), 12.37);
        assert_eq!(round_to(33.333, 1), 33.3);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-3.33, 1), -3.3);
    }

    #[test]
    fn test_safe_ratio_zero_denominator() {
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("OLIVE OIL"), "Olive Oil");
        assert_eq!(title_case("low-gi oats"), "Low-Gi Oats");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" peanut, ,Shellfish "), vec!["peanut", "Shellfish"]);
        assert!(split_list("").is_empty());
    }
}

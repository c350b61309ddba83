/// Adoption-style rate as a 0-100 number, guarding an empty population.
pub fn rate(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn pct(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}%", decimals, v),
        None => "0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_zero_total() {
        assert_eq!(rate(5, 0), 0.0);
    }

    #[test]
    fn test_rate_basic() {
        assert_eq!(rate(81, 90), 90.0);
    }

    #[test]
    fn test_pct_formatting() {
        assert_eq!(pct(Some(90.0), 1), "90.0%");
        assert_eq!(pct(None, 1), "0%");
    }
}

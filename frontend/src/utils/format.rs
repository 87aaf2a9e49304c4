//! Display formatting shared by the converter and records pages.

/// Gold quantities are shown with four decimal places.
pub fn format_grams(value: f64) -> String {
    format!("{value:.4}")
}

/// Rupee amounts are shown with two decimal places.
pub fn format_inr(value: f64) -> String {
    format!("₹{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grams_use_four_decimal_places() {
        assert_eq!(format_grams(0.2), "0.2000");
        assert_eq!(format_grams(1.23456), "1.2346");
    }

    #[test]
    fn inr_uses_two_decimal_places() {
        assert_eq!(format_inr(6412.1), "₹6412.10");
        assert_eq!(format_inr(100.0), "₹100.00");
    }
}

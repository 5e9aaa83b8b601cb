//! Price badge formatting
//!
//! Prices are Hong Kong dollars shown without cents, e.g. `HK$1,280`.

use super::model::MenuItem;

/// Currency prefix for price badges
pub const CURRENCY_PREFIX: &str = "HK$";

/// Amounts at or above this are shown unformatted
const MAX_GROUPED: f64 = 1e15;

/// Format an amount as whole Hong Kong dollars with thousands separators.
///
/// Halves round away from zero, so `88.5` becomes `HK$89`.
pub fn format_hkd(amount: f64) -> String {
    let rounded = amount.round();
    if rounded.abs() >= MAX_GROUPED {
        return format!("{}{}", CURRENCY_PREFIX, rounded);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = (rounded.abs() as u64).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, CURRENCY_PREFIX, grouped)
}

impl MenuItem {
    /// Whether a price badge should be rendered
    pub fn has_price(&self) -> bool {
        self.price.is_some_and(|p| !p.is_nan())
    }

    /// Formatted price badge, `None` when the dish has no usable price
    pub fn price_label(&self) -> Option<String> {
        self.price.filter(|_| self.has_price()).map(format_hkd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_price_is_shown() {
        let mut item = MenuItem::named("Pan bagnat");
        item.price = Some(0.0);
        assert!(item.has_price());
        assert_eq!(item.price_label().as_deref(), Some("HK$0"));
    }

    #[test]
    fn test_missing_or_nan_price_is_hidden() {
        let mut item = MenuItem::named("Pan bagnat");
        assert!(!item.has_price());
        assert_eq!(item.price_label(), None);

        item.price = Some(f64::NAN);
        assert!(!item.has_price());
        assert_eq!(item.price_label(), None);
    }

    #[test]
    fn test_grouping_and_rounding() {
        assert_eq!(format_hkd(88.0), "HK$88");
        assert_eq!(format_hkd(88.5), "HK$89");
        assert_eq!(format_hkd(1280.0), "HK$1,280");
        assert_eq!(format_hkd(1234567.4), "HK$1,234,567");
        assert_eq!(format_hkd(-45.0), "-HK$45");
    }
}

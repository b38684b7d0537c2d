//! Price and availability derived from a record's budget.
//!
//! Neither value is a real commercial figure. The price is the budget's
//! decimal representation truncated to its first two characters, and
//! availability is a fixed budget threshold. Both are total over every
//! budget, including budgets below 10 which yield a single-digit price.

use serde::{Deserialize, Serialize};

/// Budgets strictly above this are shown as available
pub const AVAILABILITY_THRESHOLD: u64 = 1_000_000;

/// Price shown on the details view and in purchase notifications.
///
/// `123_456_789` becomes `12`, `5` becomes `5`, `0` becomes `0`.
pub fn displayed_price(budget: u64) -> u64 {
    let digits = budget.to_string();
    let prefix = &digits[..digits.len().min(2)];
    // A u64's decimal form is pure ASCII digits, so the prefix always parses.
    prefix.parse().unwrap_or_default()
}

/// Presentational availability label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    NotAvailable,
}

impl Availability {
    pub fn from_budget(budget: u64) -> Self {
        if budget > AVAILABILITY_THRESHOLD {
            Availability::Available
        } else {
            Availability::NotAvailable
        }
    }

    /// Text shown in the availability badge
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::NotAvailable => "Not available",
        }
    }

    /// CSS modifier class for the badge
    pub fn class(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::NotAvailable => "not-available",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_truncates_to_two_digits() {
        assert_eq!(displayed_price(123_456_789), 12);
        assert_eq!(displayed_price(63_000_000), 63);
        assert_eq!(displayed_price(10), 10);
    }

    #[test]
    fn test_price_small_budgets() {
        assert_eq!(displayed_price(5), 5);
        assert_eq!(displayed_price(0), 0);
        assert_eq!(displayed_price(9), 9);
    }

    #[test]
    fn test_price_leading_digit_pairs() {
        // Budgets of different magnitude collapse onto the same price.
        assert_eq!(displayed_price(19), 19);
        assert_eq!(displayed_price(190_000_000), 19);
        assert_eq!(displayed_price(u64::MAX), 18);
    }

    #[test]
    fn test_availability_threshold() {
        assert_eq!(Availability::from_budget(1_000_001), Availability::Available);
        assert_eq!(Availability::from_budget(1_000_000), Availability::NotAvailable);
        assert_eq!(Availability::from_budget(0), Availability::NotAvailable);
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::Available.label(), "Available");
        assert_eq!(Availability::NotAvailable.label(), "Not available");
        assert_eq!(Availability::Available.class(), "available");
        assert_eq!(Availability::NotAvailable.class(), "not-available");
    }
}

//! Property-based tests for price and availability derivation
//!
//! Uses proptest to check the derived values over the whole budget range.

use movieshelf_core::pricing::AVAILABILITY_THRESHOLD;
use movieshelf_core::{displayed_price, purchase, Availability, MemoryNotifier, MovieId, MovieRecord};
use proptest::prelude::*;

proptest! {
    /// Price is the first two characters of the budget's decimal form
    #[test]
    fn price_is_two_char_prefix(budget in any::<u64>()) {
        let digits = budget.to_string();
        let expected: u64 = digits.chars().take(2).collect::<String>().parse().unwrap();
        prop_assert_eq!(displayed_price(budget), expected);
    }

    /// Prices never exceed two digits
    #[test]
    fn price_at_most_two_digits(budget in any::<u64>()) {
        prop_assert!(displayed_price(budget) < 100);
    }

    /// Single-digit budgets map to themselves
    #[test]
    fn small_budgets_unchanged(budget in 0u64..10) {
        prop_assert_eq!(displayed_price(budget), budget);
    }

    /// Availability flips exactly above the threshold
    #[test]
    fn availability_iff_above_threshold(budget in any::<u64>()) {
        let availability = Availability::from_budget(budget);
        prop_assert_eq!(availability.is_available(), budget > AVAILABILITY_THRESHOLD);
    }

    /// N purchases produce N identical notifications
    #[test]
    fn purchases_never_coalesce(times in 1usize..20, budget in any::<u64>()) {
        let movie = MovieRecord::new(MovieId::new(1), "Loop").with_budget(budget);
        let notifier = MemoryNotifier::new();

        for _ in 0..times {
            purchase(&movie, &notifier);
        }

        let sent = notifier.sent();
        prop_assert_eq!(sent.len(), times);
        let expected = format!("Successfully purchased \"Loop\" for ${}!", displayed_price(budget));
        for request in sent {
            prop_assert_eq!(&request.message, &expected);
        }
    }
}

//! Purchase simulation.
//!
//! A purchase never leaves the process: it derives the displayed price and
//! asks the notifier for a success toast. It cannot fail and keeps no state,
//! so triggering it N times produces N independent notifications.

use std::time::Duration;

use crate::notify::{NotificationKind, NotificationRequest, NotificationStyle, Notifier, ToastPosition};
use crate::pricing::displayed_price;
use crate::types::MovieRecord;

/// How long a purchase toast stays on screen
pub const PURCHASE_TOAST_DURATION: Duration = Duration::from_secs(4);

pub const PURCHASE_TOAST_BACKGROUND: &str = "#4CAF50";
pub const PURCHASE_TOAST_COLOR: &str = "#fff";
pub const PURCHASE_TOAST_ICON: &str = "\u{1F3AC}";

/// Text of the purchase confirmation
pub fn purchase_message(movie: &MovieRecord) -> String {
    format!(
        "Successfully purchased \"{}\" for ${}!",
        movie.title,
        displayed_price(movie.budget)
    )
}

/// Build the notification for a simulated purchase of `movie`
pub fn purchase_request(movie: &MovieRecord) -> NotificationRequest {
    NotificationRequest {
        kind: NotificationKind::Success,
        message: purchase_message(movie),
        duration: PURCHASE_TOAST_DURATION,
        position: ToastPosition::TopRight,
        style: NotificationStyle {
            background: Some(PURCHASE_TOAST_BACKGROUND.to_string()),
            color: Some(PURCHASE_TOAST_COLOR.to_string()),
            bold: true,
        },
        icon: Some(PURCHASE_TOAST_ICON.to_string()),
    }
}

/// Simulate buying `movie`, announcing it through `notifier`
pub fn purchase(movie: &MovieRecord, notifier: &dyn Notifier) {
    tracing::info!(movie_id = %movie.id, title = %movie.title, "Simulated purchase");
    notifier.notify(purchase_request(movie));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use crate::types::MovieId;

    #[test]
    fn test_purchase_message_format() {
        let movie = MovieRecord::new(MovieId::new(550), "Fight Club").with_budget(63_000_000);
        assert_eq!(purchase_message(&movie), "Successfully purchased \"Fight Club\" for $63!");
    }

    #[test]
    fn test_purchase_request_styling() {
        let movie = MovieRecord::new(MovieId::new(1), "Heat").with_budget(60_000_000);
        let request = purchase_request(&movie);

        assert_eq!(request.kind, NotificationKind::Success);
        assert_eq!(request.duration, Duration::from_millis(4000));
        assert_eq!(request.position, ToastPosition::TopRight);
        assert_eq!(request.style.background.as_deref(), Some("#4CAF50"));
        assert_eq!(request.style.color.as_deref(), Some("#fff"));
        assert!(request.style.bold);
        assert_eq!(request.icon.as_deref(), Some("🎬"));
    }

    #[test]
    fn test_repeated_purchases_stack() {
        let movie = MovieRecord::new(MovieId::new(2), "Tiny").with_budget(5);
        let notifier = MemoryNotifier::new();

        for _ in 0..3 {
            purchase(&movie, &notifier);
        }

        let sent = notifier.sent();
        assert_eq!(sent.len(), 3);
        for request in sent {
            assert_eq!(request.message, "Successfully purchased \"Tiny\" for $5!");
        }
    }
}

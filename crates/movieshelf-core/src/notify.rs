//! Notification interface and toast queue.
//!
//! Views never talk to a toast singleton. They hand a [`NotificationRequest`]
//! to whatever [`Notifier`] they were given: the desktop app backs it with a
//! reactive [`ToastQueue`], the CLI prints to stdout, tests record.

use std::cell::RefCell;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of notification, drives the default styling of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Info => "toast-info",
        }
    }
}

/// Screen corner a toast stacks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 4] = [
        ToastPosition::TopRight,
        ToastPosition::TopLeft,
        ToastPosition::BottomRight,
        ToastPosition::BottomLeft,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "toaster-top-right",
            ToastPosition::TopLeft => "toaster-top-left",
            ToastPosition::BottomRight => "toaster-bottom-right",
            ToastPosition::BottomLeft => "toaster-bottom-left",
        }
    }
}

/// Inline style overrides for a single toast
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationStyle {
    pub background: Option<String>,
    pub color: Option<String>,
    pub bold: bool,
}

impl NotificationStyle {
    /// Render as an inline CSS declaration list
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(ref background) = self.background {
            css.push_str(&format!("background: {};", background));
        }
        if let Some(ref color) = self.color {
            css.push_str(&format!("color: {};", color));
        }
        if self.bold {
            css.push_str("font-weight: bold;");
        }
        css
    }
}

/// Everything a notifier needs to show one transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub message: String,
    /// How long the toast stays before it dismisses itself
    pub duration: Duration,
    pub position: ToastPosition,
    pub style: NotificationStyle,
    pub icon: Option<String>,
}

impl NotificationRequest {
    /// Success notification with default styling
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration,
            position: ToastPosition::default(),
            style: NotificationStyle::default(),
            icon: None,
        }
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&self, request: NotificationRequest);
}

/// Identifier of a live toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub request: NotificationRequest,
}

/// Ordered set of live toasts, oldest first.
///
/// Ids are never reused, so a late dismissal of an already expired toast
/// cannot remove a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id
    pub fn push(&mut self, request: NotificationRequest) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, request });
        id
    }

    /// Remove a toast; returns false if it was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Notifier that only records what it was asked to show
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: RefCell<Vec<NotificationRequest>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, in order
    pub fn sent(&self) -> Vec<NotificationRequest> {
        self.sent.borrow().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, request: NotificationRequest) {
        self.sent.borrow_mut().push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str) -> NotificationRequest {
        NotificationRequest::success(message, Duration::from_secs(4))
    }

    #[test]
    fn test_queue_keeps_insertion_order() {
        let mut queue = ToastQueue::new();
        queue.push(request("first"));
        queue.push(request("second"));

        let messages: Vec<_> = queue.iter().map(|t| t.request.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::new();
        let a = queue.push(request("a"));
        let b = queue.push(request("b"));

        assert!(queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|t| t.id), Some(b));
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut queue = ToastQueue::new();
        let a = queue.push(request("a"));
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new();
        let a = queue.push(request("a"));
        queue.dismiss(a);
        let b = queue.push(request("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_style_css() {
        let style = NotificationStyle {
            background: Some("#4CAF50".to_string()),
            color: Some("#fff".to_string()),
            bold: true,
        };
        assert_eq!(style.to_css(), "background: #4CAF50;color: #fff;font-weight: bold;");
        assert_eq!(NotificationStyle::default().to_css(), "");
    }

    #[test]
    fn test_memory_notifier_records() {
        let notifier = MemoryNotifier::new();
        notifier.notify(request("hello"));
        notifier.notify(request("again"));
        assert_eq!(notifier.sent().len(), 2);
        assert_eq!(notifier.sent()[1].message, "again");
    }
}

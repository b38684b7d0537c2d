//! Shared context for Movieshelf components.
//!
//! Provides the catalog handle, the toast queue, and the pending origin to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let notifier = use_notifier();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use movieshelf_core::{MovieCatalog, NotificationRequest, Notifier, ShelfConfig, ToastQueue};

/// Shared catalog type for context.
///
/// `None` until the snapshot has been opened by the App component.
pub type SharedCatalog = Arc<dyn MovieCatalog>;

/// Get the configuration the app was started with.
pub fn get_config() -> ShelfConfig {
    crate::get_config()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Signal<Option<SharedCatalog>> {
    use_context::<Signal<Option<SharedCatalog>>>()
}

/// Hook to access the live toasts.
pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Location a details view is about to be entered from.
///
/// Listing pages set this immediately before navigating to a details route;
/// the details layout reads it once on mount and clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingOrigin {
    /// Route path to return to, e.g. `/movies?query=heat`
    pub path: String,
}

/// Hook to access the pending origin from context.
pub fn use_pending_origin() -> Signal<Option<PendingOrigin>> {
    use_context::<Signal<Option<PendingOrigin>>>()
}

/// Notifier that shows requests as self-expiring toasts.
///
/// Expiry runs on a root-level task so a toast still leaves the screen after
/// the component that fired it has unmounted.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastNotifier {
    toasts: Signal<ToastQueue>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, request: NotificationRequest) {
        let mut toasts = self.toasts;
        let duration = request.duration;
        let id = toasts.write().push(request);

        spawn_forever(async move {
            tokio::time::sleep(duration).await;
            toasts.write().dismiss(id);
        });
    }
}

/// Hook returning a notifier bound to the app's toast queue.
pub fn use_notifier() -> ToastNotifier {
    ToastNotifier {
        toasts: use_toasts(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use movieshelf_core::{purchase, MovieId, MovieRecord};

    use super::*;

    /// Signals created by the harness, handed back to the test.
    #[derive(Clone, Default)]
    struct Handles(Rc<RefCell<Option<(Signal<ToastQueue>, Signal<bool>)>>>);

    fn Harness() -> Element {
        let handles = use_hook(consume_context::<Handles>);
        let toasts = use_context_provider(|| Signal::new(ToastQueue::default()));
        let on_view = use_signal(|| true);
        use_hook(|| *handles.0.borrow_mut() = Some((toasts, on_view)));

        rsx! {
            if on_view() {
                Buyer {}
            }
        }
    }

    fn Buyer() -> Element {
        let notifier = use_notifier();
        use_hook(|| {
            let movie = MovieRecord::new(MovieId::new(603), "The Matrix").with_budget(63_000_000);
            purchase(&movie, &notifier);
        });
        rsx! {}
    }

    async fn live_toasts_after_purchase(leave_view: bool) -> usize {
        let handles = Handles::default();
        let mut dom = VirtualDom::new(Harness).with_root_context(handles.clone());
        dom.rebuild_in_place();

        let (toasts, mut on_view) = handles.0.borrow().clone().expect("harness mounted");
        assert_eq!(dom.in_runtime(|| toasts.peek().len()), 1);

        if leave_view {
            dom.in_runtime(|| on_view.set(false));
            let _ = tokio::time::timeout(Duration::from_millis(1), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }

        let _ = tokio::time::timeout(Duration::from_secs(10), dom.wait_for_work()).await;
        dom.in_runtime(|| toasts.peek().len())
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_toast_expires_while_view_mounted() {
        assert_eq!(live_toasts_after_purchase(false).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn purchase_toast_expires_after_leaving_view() {
        assert_eq!(live_toasts_after_purchase(true).await, 0);
    }
}

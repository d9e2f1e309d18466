//! Toast notifications

use dioxus::prelude::*;

use crate::config::config;
use crate::state::{Toast, ToastKind, ToastQueue};

/// Handle for showing notifications from any component
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn show(mut self, kind: ToastKind, message: impl Into<String>) {
        self.queue.write().push(kind, message);
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(mut self, id: u64) {
        self.queue.write().dismiss(id);
    }
}

/// Hook to access the toast handle
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast handle and renders the notification stack
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toasts = use_context_provider(|| Toasts { queue });
    let visible: Vec<Toast> = queue.read().toasts().to_vec();

    rsx! {
        {children}

        div {
            class: "fixed top-20 right-4 z-50 flex flex-col gap-2 w-80",
            aria_live: "polite",
            for toast in visible {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id| toasts.dismiss(id)
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    // The timer lives in this item's scope and stops if the item goes away first
    use_hook(move || {
        let timeout = config().toast_timeout_ms;
        spawn(async move {
            sleep_ms(timeout).await;
            on_dismiss.call(id);
        });
    });

    let class = match toast.kind {
        ToastKind::Success => "flex items-start justify-between gap-3 p-4 rounded-lg shadow-lg bg-green-600 text-white",
        ToastKind::Error => "flex items-start justify-between gap-3 p-4 rounded-lg shadow-lg bg-red-600 text-white",
    };

    rsx! {
        div {
            class: class,
            role: "alert",
            span { class: "text-sm font-medium", "{toast.message}" }
            button {
                class: "text-white/80 hover:text-white",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                "\u{2715}"
            }
        }
    }
}

#[cfg(feature = "web")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(all(feature = "server", not(feature = "web")))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

// Nothing to wait on without a runtime; the toast closes on click
#[cfg(not(any(feature = "web", feature = "server")))]
async fn sleep_ms(_ms: u64) {
    std::future::pending::<()>().await;
}

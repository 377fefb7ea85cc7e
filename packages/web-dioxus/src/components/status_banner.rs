//! Transient status banner
//!
//! Single-line notification channel: a new message replaces whatever is
//! currently shown, and the shown message auto-dismisses after a few
//! seconds. There is no message queue.

use dioxus::prelude::*;

/// How long a message stays on screen before auto-dismissing.
const DISMISS_MS: u32 = 4_000;

#[component]
pub fn StatusBanner(message: Signal<Option<String>>) -> Element {
    let mut message = message;
    // Each shown message bumps the epoch so only the newest timer dismisses.
    let mut epoch = use_signal(|| 0u32);

    use_effect(move || {
        if message.read().is_some() {
            let shown = *epoch.peek() + 1;
            epoch.set(shown);

            #[cfg(feature = "web")]
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
                if *epoch.peek() == shown {
                    message.set(None);
                }
            });
        }
    });

    rsx! {
        if let Some(msg) = message() {
            div {
                class: "fixed bottom-4 inset-x-0 flex justify-center px-4 pointer-events-none",
                div {
                    class: "bg-gray-900 text-white text-sm px-4 py-2 rounded shadow-lg",
                    "{msg}"
                }
            }
        }
    }
}

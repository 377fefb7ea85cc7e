//! Code-entry screen
//!
//! Resumes a pending verification by its id: the user types the OTP they
//! received and a correct code signs them in.

use dioxus::prelude::*;

use crate::auth::{use_auth, verify_code};
use crate::components::StatusBanner;
use crate::routes::Route;

/// OTP verification screen
#[component]
pub fn VerifyCode(verification_id: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut code = use_signal(String::new);
    let mut status = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_verify = move |_| {
        let typed = code().trim().to_string();

        if typed.is_empty() {
            status.set(Some("missing verification code".to_string()));
            return;
        }

        let auth = auth.clone();
        let verification_id = verification_id.clone();
        spawn(async move {
            is_pending.set(true);
            status.set(None);

            match verify_code(verification_id, typed).await {
                Ok(_user) => {
                    auth.refresh().await;
                    navigator.push(Route::Home {});
                }
                Err(e) => status.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Enter verification code" }
                    p {
                        class: "text-gray-600 text-sm",
                        "We sent a one-time passcode to your phone."
                    }
                }

                form {
                    onsubmit: handle_verify,
                    div {
                        class: "mb-4",
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{code}",
                            oninput: move |e| code.set(e.value()),
                            placeholder: "Enter 6-digit code",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500",
                        }
                    }

                    div {
                        class: "space-y-2",
                        button {
                            r#type: "submit",
                            class: "w-full bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500",
                            if is_pending() { "Verifying..." } else { "Verify & Sign In" }
                        }
                        button {
                            r#type: "button",
                            class: "w-full bg-stone-100 text-stone-700 py-2 px-4 rounded-md hover:bg-stone-200 focus:outline-none",
                            onclick: move |_| {
                                navigator.push(Route::PhoneInput {});
                            },
                            "Back"
                        }
                    }
                }
            }

            StatusBanner { message: status }
        }
    }
}

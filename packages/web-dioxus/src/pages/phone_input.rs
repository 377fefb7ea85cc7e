//! Phone input screen
//!
//! Collects a phone number and the terms consent, asks the provider to
//! deliver an OTP, and routes to the code-entry screen once it is sent.

use dioxus::prelude::*;

use crate::auth::{send_verification_code, use_auth};
use crate::components::StatusBanner;
use crate::routes::Route;
use crate::types::SendCodeOutcome;

/// Phone sign-in screen
#[component]
pub fn PhoneInput() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut phone_number = use_signal(String::new);
    let mut consent_given = use_signal(|| false);
    let mut status = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already signed in
    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Home {} }
        };
    }

    let handle_submit = move |_| {
        let phone = phone_number().trim().to_string();
        let consent = consent_given();

        if phone.is_empty() || !consent {
            status.set(Some("missing phone number or consent".to_string()));
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            is_pending.set(true);
            status.set(None);

            match send_verification_code(phone, consent).await {
                Ok(SendCodeOutcome::AwaitingCode { verification_id }) => {
                    navigator.push(Route::VerifyCode { verification_id });
                }
                Ok(SendCodeOutcome::SignedIn) => {
                    auth.refresh().await;
                    navigator.push(Route::Home {});
                }
                // The verification window lapsing is deliberately silent;
                // the user resubmits manually.
                Ok(SendCodeOutcome::TimedOut) => {}
                Err(e) => status.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    // Submit styling is keyed off consent alone; the button stays pressable
    // and invalid submissions surface the validation message instead.
    let button_class = if consent_given() {
        "w-full bg-amber-700 text-white py-3 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500"
    } else {
        "w-full bg-gray-400 text-white py-3 px-4 rounded-md focus:outline-none"
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Log in to Growell" }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Mobile number"
                        }
                        input {
                            r#type: "tel",
                            value: "{phone_number}",
                            oninput: move |e| phone_number.set(e.value()),
                            placeholder: "Enter your mobile number",
                            class: "w-full px-3 py-2 border-b border-gray-300 focus:outline-none focus:border-amber-500",
                        }
                    }

                    div {
                        class: "mb-6 flex items-start gap-2",
                        input {
                            r#type: "checkbox",
                            id: "consent",
                            checked: consent_given(),
                            oninput: move |e| consent_given.set(e.checked()),
                            class: "mt-1",
                        }
                        label {
                            r#for: "consent",
                            class: "text-xs text-gray-600",
                            "By continuing, you agree to Growell's Terms & Conditions and Privacy Policy"
                        }
                    }

                    button {
                        r#type: "submit",
                        class: button_class,
                        if is_pending() { "Sending..." } else { "Send OTP" }
                    }
                }
            }

            StatusBanner { message: status }
        }
    }
}

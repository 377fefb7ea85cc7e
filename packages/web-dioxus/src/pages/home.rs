//! Signed-in landing page

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::routes::Route;

/// Landing page shown once the user is signed in
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    if *auth.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center",
                p { class: "text-sm text-gray-500", "Loading..." }
            }
        };
    }

    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::PhoneInput {} }
        };
    }

    let phone_number = auth
        .user
        .read()
        .as_ref()
        .map(|u| u.phone_number.clone())
        .unwrap_or_default();

    let handle_logout = move |_| {
        let auth = auth.clone();
        spawn(async move {
            let _ = logout().await;
            auth.clear();
            navigator.push(Route::PhoneInput {});
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Welcome to Growell" }
                p {
                    class: "text-gray-600 mb-6",
                    "Signed in as {phone_number}"
                }
                button {
                    class: "px-4 py-2 bg-stone-100 text-stone-700 rounded-md hover:bg-stone-200",
                    onclick: handle_logout,
                    "Sign out"
                }
            }
        }
    }
}

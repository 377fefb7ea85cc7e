//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Home, PhoneInput, VerifyCode};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Sign-in flow
    #[route("/")]
    PhoneInput {},

    #[route("/verify/:verification_id")]
    VerifyCode { verification_id: String },

    // Signed-in landing
    #[route("/home")]
    Home {},
}

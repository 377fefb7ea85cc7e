//! Reusable UI components

mod status_banner;

pub use status_banner::*;

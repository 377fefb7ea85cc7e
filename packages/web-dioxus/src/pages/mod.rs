//! Page components

mod home;
mod phone_input;
mod verify_code;

pub use home::Home;
pub use phone_input::PhoneInput;
pub use verify_code::VerifyCode;

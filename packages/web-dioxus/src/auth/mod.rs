//! Authentication: session context and server functions

mod context;
mod server_fns;

pub use context::{use_auth, AuthContext, AuthProvider};
pub use server_fns::{get_current_user, logout, send_verification_code, verify_code};

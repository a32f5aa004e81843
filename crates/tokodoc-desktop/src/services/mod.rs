//! Desktop services

mod api;
mod session_store;

pub use api::api_client_from_env;
pub use session_store::KeyringSessionStore;

pub mod api_key;
pub mod password;

// Re-export public items
pub use api_key::{require_api_key, API_KEY_HEADER};
pub use password::{hash_password, verify_password};

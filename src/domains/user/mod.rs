pub mod types;
pub mod service;
pub mod repository;

// Re-export main items for other layers to use
pub use types::{User, NewUser, UpdateUser, UserResponse};
pub use service::UserService;
pub use repository::{UserRepository, SqliteUserRepository};

pub mod types;

pub use types::{Notification, NotificationType};

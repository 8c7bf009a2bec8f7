pub mod types;

pub use types::{Group, GroupRole, UserGroup};

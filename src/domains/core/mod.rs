pub mod convert;
pub mod repository;

pub use repository::{FindById, HardDeletable};

mod common;
mod config;

pub use common::AsyncTimer;
pub use config::{ConfigRepository, RepositoryError};

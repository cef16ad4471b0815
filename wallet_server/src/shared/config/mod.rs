// Shared config
pub mod app_config;

pub use app_config::*;

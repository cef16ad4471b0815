// Wallet domain models
pub mod wallet;

pub use wallet::*;

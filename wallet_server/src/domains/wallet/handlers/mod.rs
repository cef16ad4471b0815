// Wallet domain handlers
pub mod wallet_handler;

pub use wallet_handler::*;

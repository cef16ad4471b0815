// Shared errors
pub mod route_error;
pub mod wallet_error;

pub use route_error::*;
pub use wallet_error::*;

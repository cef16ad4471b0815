// Domain modules
pub mod wallet;

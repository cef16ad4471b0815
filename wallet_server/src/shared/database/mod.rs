// Database module: 인메모리 저장소 및 리포지토리
pub mod connection;
pub mod repositories;

pub use connection::*;
pub use repositories::*;

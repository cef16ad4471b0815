// Shared router: 경로 패턴 + 라우팅 테이블
pub mod pattern;
pub mod table;

pub use pattern::*;
pub use table::*;

pub mod arithmetic;
pub mod display;
pub mod poly;

pub use poly::Rq;

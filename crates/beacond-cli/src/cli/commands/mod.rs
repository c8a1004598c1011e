pub mod dispatch;
pub mod jwt;
pub mod tos;

pub use dispatch::dispatch;

pub mod course;
pub mod details;
pub mod lab;
pub mod roster;

pub use course::*;
pub use details::*;
pub use lab::*;
pub use roster::*;

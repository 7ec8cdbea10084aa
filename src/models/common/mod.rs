pub mod messages;
pub mod response;

pub use response::*;

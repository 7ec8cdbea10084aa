pub mod number;
pub mod parameter_error_handler;
pub mod password;
pub mod session;
pub mod validate;

pub use parameter_error_handler::{form_error_handler, query_error_handler};
pub use session::SessionUtils;

//! 返回给客户端的纯文本提示

pub const SUCCESS: &str = "Success";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const USER_EXISTS: &str = "A user with the provided credentials already exists";
pub const INVALID_CREDENTIALS: &str = "The username or password is incorrect";
pub const NOT_AUTHENTICATED: &str = "User is not authenticated";
pub const NO_MODULE_INSTANCES: &str = "No module instances found";
pub const NO_PROFESSORS: &str = "No professors found";
pub const PROFESSOR_OR_MODULE_NOT_FOUND: &str = "Professor or module not found";
pub const NOT_A_NUMBER: &str = "Provided rating is not a number";
pub const RATING_OUT_OF_RANGE: &str = "Rating must be between 1 and 100";
pub const MODULE_INSTANCE_NOT_FOUND: &str = "Module instance not found";
pub const ALREADY_RATED: &str = "User has already rated this Module Instance";
pub const RATING_ADDED: &str = "Added rating";

pub mod load_session;

pub use load_session::{AuthenticatedSession, LoadSession, SessionToken};

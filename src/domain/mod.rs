pub mod context;
pub mod session_id;

pub use context::RepositoryContext;
pub use session_id::{SessionId, SessionIdError};

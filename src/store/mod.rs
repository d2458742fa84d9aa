pub mod session;
pub mod workspace;

pub use session::SessionManager;
pub use workspace::{FetchToken, StoreError, Workspace};

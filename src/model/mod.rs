pub mod config;
pub mod member;
pub mod project;
pub mod session;
pub mod task;

pub use config::*;
pub use member::*;
pub use project::*;
pub use session::*;
pub use task::*;

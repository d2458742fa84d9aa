pub mod auth_ops;
pub mod task_ops;

pub mod derive;
pub mod rows;

pub use derive::*;
pub use rows::RowMenus;

pub mod check;
pub mod format;
pub mod list;

pub mod billing;
pub mod dashboard;
pub mod format;
pub mod text;

pub mod json;
pub mod sql;

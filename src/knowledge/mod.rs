pub mod base;
pub mod matcher;
pub mod sentences;

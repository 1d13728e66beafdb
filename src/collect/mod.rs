pub mod collector;
pub mod prompt;

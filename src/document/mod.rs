pub mod builder;
pub mod writer;

//! Builds a starter data contract from a versioned schema: the schema is
//! flattened into prompt order, required fields are collected from the
//! operator, and a document mirroring the schema's shape is written out.

pub mod cli;
pub mod collect;
pub mod document;
pub mod error;
pub mod schema;
pub mod suggest;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    /// Schema file for the requested version could not be read
    #[error("schema not found at {}: {source}", .path.display())]
    SchemaNotFound { path: PathBuf, source: std::io::Error },

    /// Schema file is not valid JSON
    #[error("schema at {} is not valid JSON: {source}", .path.display())]
    SchemaParse { path: PathBuf, source: serde_json::Error },

    /// Schema file is JSON but does not describe a usable schema
    #[error("malformed schema at {}: {reason}", .path.display())]
    SchemaMalformed { path: PathBuf, reason: String },

    /// Input stream ended before the field was answered
    #[error("input closed while prompting for '{identifier}'")]
    InputClosed { identifier: String },

    /// Input stream failed while prompting for a field
    #[error("failed to read value for '{identifier}': {source}")]
    InputRead { identifier: String, source: std::io::Error },

    /// Output document could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    OutputCreate { path: PathBuf, source: std::io::Error },

    #[error("failed to render document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// Operator copy of the document could not be printed
    #[error("failed to echo document: {0}")]
    Echo(#[source] std::io::Error),
}

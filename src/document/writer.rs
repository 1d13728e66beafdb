use std::io::Write;
use std::path::Path;

use serde_yaml::Mapping;

use crate::error::InitError;

pub const DEFAULT_OUTPUT: &str = "datacontract.yml";
const SEPARATOR: &str = "---";

pub fn render_document(document: &Mapping) -> Result<String, InitError> {
    Ok(serde_yaml::to_string(document)?)
}

/// Write the document to `path` (created or truncated), then print a separator
/// and the same YAML to `echo`. Returns the rendered YAML.
pub fn write_document<W: Write>(
    document: &Mapping,
    path: &Path,
    echo: &mut W,
) -> Result<String, InitError> {
    let yaml = render_document(document)?;

    std::fs::write(path, &yaml).map_err(|source| InitError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = yaml.len(), "wrote document");

    writeln!(echo, "{}", SEPARATOR).map_err(InitError::Echo)?;
    writeln!(echo, "{}", yaml).map_err(InitError::Echo)?;

    Ok(yaml)
}

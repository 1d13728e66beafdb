use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::InitError;
use crate::schema::schema_model::{FieldType, Schema, SchemaField};

// ============================================================================
// SchemaSource trait — resolves a version string to a schema tree
// ============================================================================

pub trait SchemaSource {
    fn resolve(&self, version: &str) -> Result<Schema, InitError>;
}

/// Reads `schema-<version>.json` files (JSON Schema) from a directory.
#[derive(Debug, Clone)]
pub struct FileSchemaSource {
    dir: PathBuf,
}

impl FileSchemaSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn schema_path(&self, version: &str) -> PathBuf {
        self.dir.join(schema_file_name(version))
    }
}

impl SchemaSource for FileSchemaSource {
    fn resolve(&self, version: &str) -> Result<Schema, InitError> {
        let path = self.schema_path(version);
        let content = std::fs::read_to_string(&path).map_err(|source| InitError::SchemaNotFound {
            path: path.clone(),
            source,
        })?;

        let schema = parse_json_schema(&content, &path)?;
        tracing::info!(
            path = %path.display(),
            fields = schema.field_count(),
            "resolved schema"
        );
        Ok(schema)
    }
}

pub fn schema_file_name(version: &str) -> String {
    format!("schema-{}.json", version)
}

// ============================================================================
// JSON Schema conversion
// ============================================================================

/// Convert a JSON Schema document into a schema tree. Property order follows
/// the document.
pub fn parse_json_schema(content: &str, path: &Path) -> Result<Schema, InitError> {
    let root: Value = serde_json::from_str(content).map_err(|source| InitError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })?;

    let root = root
        .as_object()
        .ok_or_else(|| malformed(path, "root is not an object"))?;

    object_schema(root, path, "")
}

fn object_schema(node: &Map<String, Value>, path: &Path, at: &str) -> Result<Schema, InitError> {
    let properties = match node.get("properties") {
        None => return Ok(Schema::default()),
        Some(Value::Object(props)) => props,
        Some(_) => return Err(malformed(path, &format!("'properties' of '{}' is not an object", display_at(at)))),
    };

    let required = required_names(node, path, at)?;

    let mut fields = Vec::with_capacity(properties.len());
    for (name, property) in properties {
        let property_at = if at.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", at, name)
        };
        let property = property
            .as_object()
            .ok_or_else(|| malformed(path, &format!("property '{}' is not an object", property_at)))?;

        let mut field = SchemaField::new(name.clone(), field_type(property, path, &property_at)?);
        field.required = required.iter().any(|r| r == name);
        field.default = property.get("default").and_then(scalar_text);
        field.description = property
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);
        fields.push(field);
    }

    Ok(Schema::new(fields))
}

fn required_names(node: &Map<String, Value>, path: &Path, at: &str) -> Result<Vec<String>, InitError> {
    let Some(required) = node.get("required") else {
        return Ok(Vec::new());
    };

    let not_strings = || malformed(path, &format!("'required' of '{}' is not a list of strings", display_at(at)));

    required
        .as_array()
        .ok_or_else(not_strings)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(not_strings))
        .collect()
}

fn field_type(property: &Map<String, Value>, path: &Path, at: &str) -> Result<FieldType, InitError> {
    let declared = match property.get("type") {
        Some(Value::String(t)) => Some(t.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null"),
        _ => None,
    };

    let field_type = match declared {
        Some("object") => FieldType::Object {
            fields: object_schema(property, path, at)?,
        },
        None if property.contains_key("properties") => FieldType::Object {
            fields: object_schema(property, path, at)?,
        },
        Some("array") => FieldType::Array,
        Some("string") => match property.get("format").and_then(Value::as_str) {
            Some("date") => FieldType::Date,
            Some("duration") => FieldType::Duration,
            _ => FieldType::String,
        },
        _ => FieldType::Other,
    };

    Ok(field_type)
}

/// Defaults are kept as text; only scalars have a meaningful text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn malformed(path: &Path, reason: &str) -> InitError {
    InitError::SchemaMalformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn display_at(at: &str) -> &str {
    if at.is_empty() { "<root>" } else { at }
}

use serde_yaml::{Mapping, Value};

use crate::collect::collector::ValueMap;
use crate::schema::schema_model::{FieldType, Schema, join_identifier};

/// Build a nested document shaped like `schema`.
///
/// Collected values win over everything else, including an object's own
/// children. Untouched fields get an empty placeholder for their type. Keys
/// follow the schema's declaration order.
pub fn build_document(values: &ValueMap, schema: &Schema) -> Mapping {
    build_level(values, schema, None)
}

fn build_level(values: &ValueMap, schema: &Schema, prefix: Option<&str>) -> Mapping {
    let mut document = Mapping::with_capacity(schema.len());

    for field in schema.fields() {
        let identifier = join_identifier(prefix, &field.field_name);
        let key = Value::String(field.field_name.clone());

        if let Some(value) = values.get(&identifier) {
            document.insert(key, Value::String(value.clone()));
            continue;
        }

        let value = match &field.field_type {
            FieldType::Object { fields } => {
                Value::Mapping(build_level(values, fields, Some(&identifier)))
            }
            FieldType::Array => Value::Sequence(Vec::new()),
            FieldType::String | FieldType::Date | FieldType::Duration => {
                Value::String(String::new())
            }
            FieldType::Other => Value::Null,
        };
        document.insert(key, value);
    }

    document
}

/// Make sure `key` is present at the root, putting it first when it is added.
pub fn ensure_root_entry(document: Mapping, key: &str, value: &str) -> Mapping {
    let key = Value::String(key.to_string());
    if document.contains_key(&key) {
        return document;
    }

    let mut with_entry = Mapping::with_capacity(document.len() + 1);
    with_entry.insert(key, Value::String(value.to_string()));
    with_entry.extend(document);
    with_entry
}

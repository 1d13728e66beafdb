use std::path::PathBuf;

use datacontract_init::schema::schema_model::{FieldType, Schema, SchemaField};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// `{info: {id: string, required}, title: string, optional}`
pub fn info_title_schema() -> Schema {
    Schema::new(vec![
        SchemaField::object(
            "info",
            vec![SchemaField::new("id", FieldType::String).required()],
        ),
        SchemaField::new("title", FieldType::String),
    ])
}

pub fn identifiers(schema: &Schema) -> Vec<String> {
    schema
        .flattened()
        .into_iter()
        .map(|f| f.identifier)
        .collect()
}

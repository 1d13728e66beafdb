use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An ordered sequence of fields at one level of the schema tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

/// One node in the schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Local key used when emitting the document
    pub field_name: String,

    #[serde(flatten)]
    pub field_type: FieldType,

    #[serde(default)]
    pub required: bool,

    /// Literal default value; empty means no default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Field type. Only objects own a nested schema, so the child list cannot
/// exist on any other type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    Object {
        #[serde(default)]
        fields: Schema,
    },
    Array,
    String,
    Date,
    Duration,
    Other,
}

/// A field as it appears in the flattened prompt order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatField<'a> {
    /// Dot-joined path from the root, e.g. `info.id`
    pub identifier: String,
    pub field: &'a SchemaField,
}

// ============================================================================
// SchemaField
// ============================================================================

impl SchemaField {
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
            required: false,
            default: None,
            description: None,
        }
    }

    pub fn object(field_name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self::new(field_name, FieldType::Object { fields: Schema::new(fields) })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The declared default, if it is non-empty.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|d| !d.is_empty())
    }

    pub fn object_schema(&self) -> Option<&Schema> {
        match &self.field_type {
            FieldType::Object { fields } => Some(fields),
            _ => None,
        }
    }
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Object { .. } => "object",
            FieldType::Array => "array",
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Duration => "duration",
            FieldType::Other => "other",
        }
    }

    /// Objects and arrays hold other values and are never prompted directly.
    pub fn is_container(&self) -> bool {
        matches!(self, FieldType::Object { .. } | FieldType::Array)
    }
}

// ============================================================================
// Schema
// ============================================================================

impl Schema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in the whole tree, nested object fields included.
    pub fn field_count(&self) -> usize {
        self.fields
            .iter()
            .map(|f| 1 + f.object_schema().map_or(0, Schema::field_count))
            .sum()
    }

    /// Sort every level of the tree: required fields first, then by field name.
    /// The sort is stable, so sorting a sorted schema changes nothing.
    pub fn sort(&mut self) {
        self.fields.sort_by(field_order);
        for field in &mut self.fields {
            if let FieldType::Object { fields } = &mut field.field_type {
                fields.sort();
            }
        }
    }

    /// Sorted copy, leaving declaration order intact on `self`.
    pub fn sorted(&self) -> Schema {
        let mut schema = self.clone();
        schema.sort();
        schema
    }

    /// Depth-first list of every field in the tree. Object fields come right
    /// before their children; array element schemas are not descended into.
    pub fn flattened(&self) -> Vec<FlatField<'_>> {
        let mut out = Vec::with_capacity(self.field_count());
        self.flatten_into(None, &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: Option<&str>, out: &mut Vec<FlatField<'a>>) {
        for field in &self.fields {
            let identifier = join_identifier(prefix, &field.field_name);
            let children = field.object_schema();

            out.push(FlatField {
                identifier: identifier.clone(),
                field,
            });

            if let Some(children) = children {
                children.flatten_into(Some(&identifier), out);
            }
        }
    }
}

fn field_order(a: &SchemaField, b: &SchemaField) -> Ordering {
    b.required
        .cmp(&a.required)
        .then_with(|| a.field_name.cmp(&b.field_name))
}

/// Join a parent identifier and a local field name with `.`.
pub fn join_identifier(prefix: Option<&str>, field_name: &str) -> String {
    match prefix {
        Some(p) => format!("{}.{}", p, field_name),
        None => field_name.to_string(),
    }
}

use serde::{Deserialize, Serialize};

/// One named attribute of a metadata schema, located inside the metadata JSON
/// blob by its JSON-path expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSchemaField {
    pub field_name: String,
    pub json_path: String,
}

/// A virtual table definition over the metadata column. Loaded by the external
/// catalog store; the rewriter only ever borrows it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSchema {
    pub metadata_schema_id: i64,
    pub schema_name: String,
    pub fields: Vec<MetadataSchemaField>,
}

impl MetadataSchema {
    /// Exact, case-sensitive field lookup. Field names are unique within one
    /// schema only; there is no global field namespace.
    pub fn field(&self, field_name: &str) -> Option<&MetadataSchemaField> {
        self.fields
            .iter()
            .find(|field| field.field_name == field_name)
    }
}

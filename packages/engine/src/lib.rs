mod catalog;
mod error;
mod errors;
mod sql;

pub use catalog::{MetadataSchema, MetadataSchemaField};
pub use error::CatalogError;
pub use errors::ErrorCode;
pub use sql::{rewrite_metadata_query, rewrite_query};

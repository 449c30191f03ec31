use std::collections::HashMap;

use sqlparser::ast::Ident;

use crate::errors::malformed_identifier_error;
use crate::{CatalogError, MetadataSchema, MetadataSchemaField};

/// A filter identifier that resolved to a virtual-schema field, together with
/// the qualifier the rewritten predicate should address the metadata column
/// through.
#[derive(Debug)]
pub(crate) struct ResolvedField<'a> {
    pub qualifier: String,
    pub field: &'a MetadataSchemaField,
}

/// Resolves a one- or two-segment filter identifier against the schemas in
/// play. `Ok(None)` means the identifier is not a virtual field and the
/// predicate passes through untouched. Any other segment count is a fatal
/// input-shape error.
///
/// Unqualified identifiers are resolved first-match-wins over the supplied
/// slice, so callers control precedence through schema order.
pub(crate) fn resolve_metadata_field<'a>(
    segments: &[Ident],
    schemas: &'a [MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Result<Option<ResolvedField<'a>>, CatalogError> {
    match segments {
        [field_name] => Ok(resolve_unqualified(&field_name.value, schemas)),
        [qualifier, field_name] => Ok(resolve_qualified(
            &qualifier.value,
            &field_name.value,
            schemas,
            table_aliases,
        )),
        _ => {
            let identifier = segments
                .iter()
                .map(|segment| segment.value.as_str())
                .collect::<Vec<_>>()
                .join(".");
            Err(malformed_identifier_error(&identifier))
        }
    }
}

fn resolve_qualified<'a>(
    qualifier: &str,
    field_name: &str,
    schemas: &'a [MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Option<ResolvedField<'a>> {
    // An undeclared alias is taken as the schema name itself, so unaliased
    // `Person.name` style references still resolve.
    let schema_name = table_aliases
        .get(qualifier)
        .map(String::as_str)
        .unwrap_or(qualifier);
    let schema = schemas
        .iter()
        .find(|schema| schema.schema_name == schema_name)?;
    let field = schema.field(field_name)?;
    Some(ResolvedField {
        qualifier: qualifier.to_string(),
        field,
    })
}

fn resolve_unqualified<'a>(
    field_name: &str,
    schemas: &'a [MetadataSchema],
) -> Option<ResolvedField<'a>> {
    schemas.iter().find_map(|schema| {
        schema.field(field_name).map(|field| ResolvedField {
            // The schema name doubles as the CTE name, so it is a valid
            // qualifier for an unaliased reference.
            qualifier: schema.schema_name.clone(),
            field,
        })
    })
}

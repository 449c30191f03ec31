use std::collections::HashMap;

use sqlparser::ast::Select;

use crate::sql::{
    parse_single_select, render_from_clause, rewrite_filter_expr, write_common_table_expressions,
};
use crate::{CatalogError, MetadataSchema};

/// Rewrites an already-parsed SELECT against the supplied metadata schemas
/// into executable SQL: a CTE per schema, the original FROM clause verbatim,
/// and the filter tree with virtual-field comparisons replaced by JSON-path
/// containment tests.
///
/// A failed rewrite never returns partial SQL.
pub fn rewrite_query(
    select: &Select,
    schemas: &[MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Result<String, CatalogError> {
    let mut sql = String::new();
    if !schemas.is_empty() {
        sql.push_str(&write_common_table_expressions(schemas));
        sql.push(' ');
    }
    sql.push_str("SELECT * FROM ");
    sql.push_str(&render_from_clause(&select.from));
    if let Some(selection) = &select.selection {
        sql.push_str(" WHERE ");
        sql.push_str(&rewrite_filter_expr(selection, schemas, table_aliases)?);
    }
    Ok(sql)
}

/// Convenience entry for callers holding SQL text instead of a parsed tree.
/// Accepts exactly one plain SELECT statement.
pub fn rewrite_metadata_query(
    sql: &str,
    schemas: &[MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Result<String, CatalogError> {
    let select = parse_single_select(sql)?;
    rewrite_query(&select, schemas, table_aliases)
}

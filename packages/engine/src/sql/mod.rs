mod ast_utils;
mod escaping;
mod projection;
mod query;
mod resolver;
mod rewrite;

pub(crate) use ast_utils::{parse_single_select, render_from_clause};
pub(crate) use escaping::escape_sql_string;
pub(crate) use projection::write_common_table_expressions;
pub(crate) use resolver::{resolve_metadata_field, ResolvedField};
pub(crate) use rewrite::rewrite_filter_expr;
pub use query::{rewrite_metadata_query, rewrite_query};

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use sqlparser::ast::{BinaryOperator, Expr, Ident, UnaryOperator, Value as SqlValue};

use crate::sql::{escape_sql_string, resolve_metadata_field, ResolvedField};
use crate::{CatalogError, MetadataSchema};

/// Renders a WHERE-clause expression tree back to SQL text, substituting every
/// comparison whose left operand resolves to a virtual-schema field with a
/// JSON-path containment test against that schema's metadata column. The
/// logical grouping of the input is preserved: AND/OR nodes parenthesize
/// themselves, so nesting in the output mirrors the tree exactly.
pub(crate) fn rewrite_filter_expr(
    expr: &Expr,
    schemas: &[MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Result<String, CatalogError> {
    match expr {
        Expr::BinaryOp {
            left,
            op: op @ (BinaryOperator::And | BinaryOperator::Or),
            right,
        } => {
            let lhs = rewrite_filter_expr(left, schemas, table_aliases)?;
            let rhs = rewrite_filter_expr(right, schemas, table_aliases)?;
            Ok(format!("( {lhs} {op} {rhs} )"))
        }
        Expr::UnaryOp {
            op: UnaryOperator::Not,
            expr: inner,
        } => {
            let child = rewrite_filter_expr(inner, schemas, table_aliases)?;
            Ok(format!("NOT {child}"))
        }
        // Source parentheses are transparent: logical nodes bracket themselves,
        // so rendering the inner tree keeps grouping without doubled brackets.
        Expr::Nested(inner) => rewrite_filter_expr(inner, schemas, table_aliases),
        Expr::BinaryOp { left, op, right } if is_comparison_operator(op) => {
            rewrite_comparison(expr, left, op, right, schemas, table_aliases)
        }
        // Anything else (IS NULL, LIKE, IN, plain expressions) is not a
        // rewrite target; unknown predicates are assumed to hit native columns.
        other => Ok(other.to_string()),
    }
}

fn rewrite_comparison(
    comparison: &Expr,
    left: &Expr,
    op: &BinaryOperator,
    right: &Expr,
    schemas: &[MetadataSchema],
    table_aliases: &HashMap<String, String>,
) -> Result<String, CatalogError> {
    let segments: &[Ident] = match left {
        Expr::Identifier(ident) => std::slice::from_ref(ident),
        Expr::CompoundIdentifier(idents) => idents.as_slice(),
        _ => return Ok(comparison.to_string()),
    };
    let Some(ResolvedField { qualifier, field }) =
        resolve_metadata_field(segments, schemas, table_aliases)?
    else {
        return Ok(comparison.to_string());
    };

    let body = format!(
        "{json_path} {op} {literal}",
        json_path = field.json_path,
        op = json_path_operator(op),
        literal = json_path_literal(right),
    );
    Ok(format!(
        "{qualifier}.metadata @@ '{body}'",
        body = escape_sql_string(&body),
    ))
}

fn is_comparison_operator(op: &BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq
    )
}

/// `=` becomes the JSON-path equality test `==`; every other comparison keeps
/// its native token.
fn json_path_operator(op: &BinaryOperator) -> String {
    match op {
        BinaryOperator::Eq => "==".to_string(),
        other => other.to_string(),
    }
}

/// Literals inside the JSON-path string use double quotes so the surrounding
/// single-quoted SQL string stays validly delimited.
fn json_path_literal(expr: &Expr) -> String {
    let Expr::Value(value) = expr else {
        return expr.to_string();
    };
    match &value.value {
        SqlValue::SingleQuotedString(text) | SqlValue::DoubleQuotedString(text) => {
            JsonValue::String(text.clone()).to_string()
        }
        SqlValue::Number(text, _) => text.clone(),
        SqlValue::Boolean(boolean) => boolean.to_string(),
        SqlValue::Null => "null".to_string(),
        other => other.to_string(),
    }
}

use sqlparser::ast::{Select, SetExpr, Statement, TableWithJoins};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

use crate::errors::{sql_parse_error, unsupported_statement_error};
use crate::CatalogError;

pub(crate) fn parse_single_select(sql: &str) -> Result<Select, CatalogError> {
    let mut statements = Parser::parse_sql(&GenericDialect {}, sql)
        .map_err(|error| sql_parse_error(&error.to_string()))?;
    if statements.len() != 1 {
        return Err(unsupported_statement_error(
            "expected a single SELECT statement",
        ));
    }
    let statement = statements.remove(0);
    let Statement::Query(query) = statement else {
        return Err(unsupported_statement_error("expected a SELECT statement"));
    };
    match *query.body {
        SetExpr::Select(select) => Ok(*select),
        _ => Err(unsupported_statement_error(
            "expected a plain SELECT statement",
        )),
    }
}

/// The FROM clause is copied through the AST's default rendering, never
/// rewritten.
pub(crate) fn render_from_clause(from: &[TableWithJoins]) -> String {
    from.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

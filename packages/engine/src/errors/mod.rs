use crate::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MalformedIdentifier,
    SqlParse,
    UnsupportedStatement,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedIdentifier => "CATALOG_ERROR_MALFORMED_IDENTIFIER",
            Self::SqlParse => "CATALOG_ERROR_SQL_PARSE",
            Self::UnsupportedStatement => "CATALOG_ERROR_UNSUPPORTED_STATEMENT",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::MalformedIdentifier,
            Self::SqlParse,
            Self::UnsupportedStatement,
        ]
    }
}

fn build_error(code: ErrorCode, title: &str, description: &str) -> CatalogError {
    CatalogError::new(code.as_str(), title, description)
}

pub(crate) fn malformed_identifier_error(identifier: &str) -> CatalogError {
    build_error(
        ErrorCode::MalformedIdentifier,
        "Unexpected identifier shape",
        &format!(
            "`{identifier}` has an unsupported number of segments. Filter identifiers must be \
             either a bare field name or `alias.field`."
        ),
    )
}

pub(crate) fn sql_parse_error(detail: &str) -> CatalogError {
    build_error(ErrorCode::SqlParse, "Could not parse SQL", detail)
}

pub(crate) fn unsupported_statement_error(detail: &str) -> CatalogError {
    build_error(
        ErrorCode::UnsupportedStatement,
        "Unsupported statement",
        detail,
    )
}

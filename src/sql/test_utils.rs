//! Test utilities for SQL emission validation.
//!
//! Parses emitted SQL with sqlparser-rs to confirm the output is
//! syntactically valid, not just string-equal to an expectation.

use sqlparser::dialect::{GenericDialect, MsSqlDialect};
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
///
/// Bracket-quoting dialects are checked with the SQL Server grammar.
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Standard | Dialect::TSql => Box::new(MsSqlDialect {}),
        Dialect::Ansi => Box::new(GenericDialect {}),
    };

    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_sql() {
        validate_sql("SELECT * FROM Users", Dialect::Standard).unwrap();
        validate_sql("SELECT [Name] FROM [Users]", Dialect::TSql).unwrap();
        validate_sql("SELECT \"Name\" FROM \"Users\"", Dialect::Ansi).unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        let result = validate_sql("SELEC * FORM users", Dialect::Standard);
        assert!(result.is_err());
    }
}

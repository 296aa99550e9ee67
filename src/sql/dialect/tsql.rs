//! T-SQL (SQL Server / Azure SQL) dialect.
//!
//! Differences from the standard rendering:
//! - Square bracket quoting for tables as well as columns, with `]` escaped
//! - Single-quoted string constants, `N'...'` for non-ASCII
//! - Booleans as `1`/`0`
//! - `NULL` constants render as the keyword

use super::helpers;
use super::SqlDialect;
use crate::error::RenderResult;
use crate::sql::expr::{ConstantExpression, Value};
use crate::sql::field::TableField;
use crate::sql::source::Table;

/// T-SQL (SQL Server) dialect.
#[derive(Debug, Clone, Copy)]
pub struct TSql;

impl SqlDialect for TSql {
    fn name(&self) -> &'static str {
        "tsql"
    }

    fn render_table_field(&self, field: &TableField) -> RenderResult {
        Ok(helpers::quote_bracket(&field.name))
    }

    fn render_table(&self, table: &Table) -> RenderResult {
        Ok(helpers::quote_bracket(&table.name))
    }

    fn render_constant(&self, expression: &ConstantExpression) -> RenderResult {
        match expression.value() {
            Value::String(s) if !s.is_ascii() => Ok(helpers::quote_string_unicode(s)),
            Value::String(s) => Ok(helpers::quote_string_single(s)),
            Value::Bool(b) => Ok(helpers::format_bool_numeric(*b).into()),
            Value::Null => Ok("NULL".into()),
            other => helpers::format_value_plain(other),
        }
    }
}

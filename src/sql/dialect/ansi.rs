//! ANSI SQL dialect.
//!
//! ANSI has no TOP prefix, so the row limit moves to a trailing
//! `FETCH FIRST` clause. This is the one built-in dialect that overrides
//! `render_select` itself.

use super::helpers;
use super::SqlDialect;
use crate::error::RenderResult;
use crate::sql::expr::{ConstantExpression, Value};
use crate::sql::field::TableField;
use crate::sql::select::Select;
use crate::sql::source::{Join, Table};
use crate::sql::top::{Top, TopKind};

/// ANSI SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct Ansi;

impl SqlDialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn render_select(&self, select: &Select) -> RenderResult {
        let mut sql = String::from("SELECT ");

        if !select.fields.is_empty() {
            sql.push_str(&self.render_fields(&select.fields)?);
        }

        if !select.joins.is_empty() {
            sql.push_str(&self.render_joins(&select.joins)?);
        }

        if let Some(top) = &select.top {
            sql.push('\n');
            sql.push_str(&top.render(self)?);
        }

        Ok(sql)
    }

    fn render_top(&self, top: &Top) -> RenderResult {
        Ok(match top.kind {
            TopKind::Count => format!("FETCH FIRST {} ROWS ONLY", top.value),
            TopKind::Percent => format!("FETCH FIRST {} PERCENT ROWS ONLY", top.value),
        })
    }

    fn render_table_field(&self, field: &TableField) -> RenderResult {
        Ok(helpers::quote_double(&field.name))
    }

    fn render_constant(&self, expression: &ConstantExpression) -> RenderResult {
        match expression.value() {
            Value::String(s) => Ok(helpers::quote_string_single(s)),
            Value::Bool(b) => Ok(if *b { "TRUE" } else { "FALSE" }.into()),
            Value::Null => Ok("NULL".into()),
            other => helpers::format_value_plain(other),
        }
    }

    fn render_joins(&self, joins: &[Join]) -> RenderResult {
        let mut sql = String::from("\nFROM ");
        for join in joins {
            sql.push_str(&self.render_join(join)?);
        }
        Ok(sql)
    }

    fn render_table(&self, table: &Table) -> RenderResult {
        Ok(helpers::quote_double(&table.name))
    }
}

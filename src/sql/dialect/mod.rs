//! SQL dialect definitions and rendering rules.
//!
//! Rendering is double-dispatched: every model node owns a `render` method
//! that picks the dialect operation matching its variant, and every dialect
//! operation receives the node it renders. The default bodies on
//! [`SqlDialect`] produce the standard output:
//!
//! ```text
//! statement  := "SELECT " [top] [fieldlist] [fromclause]
//! top        := "TOP " number " " | "TOP " number " PERCENT "
//! fieldlist  := field (", " field)*
//! field      := "*" | "[" identifier "]" | literal
//! fromclause := "\r\nFROM " source+
//! ```
//!
//! A new dialect implements `SqlDialect`, overrides whichever operations
//! differ, and inherits the rest:
//!
//! ```ignore
//! use fluentsql::prelude::*;
//!
//! #[derive(Debug)]
//! struct SchemaQualified;
//!
//! impl SqlDialect for SchemaQualified {
//!     fn name(&self) -> &'static str {
//!         "schema-qualified"
//!     }
//!
//!     fn render_table(&self, table: &Table) -> RenderResult {
//!         Ok(format!("dbo.{}", table.name))
//!     }
//! }
//!
//! let sql = Select::all().from("Users").to_sql(&SchemaQualified)?;
//! assert_eq!(sql, "SELECT *\r\nFROM dbo.Users");
//! ```
//!
//! There is no process-wide default instance. Callers pass a dialect into
//! every render call; [`Dialect::default()`] is the ready-made standard one.

mod ansi;
pub mod helpers;
mod standard;
mod tsql;

pub use ansi::Ansi;
pub use standard::Standard;
pub use tsql::TSql;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::expr::ConstantExpression;
use super::field::{ConstantField, Field, TableField};
use super::select::Select;
use super::source::{Join, SingleTableJoin, Table};
use super::top::{Top, TopKind};
use crate::error::RenderResult;

/// SQL dialect trait - one overridable operation per model node kind.
///
/// Every operation is a pure function of its input. Implementations must
/// not mutate the model and must return the same text for the same input.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    // =========================================================================
    // Statement
    // =========================================================================

    /// Render a whole statement.
    ///
    /// Order is fixed: `SELECT `, then TOP, then the field list, then the
    /// FROM clause. Empty field and source lists contribute nothing.
    fn render_select(&self, select: &Select) -> RenderResult {
        let mut sql = String::from("SELECT ");

        if let Some(top) = &select.top {
            sql.push_str(&top.render(self)?);
        }

        if !select.fields.is_empty() {
            sql.push_str(&self.render_fields(&select.fields)?);
        }

        if !select.joins.is_empty() {
            sql.push_str(&self.render_joins(&select.joins)?);
        }

        Ok(sql)
    }

    /// Render the row-limiting modifier, including the separator that
    /// follows it.
    fn render_top(&self, top: &Top) -> RenderResult {
        Ok(match top.kind {
            TopKind::Count => format!("TOP {} ", top.value),
            TopKind::Percent => format!("TOP {} PERCENT ", top.value),
        })
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Render the SELECT list, comma-and-space separated, in order.
    fn render_fields(&self, fields: &[Field]) -> RenderResult {
        let rendered = fields
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join(", "))
    }

    /// Render one SELECT list item by dispatching on its variant.
    fn render_field(&self, field: &Field) -> RenderResult {
        field.render(self)
    }

    /// `*`
    fn render_all_fields(&self) -> RenderResult {
        Ok("*".into())
    }

    /// Column reference. Default wraps the name in brackets, unescaped.
    fn render_table_field(&self, field: &TableField) -> RenderResult {
        Ok(helpers::wrap_bracket(&field.name))
    }

    /// Literal field. Default delegates to [`SqlDialect::render_constant`].
    fn render_constant_field(&self, field: &ConstantField) -> RenderResult {
        field.expression.render(self)
    }

    /// Literal value. Default is the value's natural text, unquoted and
    /// unescaped. NULL and non-finite floats have no such form and fail.
    fn render_constant(&self, expression: &ConstantExpression) -> RenderResult {
        helpers::format_value_plain(expression.value())
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// Render the FROM clause: a line break, `FROM `, then each source
    /// concatenated in order.
    fn render_joins(&self, joins: &[Join]) -> RenderResult {
        let mut sql = String::from("\r\nFROM ");
        for join in joins {
            sql.push_str(&self.render_join(join)?);
        }
        Ok(sql)
    }

    /// Render one source by dispatching on its variant.
    fn render_join(&self, join: &Join) -> RenderResult {
        join.render(self)
    }

    /// Single implicit source. Contributes only the table itself.
    fn render_single_table_join(&self, join: &SingleTableJoin) -> RenderResult {
        join.table.render(self)
    }

    /// Table name. Default is the raw name, unquoted.
    fn render_table(&self, table: &Table) -> RenderResult {
        Ok(table.name.clone())
    }
}

/// Built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Standard,
    TSql,
    Ansi,
}

impl Dialect {
    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Standard => &Standard,
            Dialect::TSql => &TSql,
            Dialect::Ansi => &Ansi,
        }
    }
}

// Delegate every operation so overrides on the concrete types take effect.
impl SqlDialect for Dialect {
    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    fn render_select(&self, select: &Select) -> RenderResult {
        self.dialect().render_select(select)
    }

    fn render_top(&self, top: &Top) -> RenderResult {
        self.dialect().render_top(top)
    }

    fn render_fields(&self, fields: &[Field]) -> RenderResult {
        self.dialect().render_fields(fields)
    }

    fn render_field(&self, field: &Field) -> RenderResult {
        self.dialect().render_field(field)
    }

    fn render_all_fields(&self) -> RenderResult {
        self.dialect().render_all_fields()
    }

    fn render_table_field(&self, field: &TableField) -> RenderResult {
        self.dialect().render_table_field(field)
    }

    fn render_constant_field(&self, field: &ConstantField) -> RenderResult {
        self.dialect().render_constant_field(field)
    }

    fn render_constant(&self, expression: &ConstantExpression) -> RenderResult {
        self.dialect().render_constant(expression)
    }

    fn render_joins(&self, joins: &[Join]) -> RenderResult {
        self.dialect().render_joins(joins)
    }

    fn render_join(&self, join: &Join) -> RenderResult {
        self.dialect().render_join(join)
    }

    fn render_single_table_join(&self, join: &SingleTableJoin) -> RenderResult {
        self.dialect().render_single_table_join(join)
    }

    fn render_table(&self, table: &Table) -> RenderResult {
        self.dialect().render_table(table)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dialect().name())
    }
}

/// Unrecognised dialect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(Dialect::Standard),
            "tsql" | "mssql" | "sqlserver" => Ok(Dialect::TSql),
            "ansi" => Ok(Dialect::Ansi),
            _ => Err(UnknownDialect(s.into())),
        }
    }
}

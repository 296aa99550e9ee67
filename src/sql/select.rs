//! SELECT statement model and fluent builder.
//!
//! ```ignore
//! use fluentsql::prelude::*;
//!
//! let sql = Select::top_percent(25).all().from("Logs").to_sql(&Dialect::default())?;
//! assert_eq!(sql, "SELECT TOP 25 PERCENT *\r\nFROM Logs");
//! ```

use rust_decimal::Decimal;
use tracing::{trace, warn};

use super::dialect::{Dialect, SqlDialect};
use super::expr::{ConstantExpression, Value};
use super::field::{ConstantField, Field, Fields};
use super::source::{Join, Joins, Table};
use super::top::Top;
use crate::error::RenderResult;

// =============================================================================
// Select
// =============================================================================

/// A SELECT statement: optional TOP, a field list and a source list.
///
/// Rendering never mutates the statement and always yields the same text
/// for the same dialect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub top: Option<Top>,
    pub fields: Fields,
    pub joins: Joins,
}

impl Select {
    /// An empty statement. Renders as `SELECT `.
    pub fn new() -> Self {
        Self::default()
    }

    /// `SELECT *`
    pub fn all() -> SelectBuilder {
        SelectBuilder::new(Self::new()).all()
    }

    /// `SELECT <literal>`
    pub fn constant(value: impl Into<Value>) -> SelectBuilder {
        Self::constant_expression(ConstantExpression::new(value))
    }

    pub fn constant_expression(expression: ConstantExpression) -> SelectBuilder {
        SelectBuilder::new(Self::new()).field(ConstantField::new(expression))
    }

    /// `SELECT <column>`
    pub fn column(name: &str) -> SelectBuilder {
        SelectBuilder::new(Self::new()).column(name)
    }

    /// `SELECT TOP n`, with no fields yet.
    pub fn top_count(n: impl Into<Decimal>) -> SelectBuilder {
        SelectBuilder::new(Self {
            top: Some(Top::count(n)),
            ..Self::default()
        })
    }

    /// `SELECT TOP p PERCENT`, with no fields yet.
    pub fn top_percent(p: impl Into<Decimal>) -> SelectBuilder {
        SelectBuilder::new(Self {
            top: Some(Top::percent(p)),
            ..Self::default()
        })
    }

    /// Generate SQL for a specific dialect.
    pub fn to_sql<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        trace!(
            dialect = dialect.name(),
            fields = self.fields.len(),
            sources = self.joins.len(),
            "rendering select"
        );
        if self.joins.len() > 1 {
            warn!(
                sources = self.joins.len(),
                "multiple sources are concatenated without a separator"
            );
        }
        dialect.render_select(self)
    }
}

impl std::fmt::Display for Select {
    /// Formats the statement with the standard dialect.
    ///
    /// Writes nothing when the statement cannot be rendered. [`Select::to_sql`]
    /// is the fallible path and returns the [`RenderError`](crate::error::RenderError).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_sql(&Dialect::default()) {
            Ok(sql) => f.write_str(&sql),
            Err(err) => {
                warn!(error = %err, "select has no standard rendering");
                Ok(())
            }
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Append-only builder around a [`Select`].
///
/// Rendering does not finalize the builder; later calls change what the
/// next render produces.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "builders have no effect until used"]
pub struct SelectBuilder {
    select: Select,
}

impl SelectBuilder {
    pub fn new(select: Select) -> Self {
        Self { select }
    }

    /// Append a source. Repeated calls append repeated sources.
    pub fn from(mut self, table: impl Into<Table>) -> Self {
        self.select.joins.push(Join::single(table));
        self
    }

    /// Append `*`.
    pub fn all(self) -> Self {
        self.field(Field::All)
    }

    /// Append a column reference.
    pub fn column(self, name: &str) -> Self {
        self.field(Field::column(name))
    }

    /// Append a literal.
    pub fn constant(self, value: impl Into<Value>) -> Self {
        self.field(Field::constant(value))
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.select.fields.push(field.into());
        self
    }

    pub fn select(&self) -> &Select {
        &self.select
    }

    pub fn build(self) -> Select {
        self.select
    }

    /// Generate SQL for a specific dialect.
    pub fn to_sql<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        self.select.to_sql(dialect)
    }
}

impl From<SelectBuilder> for Select {
    fn from(builder: SelectBuilder) -> Self {
        builder.build()
    }
}

impl std::fmt::Display for SelectBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.select, f)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! SELECT list items.

use super::dialect::SqlDialect;
use super::expr::{ConstantExpression, Value};
use crate::error::RenderResult;

/// A column reference by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableField {
    pub name: String,
}

impl TableField {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

/// A literal in the SELECT list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantField {
    pub expression: ConstantExpression,
}

impl ConstantField {
    pub fn new(expression: ConstantExpression) -> Self {
        Self { expression }
    }
}

/// One element of a SELECT list.
///
/// Every variant maps to exactly one dialect operation, so adding a variant
/// forces a matching `SqlDialect` method.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// `*`
    All,
    Table(TableField),
    Constant(ConstantField),
}

impl Field {
    pub fn column(name: &str) -> Self {
        Field::Table(TableField::new(name))
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Field::Constant(ConstantField::new(ConstantExpression::new(value)))
    }

    pub fn render<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        match self {
            Field::All => dialect.render_all_fields(),
            Field::Table(field) => dialect.render_table_field(field),
            Field::Constant(field) => dialect.render_constant_field(field),
        }
    }
}

impl From<TableField> for Field {
    fn from(field: TableField) -> Self {
        Field::Table(field)
    }
}

impl From<ConstantField> for Field {
    fn from(field: ConstantField) -> Self {
        Field::Constant(field)
    }
}

/// Ordered SELECT list. Insertion order is output order; duplicates allowed.
pub type Fields = Vec<Field>;

/// Render a field list through `dialect`.
pub fn render_fields<D: SqlDialect + ?Sized>(fields: &[Field], dialect: &D) -> RenderResult {
    dialect.render_fields(fields)
}

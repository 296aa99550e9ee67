//! FROM clause sources.

use super::dialect::SqlDialect;
use crate::error::RenderResult;

/// A named relation. The name is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    pub fn render<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        dialect.render_table(self)
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// A single implicit source. Contributes no JOIN syntax of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTableJoin {
    pub table: Table,
}

impl SingleTableJoin {
    pub fn new(table: Table) -> Self {
        Self { table }
    }
}

/// A source contributed to the FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Join {
    SingleTable(SingleTableJoin),
}

impl Join {
    pub fn single(table: impl Into<Table>) -> Self {
        Join::SingleTable(SingleTableJoin::new(table.into()))
    }

    pub fn render<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        match self {
            Join::SingleTable(join) => dialect.render_single_table_join(join),
        }
    }
}

/// Ordered FROM sources.
pub type Joins = Vec<Join>;

/// Render a source list (including the FROM keyword) through `dialect`.
pub fn render_joins<D: SqlDialect + ?Sized>(joins: &[Join], dialect: &D) -> RenderResult {
    dialect.render_joins(joins)
}

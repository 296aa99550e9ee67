//! Row-limiting modifier.

use rust_decimal::Decimal;

use super::dialect::SqlDialect;
use crate::error::RenderResult;

/// Unit of a [`Top`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopKind {
    /// Absolute row count.
    Count,
    /// Percentage of rows.
    Percent,
}

/// `TOP n` / `TOP n PERCENT`. No range checks: negative or >100 values
/// render verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Top {
    pub value: Decimal,
    pub kind: TopKind,
}

impl Top {
    pub fn count(n: impl Into<Decimal>) -> Self {
        Self {
            value: n.into(),
            kind: TopKind::Count,
        }
    }

    pub fn percent(p: impl Into<Decimal>) -> Self {
        Self {
            value: p.into(),
            kind: TopKind::Percent,
        }
    }

    pub fn render<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        dialect.render_top(self)
    }
}

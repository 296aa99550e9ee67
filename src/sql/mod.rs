//! SQL generation module.
//!
//! Two layers, kept apart on purpose:
//!
//! - the model: [`select`], [`field`], [`source`], [`top`], [`expr`]
//! - the rendering strategy: [`dialect`]
//!
//! Model nodes never format themselves; they hand themselves to a dialect.

pub mod dialect;
pub mod expr;
pub mod field;
pub mod select;
pub mod source;
pub mod top;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types at the sql module level
pub use dialect::{Ansi, Dialect, SqlDialect, Standard, TSql, UnknownDialect};
pub use expr::{ConstantExpression, Value};
pub use field::{render_fields, ConstantField, Field, Fields, TableField};
pub use select::{Select, SelectBuilder};
pub use source::{render_joins, Join, Joins, SingleTableJoin, Table};
pub use top::{Top, TopKind};

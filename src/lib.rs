//! # fluentsql
//!
//! A fluent, dialect-agnostic builder for SQL `SELECT` statements.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Fluent builder (Select::all() ...)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [append-only mutation]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Model: Select { top, fields, joins }              │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [double dispatch]
//! ┌─────────────────────────────────────────────────────────┐
//! │        SqlDialect (one operation per node kind)          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!                      SQL string
//! ```
//!
//! There is no global default dialect: every render call takes one, and
//! [`Dialect::default()`] is the standard rendering.

pub mod config;
pub mod error;
pub mod sql;

// Re-export SQL submodules at crate level for convenience
pub use sql::dialect;
pub use sql::expr;
pub use sql::field;
pub use sql::select;
pub use sql::source;
pub use sql::top;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dialect::{Ansi, Dialect, SqlDialect, Standard, TSql};
    pub use crate::error::{RenderError, RenderResult};
    pub use crate::expr::{ConstantExpression, Value};
    pub use crate::field::{ConstantField, Field, Fields, TableField};
    pub use crate::select::{Select, SelectBuilder};
    pub use crate::source::{Join, Joins, SingleTableJoin, Table};
    pub use crate::top::{Top, TopKind};
}

pub use dialect::{Dialect, SqlDialect};
pub use error::{RenderError, RenderResult};
pub use select::{Select, SelectBuilder};

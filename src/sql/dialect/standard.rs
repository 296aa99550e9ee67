//! Standard dialect - the trait's default rendering, unchanged.
//!
//! - `[name]` for column references, raw names for tables
//! - `TOP n ` / `TOP n PERCENT ` prefix
//! - Constants in their natural text, unquoted
//! - `\r\n` before the FROM clause

use super::SqlDialect;

/// The default dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl SqlDialect for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }
}

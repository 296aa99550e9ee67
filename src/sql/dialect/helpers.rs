//! Shared helper functions for SQL dialect implementations.
//!
//! Reusable building blocks dialects compose to implement `SqlDialect`
//! without duplicating quoting and literal formatting rules.

use crate::error::{RenderError, RenderResult};
use crate::sql::expr::Value;

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Wrap in square brackets without escaping.
/// Used by: Standard
pub fn wrap_bracket(ident: &str) -> String {
    format!("[{}]", ident)
}

/// Quote identifier with square brackets, doubling `]`.
/// Used by: T-SQL
pub fn quote_bracket(ident: &str) -> String {
    format!("[{}]", ident.replace(']', "]]"))
}

/// Quote identifier with double quotes (ANSI style).
/// Used by: ANSI
pub fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Quote string with N prefix for Unicode (T-SQL).
pub fn quote_string_unicode(s: &str) -> String {
    format!("N'{}'", s.replace('\'', "''"))
}

// =============================================================================
// Literals
// =============================================================================

/// Format boolean as literal true/false.
pub fn format_bool_literal(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Format boolean as numeric 1/0.
/// Used by: T-SQL
pub fn format_bool_numeric(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

/// Shortest round-trip float text. SQL has no spelling for NaN or infinity.
pub fn format_float(f: f64) -> RenderResult {
    if !f.is_finite() {
        return Err(RenderError::NonFiniteFloat(f));
    }
    let mut buffer = ryu::Buffer::new();
    Ok(buffer.format(f).to_string())
}

/// Natural text of a value: no quoting, no escaping.
pub fn format_value_plain(value: &Value) -> RenderResult {
    match value {
        Value::Int(n) => Ok(n.to_string()),
        Value::UInt(n) => Ok(n.to_string()),
        Value::Float(f) => format_float(*f),
        Value::Decimal(d) => Ok(d.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(format_bool_literal(*b).into()),
        Value::Null => Err(RenderError::UnrepresentableConstant(value.kind())),
    }
}

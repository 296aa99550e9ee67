//! Literal expressions.
//!
//! A [`ConstantExpression`] carries one opaque [`Value`]; how that value is
//! spelled in SQL is entirely up to the dialect's `render_constant`.

use rust_decimal::Decimal;

use super::dialect::SqlDialect;
use crate::error::RenderResult;

// =============================================================================
// Value
// =============================================================================

/// A literal payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i128),
    /// Unsigned integers above `i128::MAX`.
    UInt(u128),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Bool(bool),
    Null,
}

impl Value {
    /// Short type name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) | Value::UInt(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i128::from(v))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        // isize is at most 64 bits wide
        Value::Int(v as i128)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i128)
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        i128::try_from(v).map_or(Value::UInt(v), Value::Int)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// ConstantExpression
// =============================================================================

/// A literal rendered through the dialect's constant rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
    value: Value,
}

impl ConstantExpression {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn render<D: SqlDialect + ?Sized>(&self, dialect: &D) -> RenderResult {
        dialect.render_constant(self)
    }
}

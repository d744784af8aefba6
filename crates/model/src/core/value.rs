use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Untyped filter payload.
///
/// Deserializes straight from JSON scalars and arrays, so a request body like
/// `"value": [25, 30]` lands as `Value::List`. The variant is only a hint; the
/// compiler coerces it to the declared type of the field it is compared with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// Natural data type of a scalar. Lists have none.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Int(_) => Some(DataType::Int),
            Value::Float(_) => Some(DataType::Float),
            Value::String(_) => Some(DataType::String),
            Value::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{}\"", v.replace('"', "\\\"")),
            Value::List(items) => {
                let rendered = items
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{rendered}]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged_scalars() {
        let parsed: Vec<Value> = serde_json::from_str(r#"[true, 28, 2.5, "a"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Value::Boolean(true),
                Value::Int(28),
                Value::Float(2.5),
                Value::String("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_deserialize_nested_list() {
        let parsed: Value = serde_json::from_str("[25, 30]").unwrap();
        assert_eq!(parsed, Value::List(vec![Value::Int(25), Value::Int(30)]));
        assert!(parsed.is_list());
        assert_eq!(parsed.data_type(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Ali").to_string(), "\"Ali\"");
        assert_eq!(Value::from(vec![25, 30]).to_string(), "[25, 30]");
        assert_eq!(Value::from(true).to_string(), "true");
    }
}

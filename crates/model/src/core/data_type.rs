use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a filterable field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Int,
    Float,
    String,
    Date,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "Boolean",
            DataType::Int => "Int",
            DataType::Float => "Float",
            DataType::String => "String",
            DataType::Date => "Date",
        }
    }

    /// Whether `>=` / `<=` are defined for the type.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, DataType::Boolean)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use model::{core::data_type::DataType, filter::FilterOperator};
use thiserror::Error;

/// Reasons a filter tree fails to compile.
///
/// Every variant is raised while compiling; a compiled predicate never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Ill-formed filter node at {path}: expected a property name or nested filters")]
    IllFormedNode { path: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Operator {operator} not supported for field '{field}' of type {data_type}")]
    UnsupportedOperator {
        operator: FilterOperator,
        field: String,
        data_type: DataType,
    },

    #[error("Invalid value {value} for field '{field}': cannot convert to {target}")]
    InvalidValue {
        field: String,
        value: String,
        target: DataType,
    },

    #[error("Value for 'In' on field '{field}' must be a list, got {value}")]
    InvalidMembershipValue { field: String, value: String },

    #[error("Missing value for operator {operator} on field '{field}'")]
    MissingValue {
        field: String,
        operator: FilterOperator,
    },

    #[error("Filter nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, FilterError>;

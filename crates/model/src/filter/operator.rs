use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied by a leaf filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[default]
    Equals,
    #[serde(alias = "GreaterThanOrEqual")]
    GreaterOrEqual,
    #[serde(alias = "LessThanOrEqual")]
    LessOrEqual,
    Contains,
    In,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOperator::Equals => write!(f, "Equals"),
            FilterOperator::GreaterOrEqual => write!(f, "GreaterOrEqual"),
            FilterOperator::LessOrEqual => write!(f, "LessOrEqual"),
            FilterOperator::Contains => write!(f, "Contains"),
            FilterOperator::In => write!(f, "In"),
        }
    }
}

/// Connective joining a node to the result of the siblings before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "And"),
            LogicalOperator::Or => write!(f, "Or"),
        }
    }
}

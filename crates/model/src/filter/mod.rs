pub mod node;
pub mod operator;

pub use node::FilterNode;
pub use operator::{FilterOperator, LogicalOperator};

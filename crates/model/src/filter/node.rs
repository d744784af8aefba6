use crate::{
    core::value::Value,
    filter::operator::{FilterOperator, LogicalOperator},
};
use serde::{Deserialize, Serialize};

/// One criterion, or a parenthesized group of criteria.
///
/// A node with non-empty `children` is a group: its result is the fold of its
/// children and its own `property_name`, `operator` and `value` are ignored.
/// Any other node is a leaf and must name a property. Nothing is validated
/// here; the compiler rejects ill-formed nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterNode {
    #[serde(default)]
    pub property_name: String,

    #[serde(default)]
    pub operator: FilterOperator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// How this node joins the accumulated result of the siblings *before*
    /// it. The first node of a list has no predecessor, so its logical
    /// operator is never read: `[a(Or), b(And)]` means `a && b`.
    #[serde(default)]
    pub logical_operator: LogicalOperator,

    #[serde(
        default,
        alias = "nestedFilters",
        skip_serializing_if = "Option::is_none"
    )]
    pub children: Option<Vec<FilterNode>>,
}

impl FilterNode {
    pub fn leaf(
        property_name: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<Value>,
    ) -> Self {
        FilterNode {
            property_name: property_name.into(),
            operator,
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn group(children: Vec<FilterNode>) -> Self {
        FilterNode {
            children: Some(children),
            ..Default::default()
        }
    }

    pub fn with_logical(mut self, logical_operator: LogicalOperator) -> Self {
        self.logical_operator = logical_operator;
        self
    }

    pub fn and(self) -> Self {
        self.with_logical(LogicalOperator::And)
    }

    pub fn or(self) -> Self {
        self.with_logical(LogicalOperator::Or)
    }

    /// Children of a group node, or `None` for a leaf.
    pub fn group_children(&self) -> Option<&[FilterNode]> {
        match &self.children {
            Some(children) if !children.is_empty() => Some(children),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        self.group_children().is_some()
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_group() && !self.property_name.is_empty()
    }

    /// Parse a JSON array of filter nodes.
    pub fn list_from_json(source: &str) -> Result<Vec<FilterNode>, serde_json::Error> {
        serde_json::from_str(source)
    }
}

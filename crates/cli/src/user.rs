use filter_engine::{FieldTable, MemorySource, Record};
use model::filter::{FilterNode, FilterOperator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub is_active: bool,
}

impl Record for User {
    fn field_table() -> FieldTable<Self> {
        FieldTable::<Self>::new()
            .int("Id", |u| u.id)
            .text("Name", |u| u.name.as_str())
            .int("Age", |u| i64::from(u.age))
            .boolean("IsActive", |u| u.is_active)
    }
}

impl User {
    fn new(id: i64, name: &str, age: i32, is_active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            is_active,
        }
    }
}

pub fn sample_users() -> MemorySource<User> {
    MemorySource::from(vec![
        User::new(1, "Ali", 25, true),
        User::new(2, "Reza", 30, false),
        User::new(3, "Mohammad", 35, true),
        User::new(4, "Amin", 28, true),
    ])
}

/// `IsActive == true && (Name contains "a" || Age >= 28)`
pub fn sample_filter() -> Vec<FilterNode> {
    vec![
        FilterNode::leaf("IsActive", FilterOperator::Equals, true),
        FilterNode::group(vec![
            FilterNode::leaf("Name", FilterOperator::Contains, "a").or(),
            FilterNode::leaf("Age", FilterOperator::GreaterOrEqual, 28).or(),
        ])
        .and(),
    ]
}

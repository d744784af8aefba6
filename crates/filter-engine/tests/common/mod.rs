#![allow(dead_code)]

use filter_engine::{FieldTable, MemorySource, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub is_active: bool,
}

impl Record for User {
    fn field_table() -> FieldTable<Self> {
        FieldTable::<Self>::new()
            .int("Id", |u| u.id)
            .text("Name", |u| u.name.as_str())
            .int("Age", |u| u.age)
            .boolean("IsActive", |u| u.is_active)
    }
}

pub fn user(id: i64, name: &str, age: i64, is_active: bool) -> User {
    User {
        id,
        name: name.to_string(),
        age,
        is_active,
    }
}

pub fn sample_users() -> MemorySource<User> {
    MemorySource::from(vec![
        user(1, "Ali", 25, true),
        user(2, "Reza", 30, false),
        user(3, "Mohammad", 35, true),
        user(4, "Amin", 28, true),
    ])
}

/// Deterministic spread of users covering every name/age/flag combination.
pub fn generated_users() -> Vec<User> {
    let names = ["Ali", "ali", "Reza", "Sara", "", "Zahra", "aa"];
    let mut users = Vec::new();
    let mut id = 0;
    for name in names {
        for age in [-1, 0, 17, 25, 28, 30, 31, 99] {
            for is_active in [true, false] {
                id += 1;
                users.push(user(id, name, age, is_active));
            }
        }
    }
    users
}

pub fn names(matches: &[&User]) -> Vec<String> {
    matches.iter().map(|u| u.name.clone()).collect()
}

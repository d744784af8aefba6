//! Behavioural properties of compiled predicates.

mod common;

use common::{User, generated_users, names, sample_users, user};
use filter_engine::{FilterError, MemorySource, RecordSource, compile};
use model::{
    core::data_type::DataType,
    filter::{FilterNode, FilterOperator},
};

#[test]
fn test_empty_filter_matches_every_record() {
    let predicate = compile::<User>(&[]).unwrap();
    assert!(generated_users().iter().all(|u| predicate.matches(u)));
}

#[test]
fn test_equals_matches_exactly_equal_values() {
    for target in [25, 28, 100] {
        let predicate =
            compile::<User>(&[FilterNode::leaf("Age", FilterOperator::Equals, target)]).unwrap();
        for u in generated_users() {
            assert_eq!(predicate.matches(&u), u.age == target, "{u:?}");
        }
    }

    let predicate =
        compile::<User>(&[FilterNode::leaf("Name", FilterOperator::Equals, "Ali")]).unwrap();
    for u in generated_users() {
        assert_eq!(predicate.matches(&u), u.name == "Ali", "{u:?}");
    }
}

#[test]
fn test_contains_is_exact_case_sensitive_substring() {
    for needle in ["a", "A", "li", "", "Zah"] {
        let predicate =
            compile::<User>(&[FilterNode::leaf("Name", FilterOperator::Contains, needle)])
                .unwrap();
        for u in generated_users() {
            assert_eq!(predicate.matches(&u), u.name.contains(needle), "{needle} {u:?}");
        }
    }
}

#[test]
fn test_in_matches_listed_values_only() {
    let predicate =
        compile::<User>(&[FilterNode::leaf("Age", FilterOperator::In, vec![25, 30])]).unwrap();
    for u in generated_users() {
        assert_eq!(predicate.matches(&u), u.age == 25 || u.age == 30, "{u:?}");
    }
}

#[test]
fn test_and_or_combination() {
    let active = FilterNode::leaf("IsActive", FilterOperator::Equals, true);
    let adult = FilterNode::leaf("Age", FilterOperator::GreaterOrEqual, 18);

    let both = compile::<User>(&[active.clone(), adult.clone().and()]).unwrap();
    let either = compile::<User>(&[active, adult.or()]).unwrap();

    for u in generated_users() {
        assert_eq!(both.matches(&u), u.is_active && u.age >= 18, "{u:?}");
        assert_eq!(either.matches(&u), u.is_active || u.age >= 18, "{u:?}");
    }
}

#[test]
fn test_group_composes_like_parenthesized_expression() {
    // active && (age <= 17 || name == "Sara")
    let nodes = vec![
        FilterNode::leaf("IsActive", FilterOperator::Equals, true),
        FilterNode::group(vec![
            FilterNode::leaf("Age", FilterOperator::LessOrEqual, 17),
            FilterNode::leaf("Name", FilterOperator::Equals, "Sara").or(),
        ])
        .and(),
    ];
    let predicate = compile::<User>(&nodes).unwrap();
    for u in generated_users() {
        let expected = u.is_active && (u.age <= 17 || u.name == "Sara");
        assert_eq!(predicate.matches(&u), expected, "{u:?}");
    }

    // Without the group the fold would read (active && age <= 17) || name == "Sara".
    let flat = compile::<User>(&[
        FilterNode::leaf("IsActive", FilterOperator::Equals, true),
        FilterNode::leaf("Age", FilterOperator::LessOrEqual, 17).and(),
        FilterNode::leaf("Name", FilterOperator::Equals, "Sara").or(),
    ])
    .unwrap();
    let inactive_sara = user(1, "Sara", 40, false);
    assert!(flat.matches(&inactive_sara));
    assert!(!predicate.matches(&inactive_sara));
}

#[test]
fn test_contains_on_numeric_field_fails_at_compile_time() {
    let err = compile::<User>(&[FilterNode::leaf("Age", FilterOperator::Contains, "2")])
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::UnsupportedOperator {
            operator: FilterOperator::Contains,
            field: "Age".to_string(),
            data_type: DataType::Int,
        }
    );
    assert_eq!(
        err.to_string(),
        "Operator Contains not supported for field 'Age' of type Int"
    );
}

fn active_and_name_or_age(needle: &str) -> Vec<FilterNode> {
    vec![
        FilterNode::leaf("IsActive", FilterOperator::Equals, true),
        FilterNode::group(vec![
            FilterNode::leaf("Name", FilterOperator::Contains, needle).or(),
            FilterNode::leaf("Age", FilterOperator::GreaterOrEqual, 28).or(),
        ])
        .and(),
    ]
}

#[test]
fn test_end_to_end_nested_filter() {
    let source = MemorySource::from(vec![user(1, "Ali", 25, true), user(2, "Reza", 30, false)]);

    // Reza is inactive, so the And rejects him even though age >= 28 holds.
    // "Ali" has no lowercase "a": Contains is case-sensitive.
    let predicate = compile::<User>(&active_and_name_or_age("a")).unwrap();
    assert!(source.filter(&predicate).is_empty());
    assert_eq!(
        predicate.to_string(),
        "x => (x.IsActive == true && (x.Name.Contains(\"a\") || x.Age >= 28))"
    );

    let predicate = compile::<User>(&active_and_name_or_age("A")).unwrap();
    assert_eq!(names(&source.filter(&predicate)), vec!["Ali"]);
}

#[test]
fn test_sample_users_with_demo_filter() {
    let nodes = FilterNode::list_from_json(
        r#"[
            { "propertyName": "IsActive", "operator": "Equals", "value": true },
            {
                "logicalOperator": "And",
                "nestedFilters": [
                    { "propertyName": "Name", "operator": "Contains", "logicalOperator": "Or", "value": "a" },
                    { "propertyName": "Age", "operator": "GreaterThanOrEqual", "logicalOperator": "Or", "value": 28 }
                ]
            }
        ]"#,
    )
    .unwrap();

    let predicate = compile::<User>(&nodes).unwrap();
    let source = sample_users();
    assert_eq!(
        names(&source.filter(&predicate)),
        vec!["Mohammad", "Amin"]
    );
}

#[test]
fn test_recompiling_is_deterministic() {
    let nodes = vec![
        FilterNode::leaf("Name", FilterOperator::Contains, "a"),
        FilterNode::group(vec![
            FilterNode::leaf("Age", FilterOperator::In, vec![17, 28, 99]),
            FilterNode::leaf("IsActive", FilterOperator::Equals, "false").or(),
        ])
        .and(),
    ];

    let first = compile::<User>(&nodes).unwrap();
    let second = compile::<User>(&nodes).unwrap();
    assert_eq!(first.to_string(), second.to_string());
    for u in generated_users() {
        assert_eq!(first.matches(&u), second.matches(&u), "{u:?}");
        assert_eq!(first.matches(&u), first.matches(&u), "{u:?}");
    }
}

#[test]
fn test_unknown_field() {
    let err = compile::<User>(&[FilterNode::leaf("Email", FilterOperator::Equals, "x")])
        .unwrap_err();
    assert_eq!(err, FilterError::UnknownField("Email".to_string()));
}

#[test]
fn test_predicate_plugs_into_iterator_filter() {
    let predicate =
        compile::<User>(&[FilterNode::leaf("Age", FilterOperator::LessOrEqual, 0)]).unwrap();
    let young = generated_users()
        .into_iter()
        .filter(|u| predicate.as_fn()(u))
        .count();
    // 7 names, ages -1 and 0, both flags
    assert_eq!(young, 7 * 2 * 2);
}

use crate::predicate::{CompiledFilter, Leaf, LeafTest, Predicate};
use model::filter::LogicalOperator;

/// Evaluates a compiled filter against one record.
///
/// Evaluation cannot fail: every type was resolved when the filter compiled.
pub trait Evaluator<T> {
    fn evaluate(&self, record: &T) -> bool;
}

impl<T> Evaluator<T> for CompiledFilter<T> {
    fn evaluate(&self, record: &T) -> bool {
        match self {
            CompiledFilter::Always => true,
            CompiledFilter::Leaf(leaf) => leaf.evaluate(record),
            CompiledFilter::Chain { first, rest } => {
                let mut acc = first.evaluate(record);
                for (op, next) in rest {
                    acc = match op {
                        LogicalOperator::And => acc && next.evaluate(record),
                        LogicalOperator::Or => acc || next.evaluate(record),
                    };
                }
                acc
            }
            CompiledFilter::Grouped(inner) => inner.evaluate(record),
        }
    }
}

impl<T> Evaluator<T> for Leaf<T> {
    fn evaluate(&self, record: &T) -> bool {
        self.test.evaluate(record)
    }
}

impl<T> Evaluator<T> for LeafTest<T> {
    fn evaluate(&self, record: &T) -> bool {
        match self {
            LeafTest::Boolean { get, check } => check.test(&get(record)),
            LeafTest::Int { get, check } => check.test(&get(record)),
            LeafTest::Float { get, check } => check.test(&get(record)),
            LeafTest::String { get, check } => check.test(get(record)),
            LeafTest::Date { get, check } => check.test(&get(record)),
            LeafTest::Contains { get, needle } => get(record).contains(needle.as_str()),
        }
    }
}

impl<T> Evaluator<T> for Predicate<T> {
    fn evaluate(&self, record: &T) -> bool {
        self.matches(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Check;

    struct Row {
        name: String,
        score: f64,
        calls: std::cell::Cell<u32>,
    }

    fn row(name: &str, score: f64) -> Row {
        Row {
            name: name.to_string(),
            score,
            calls: std::cell::Cell::new(0),
        }
    }

    fn counting(record: &Row) -> bool {
        record.calls.set(record.calls.get() + 1);
        true
    }

    fn name_leaf(check: Check<String>) -> CompiledFilter<Row> {
        CompiledFilter::Leaf(Leaf {
            field: "Name".to_string(),
            test: LeafTest::String {
                get: |r: &Row| r.name.as_str(),
                check,
            },
        })
    }

    fn counting_leaf() -> CompiledFilter<Row> {
        CompiledFilter::Leaf(Leaf {
            field: "Probe".to_string(),
            test: LeafTest::Boolean {
                get: counting,
                check: Check::Equals(true),
            },
        })
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let leaf = LeafTest::Contains {
            get: |r: &Row| r.name.as_str(),
            needle: "a".to_string(),
        };
        assert!(leaf.evaluate(&row("Reza", 0.0)));
        assert!(!leaf.evaluate(&row("ALI", 0.0)));
    }

    #[test]
    fn test_float_leaf() {
        let leaf = LeafTest::Float {
            get: |r: &Row| r.score,
            check: Check::LessOrEqual(0.5),
        };
        assert!(leaf.evaluate(&row("a", 0.5)));
        assert!(!leaf.evaluate(&row("a", 0.51)));
    }

    #[test]
    fn test_and_short_circuits() {
        let filter = CompiledFilter::Chain {
            first: Box::new(name_leaf(Check::Equals("nobody".to_string()))),
            rest: vec![(LogicalOperator::And, counting_leaf())],
        };
        let record = row("Ali", 0.0);
        assert!(!filter.evaluate(&record));
        assert_eq!(record.calls.get(), 0);
    }

    #[test]
    fn test_or_short_circuits() {
        let filter = CompiledFilter::Chain {
            first: Box::new(name_leaf(Check::Equals("Ali".to_string()))),
            rest: vec![(LogicalOperator::Or, counting_leaf())],
        };
        let record = row("Ali", 0.0);
        assert!(filter.evaluate(&record));
        assert_eq!(record.calls.get(), 0);
    }

    #[test]
    fn test_chain_folds_left_without_precedence() {
        // false || true && false folds as (false || true) && false
        let filter = CompiledFilter::Chain {
            first: Box::new(name_leaf(Check::Equals("nobody".to_string()))),
            rest: vec![
                (LogicalOperator::Or, name_leaf(Check::Equals("Ali".to_string()))),
                (LogicalOperator::And, name_leaf(Check::Equals("Reza".to_string()))),
                (LogicalOperator::Or, counting_leaf()),
            ],
        };
        let record = row("Ali", 0.0);
        assert!(filter.evaluate(&record));
        assert_eq!(record.calls.get(), 1);
    }
}

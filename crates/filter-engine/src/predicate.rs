use crate::eval::Evaluator;
use chrono::NaiveDate;
use model::filter::LogicalOperator;
use std::fmt;

/// Typed comparison against a constant coerced at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Check<V> {
    Equals(V),
    GreaterOrEqual(V),
    LessOrEqual(V),
    /// Empty set never matches.
    In(Vec<V>),
}

/// A leaf test: one accessor paired with a check of the same type.
pub enum LeafTest<T> {
    Boolean {
        get: fn(&T) -> bool,
        check: Check<bool>,
    },
    Int {
        get: fn(&T) -> i64,
        check: Check<i64>,
    },
    Float {
        get: fn(&T) -> f64,
        check: Check<f64>,
    },
    String {
        get: fn(&T) -> &str,
        check: Check<String>,
    },
    Date {
        get: fn(&T) -> NaiveDate,
        check: Check<NaiveDate>,
    },
    Contains {
        get: fn(&T) -> &str,
        needle: String,
    },
}

pub struct Leaf<T> {
    pub field: String,
    pub test: LeafTest<T>,
}

/// Compiled filter tree.
///
/// A sibling list of two or more nodes becomes one flat `Chain` that is
/// folded left to right, so `[a, b(Or), c(And)]` means `(a || b) && c`.
/// Only groups nest, which keeps recursion bounded by group depth however
/// many siblings a list has.
pub enum CompiledFilter<T> {
    Always,
    Leaf(Leaf<T>),
    Chain {
        first: Box<CompiledFilter<T>>,
        rest: Vec<(LogicalOperator, CompiledFilter<T>)>,
    },
    Grouped(Box<CompiledFilter<T>>),
}

/// Executable filter over records of type `T`.
///
/// Holds only function pointers and owned constants, so it is `Send + Sync`
/// and can be shared across threads regardless of `T`.
pub struct Predicate<T> {
    root: CompiledFilter<T>,
}

impl<T> Predicate<T> {
    pub fn new(root: CompiledFilter<T>) -> Self {
        Self { root }
    }

    /// Predicate that accepts every record.
    pub fn always() -> Self {
        Self::new(CompiledFilter::Always)
    }

    pub fn root(&self) -> &CompiledFilter<T> {
        &self.root
    }

    pub fn matches(&self, record: &T) -> bool {
        self.root.evaluate(record)
    }

    /// Borrow as a closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |record: &T| self.matches(record)
    }

    pub fn is_always(&self) -> bool {
        matches!(self.root, CompiledFilter::Always)
    }
}

impl<T> Clone for LeafTest<T> {
    fn clone(&self) -> Self {
        match self {
            LeafTest::Boolean { get, check } => LeafTest::Boolean {
                get: *get,
                check: check.clone(),
            },
            LeafTest::Int { get, check } => LeafTest::Int {
                get: *get,
                check: check.clone(),
            },
            LeafTest::Float { get, check } => LeafTest::Float {
                get: *get,
                check: check.clone(),
            },
            LeafTest::String { get, check } => LeafTest::String {
                get: *get,
                check: check.clone(),
            },
            LeafTest::Date { get, check } => LeafTest::Date {
                get: *get,
                check: check.clone(),
            },
            LeafTest::Contains { get, needle } => LeafTest::Contains {
                get: *get,
                needle: needle.clone(),
            },
        }
    }
}

impl<T> Clone for Leaf<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            test: self.test.clone(),
        }
    }
}

impl<T> Clone for CompiledFilter<T> {
    fn clone(&self) -> Self {
        match self {
            CompiledFilter::Always => CompiledFilter::Always,
            CompiledFilter::Leaf(leaf) => CompiledFilter::Leaf(leaf.clone()),
            CompiledFilter::Chain { first, rest } => CompiledFilter::Chain {
                first: first.clone(),
                rest: rest.clone(),
            },
            CompiledFilter::Grouped(inner) => CompiledFilter::Grouped(inner.clone()),
        }
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

trait Literal {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Literal for bool {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Literal for i64 {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Literal for f64 {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Literal for String {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Literal for NaiveDate {
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{self}'")
    }
}

fn write_check<V: Literal>(
    f: &mut fmt::Formatter<'_>,
    field: &str,
    check: &Check<V>,
) -> fmt::Result {
    match check {
        Check::Equals(v) => {
            write!(f, "x.{field} == ")?;
            v.write_literal(f)
        }
        Check::GreaterOrEqual(v) => {
            write!(f, "x.{field} >= ")?;
            v.write_literal(f)
        }
        Check::LessOrEqual(v) => {
            write!(f, "x.{field} <= ")?;
            v.write_literal(f)
        }
        Check::In(values) => {
            write!(f, "x.{field} in [")?;
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                v.write_literal(f)?;
            }
            write!(f, "]")
        }
    }
}

impl<T> fmt::Display for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_str();
        match &self.test {
            LeafTest::Boolean { check, .. } => write_check(f, field, check),
            LeafTest::Int { check, .. } => write_check(f, field, check),
            LeafTest::Float { check, .. } => write_check(f, field, check),
            LeafTest::String { check, .. } => write_check(f, field, check),
            LeafTest::Date { check, .. } => write_check(f, field, check),
            LeafTest::Contains { needle, .. } => write!(f, "x.{field}.Contains({needle:?})"),
        }
    }
}

impl<T> fmt::Display for CompiledFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledFilter::Always => write!(f, "true"),
            CompiledFilter::Leaf(leaf) => write!(f, "{leaf}"),
            // Left-folded chains mix && and || without precedence, so every
            // fold step carries its own parentheses.
            CompiledFilter::Chain { first, rest } => {
                for _ in 0..rest.len() {
                    write!(f, "(")?;
                }
                write!(f, "{first}")?;
                for (op, next) in rest {
                    write!(f, " {} {next})", op.symbol())?;
                }
                Ok(())
            }
            CompiledFilter::Grouped(inner) => match inner.as_ref() {
                CompiledFilter::Chain { .. } => write!(f, "{inner}"),
                _ => write!(f, "({inner})"),
            },
        }
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x => {}", self.root)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate")
            .field(&format_args!("{}", self.root))
            .finish()
    }
}

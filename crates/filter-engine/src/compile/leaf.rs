use super::PredicateCompiler;
use crate::{
    coerce,
    error::{FilterError, Result},
    predicate::{Check, Leaf, LeafTest},
    schema::Accessor,
};
use model::{
    core::{data_type::DataType, value::Value},
    filter::{FilterNode, FilterOperator},
};

/// What a leaf needs to turn its payload into a typed check.
struct LeafContext<'a> {
    field: &'a str,
    operator: FilterOperator,
    value: &'a Value,
    data_type: DataType,
}

impl LeafContext<'_> {
    fn unsupported(&self) -> FilterError {
        FilterError::UnsupportedOperator {
            operator: self.operator,
            field: self.field.to_string(),
            data_type: self.data_type,
        }
    }

    fn coerce<V>(&self, value: &Value, convert: fn(&Value) -> Option<V>) -> Result<V> {
        convert(value).ok_or_else(|| FilterError::InvalidValue {
            field: self.field.to_string(),
            value: value.to_string(),
            target: self.data_type,
        })
    }

    /// Build the check for every operator except `Contains`.
    fn check<V>(&self, convert: fn(&Value) -> Option<V>) -> Result<Check<V>> {
        match self.operator {
            FilterOperator::Equals => Ok(Check::Equals(self.coerce(self.value, convert)?)),
            FilterOperator::GreaterOrEqual | FilterOperator::LessOrEqual
                if !self.data_type.is_ordered() =>
            {
                Err(self.unsupported())
            }
            FilterOperator::GreaterOrEqual => {
                Ok(Check::GreaterOrEqual(self.coerce(self.value, convert)?))
            }
            FilterOperator::LessOrEqual => {
                Ok(Check::LessOrEqual(self.coerce(self.value, convert)?))
            }
            FilterOperator::In => {
                let items = self
                    .value
                    .as_list()
                    .ok_or_else(|| FilterError::InvalidMembershipValue {
                        field: self.field.to_string(),
                        value: self.value.to_string(),
                    })?;
                let candidates = items
                    .iter()
                    .map(|item| self.coerce(item, convert))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Check::In(candidates))
            }
            FilterOperator::Contains => Err(self.unsupported()),
        }
    }
}

impl<T> PredicateCompiler<T> {
    pub(super) fn compile_leaf(&self, node: &FilterNode) -> Result<Leaf<T>> {
        let field = self
            .fields
            .resolve(&node.property_name, self.settings.case_insensitive_fields)
            .ok_or_else(|| FilterError::UnknownField(node.property_name.clone()))?;
        let accessor = field.accessor;
        let data_type = accessor.data_type();

        let value = node.value.as_ref().ok_or_else(|| FilterError::MissingValue {
            field: field.name.clone(),
            operator: node.operator,
        })?;

        let ctx = LeafContext {
            field: &field.name,
            operator: node.operator,
            value,
            data_type,
        };

        let test = match (node.operator, accessor) {
            (FilterOperator::Contains, Accessor::String(get)) => LeafTest::Contains {
                get,
                needle: ctx.coerce(value, coerce::to_text)?,
            },
            (FilterOperator::Contains, _) => return Err(ctx.unsupported()),
            (_, Accessor::Boolean(get)) => LeafTest::Boolean {
                get,
                check: ctx.check(coerce::to_boolean)?,
            },
            (_, Accessor::Int(get)) => LeafTest::Int {
                get,
                check: ctx.check(coerce::to_int)?,
            },
            (_, Accessor::Float(get)) => LeafTest::Float {
                get,
                check: ctx.check(coerce::to_float)?,
            },
            (_, Accessor::String(get)) => LeafTest::String {
                get,
                check: ctx.check(coerce::to_text)?,
            },
            (_, Accessor::Date(get)) => LeafTest::Date {
                get,
                check: ctx.check(coerce::to_date)?,
            },
        };

        Ok(Leaf {
            field: field.name.clone(),
            test,
        })
    }
}

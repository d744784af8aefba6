use chrono::NaiveDate;
use model::core::{data_type::DataType, value::Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a payload to a boolean. Accepts `true`/`false` in any ASCII case
/// and the integers 0 and 1.
pub fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Int(0) => Some(false),
        Value::Int(1) => Some(true),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Convert a payload to an integer. Floats convert only when they have no
/// fractional part and fit in an `i64`.
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(f) => {
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Some(*f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Boolean(b) => Some(i64::from(*b)),
        Value::List(_) => None,
    }
}

pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Int(i) => Some(*i as f64),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Convert a payload to text. Scalars render with their usual formatting;
/// strings are taken verbatim, without trimming.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::List(_) => None,
    }
}

/// Convert a `YYYY-MM-DD` string to a calendar date.
pub fn to_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
        _ => None,
    }
}

/// Whether `value` can be coerced to `target`.
pub fn can_coerce(value: &Value, target: DataType) -> bool {
    match target {
        DataType::Boolean => to_boolean(value).is_some(),
        DataType::Int => to_int(value).is_some(),
        DataType::Float => to_float(value).is_some(),
        DataType::String => to_text(value).is_some(),
        DataType::Date => to_date(value).is_some(),
    }
}

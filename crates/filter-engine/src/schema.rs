use chrono::NaiveDate;
use model::core::data_type::DataType;
use std::{collections::HashMap, fmt};

/// Extracts one field from a record. The variant doubles as the field's
/// declared type, so nothing is inspected at runtime.
pub enum Accessor<T> {
    Boolean(fn(&T) -> bool),
    Int(fn(&T) -> i64),
    Float(fn(&T) -> f64),
    String(fn(&T) -> &str),
    Date(fn(&T) -> NaiveDate),
}

impl<T> Accessor<T> {
    pub fn data_type(&self) -> DataType {
        match self {
            Accessor::Boolean(_) => DataType::Boolean,
            Accessor::Int(_) => DataType::Int,
            Accessor::Float(_) => DataType::Float,
            Accessor::String(_) => DataType::String,
            Accessor::Date(_) => DataType::Date,
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor({})", self.data_type())
    }
}

pub struct Field<T> {
    pub name: String,
    pub accessor: Accessor<T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: self.accessor,
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.accessor.data_type())
    }
}

/// Registry of the filterable fields of a record type.
///
/// Stands in for reflection: a filter can only reference fields registered
/// here. Accessors are plain function pointers, so any non-capturing closure
/// works:
///
/// ```
/// use filter_engine::schema::FieldTable;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let table = FieldTable::<User>::new()
///     .text("Name", |u| u.name.as_str())
///     .int("Age", |u| u.age as i64);
/// assert_eq!(table.len(), 2);
/// ```
pub struct FieldTable<T> {
    fields: Vec<Field<T>>,
    by_name: HashMap<String, usize>,
}

impl<T> FieldTable<T> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a field, replacing any earlier field with the same name.
    pub fn field(mut self, name: &str, accessor: Accessor<T>) -> Self {
        self.register(name, accessor);
        self
    }

    pub fn register(&mut self, name: &str, accessor: Accessor<T>) {
        match self.by_name.get(name) {
            Some(&index) => self.fields[index].accessor = accessor,
            None => {
                self.by_name.insert(name.to_string(), self.fields.len());
                self.fields.push(Field {
                    name: name.to_string(),
                    accessor,
                });
            }
        }
    }

    pub fn boolean(self, name: &str, get: fn(&T) -> bool) -> Self {
        self.field(name, Accessor::Boolean(get))
    }

    pub fn int(self, name: &str, get: fn(&T) -> i64) -> Self {
        self.field(name, Accessor::Int(get))
    }

    pub fn float(self, name: &str, get: fn(&T) -> f64) -> Self {
        self.field(name, Accessor::Float(get))
    }

    pub fn text(self, name: &str, get: fn(&T) -> &str) -> Self {
        self.field(name, Accessor::String(get))
    }

    pub fn date(self, name: &str, get: fn(&T) -> NaiveDate) -> Self {
        self.field(name, Accessor::Date(get))
    }

    /// Find a field by exact name, then, if allowed, ignoring ASCII case.
    pub fn resolve(&self, name: &str, case_insensitive: bool) -> Option<&Field<T>> {
        if let Some(&index) = self.by_name.get(name) {
            return Some(&self.fields[index]);
        }
        if !case_insensitive {
            return None;
        }
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> Default for FieldTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FieldTable<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            by_name: self.by_name.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|x| (&x.name, x.accessor.data_type())))
            .finish()
    }
}

/// A record type that knows its own field table.
pub trait Record: Sized {
    fn field_table() -> FieldTable<Self>;
}

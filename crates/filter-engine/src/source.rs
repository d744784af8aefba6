use crate::predicate::Predicate;

/// Something that owns records and can restrict them with a predicate.
pub trait RecordSource<T> {
    fn filter(&self, predicate: &Predicate<T>) -> Vec<&T>;

    fn count(&self, predicate: &Predicate<T>) -> usize {
        self.filter(predicate).len()
    }
}

/// Vec-backed record source.
#[derive(Debug, Clone)]
pub struct MemorySource<T> {
    records: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for MemorySource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for MemorySource<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Extend<T> for MemorySource<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<T> RecordSource<T> for MemorySource<T> {
    fn filter(&self, predicate: &Predicate<T>) -> Vec<&T> {
        self.records.iter().filter(|r| predicate.matches(r)).collect()
    }

    fn count(&self, predicate: &Predicate<T>) -> usize {
        self.records.iter().filter(|r| predicate.matches(r)).count()
    }
}

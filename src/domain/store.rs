//! In-memory record store

/// Insertion-ordered collection of records owned by the running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store<R> {
    records: Vec<R>,
}

impl<R> Default for Store<R> {
    fn default() -> Self {
        Store {
            records: Vec::new(),
        }
    }
}

impl<R> Store<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; always succeeds
    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    /// Current contents in insertion order
    pub fn all(&self) -> &[R] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }
}

impl<R> From<Vec<R>> for Store<R> {
    fn from(records: Vec<R>) -> Self {
        Store { records }
    }
}

impl<R> FromIterator<R> for Store<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Store {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, R> IntoIterator for &'a Store<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut store = Store::new();
        store.add("first");
        store.add("second");
        store.add("third");

        assert_eq!(store.all(), &["first", "second", "third"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.last(), Some(&"third"));
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store: Store<u32> = (1..=3).collect();
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.all(), &[] as &[u32]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = Store::from(vec![1, 2, 3]);
        if let Some(value) = store.get_mut(1) {
            *value = 20;
        }
        assert_eq!(store.get(1), Some(&20));
        assert_eq!(store.get(3), None);
    }
}

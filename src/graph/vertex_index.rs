use crate::graph::VertexId;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A bidirectional mapping between vertex labels and dense [VertexId]'s.
///
/// Labels are unique.
/// Uniqueness is checked on insertion only: adding a present label is a no-op.
///
/// |                | Complexity            |
/// | -------------- | --------------------- |
/// | `add`          | $O(1)$ expected       |
/// | `index_of`     | $O(1)$ expected       |
/// | `label_of`     | $O(1)$ expected       |
/// | `remove`       | $O(\|V\|)$            |
/// | `iter`         | $O(\|V\|)$ in total   |
#[derive(Clone)]
pub struct VertexIndex<V>
where
    V: Hash + Eq,
{
    labels: BiHashMap<VertexId, V, RandomState, RandomState>,
}

impl<V> Default for VertexIndex<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VertexIndex<V>
where
    V: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Number of labels, which is also the first unused [VertexId].
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, vid: &VertexId) -> bool {
        vid.to_raw() < self.len()
    }

    pub fn contains_label(&self, label: &V) -> bool {
        self.labels.contains_right(label)
    }

    pub fn index_of(&self, label: &V) -> Option<VertexId> {
        self.labels.get_by_right(label).copied()
    }

    pub fn get_label(&self, vid: &VertexId) -> Option<&V> {
        self.labels.get_by_left(vid)
    }

    /// Label at `vid`.
    ///
    /// # Panics
    ///
    /// If `vid` is out of `0..len()`.
    pub fn label_of(&self, vid: &VertexId) -> &V {
        match self.get_label(vid) {
            Some(label) => label,
            None => panic!(
                "vertex {} is out of range of {} vertices",
                vid,
                self.len()
            ),
        }
    }

    /// Appends `label` with the next unused [VertexId].
    ///
    /// Returns `false` and keeps the index untouched if `label` is present.
    pub fn add(&mut self, label: V) -> bool {
        if self.labels.contains_right(&label) {
            return false;
        }
        let vid = VertexId::new(self.len());
        self.labels.insert(vid, label);
        true
    }

    /// Drops the label at `vid` and shifts every higher ID down by one.
    pub fn remove(&mut self, vid: &VertexId) -> Option<V> {
        let n = self.len();
        let (_, removed) = self.labels.remove_by_left(vid)?;
        for raw in (vid.to_raw() + 1)..n {
            if let Some((old, label)) = self.labels.remove_by_left(&VertexId::new(raw)) {
                self.labels.insert(VertexId::new(old.to_raw() - 1), label);
            }
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Iterates over labels in the order of their ID's.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        (0..self.len()).filter_map(move |raw| {
            let vid = VertexId::new(raw);
            self.get_label(&vid).map(|label| (vid, label))
        })
    }
}

impl<V> std::fmt::Debug for VertexIndex<V>
where
    V: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> FromIterator<V> for VertexIndex<V>
where
    V: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut res = Self::new();
        for label in iter {
            res.add(label);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn duplicated_add_is_noop() {
        let mut index = VertexIndex::new();
        assert!(index.add("KUL"));
        assert!(index.add("PEN"));
        assert!(!index.add("KUL"));
        assert_eq!(index.len(), 2);
        assert_eq!(index.index_of(&"KUL"), Some(VertexId::new(0)));
        assert_eq!(index.index_of(&"PEN"), Some(VertexId::new(1)));
        assert_eq!(index.index_of(&"BKI"), None);
    }

    #[test]
    fn remove_renumbers_higher_ids() {
        let mut index: VertexIndex<_> = ["A", "B", "C", "D"].into_iter().collect();
        assert_eq!(index.remove(&VertexId::new(1)), Some("B"));
        let trial: Vec<_> = index.iter().map(|(vid, l)| (vid.to_raw(), *l)).collect();
        assert_eq!(trial, vec![(0, "A"), (1, "C"), (2, "D")]);
        assert_eq!(index.index_of(&"D"), Some(VertexId::new(2)));
        assert_eq!(index.get_label(&VertexId::new(3)), None);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut index: VertexIndex<_> = ["A"].into_iter().collect();
        assert_eq!(index.remove(&VertexId::new(4)), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    #[should_panic]
    fn label_of_out_of_range_panics() {
        let index: VertexIndex<&str> = VertexIndex::new();
        let _ = index.label_of(&VertexId::new(0));
    }

    #[quickcheck]
    fn ids_stay_dense(labels: Vec<u8>, to_remove: Vec<u8>) {
        let mut index: VertexIndex<u8> = labels.into_iter().collect();
        for r in to_remove {
            if index.is_empty() {
                break;
            }
            let vid = VertexId::new(r as usize % index.len());
            let _ = index.remove(&vid);
        }
        for (expected, (vid, label)) in index.iter().enumerate() {
            assert_eq!(vid.to_raw(), expected);
            assert_eq!(index.index_of(label), Some(vid));
        }
        assert_eq!(index.iter().count(), index.len());
    }
}

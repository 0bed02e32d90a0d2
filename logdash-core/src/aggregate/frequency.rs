use ahash::RandomState;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// One ranked entry of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<K> {
    pub name: K,
    pub count: u64,
}

/// Key → count table that remembers the order keys were first seen.
///
/// Entries live in a vector in first-insertion order and a hash index maps
/// each key to its slot. Ranking sorts a copy of the entries with a stable
/// sort, so equal counts keep their first-seen order and every ranking is
/// reproducible for the same input. Memory grows with the number of
/// distinct keys, not with the number of increments.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize, RandomState>,
    entries: Vec<(K, u64)>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
            entries: Vec::new(),
        }
    }

    pub fn increment<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.add(key, 1);
    }

    pub fn add<Q>(&mut self, key: &Q, amount: u64)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&slot) = self.index.get(key) {
            let count = &mut self.entries[slot].1;
            *count = count.saturating_add(amount);
            return;
        }

        let slot = self.entries.len();
        self.entries.push((key.to_owned(), amount));
        self.index.insert(key.to_owned(), slot);
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0, |acc, (_, c)| acc.saturating_add(*c))
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// All entries in first-seen order.
    pub fn ranked_in_order(&self) -> Vec<Ranked<K>> {
        self.iter()
            .map(|(name, count)| Ranked {
                name: name.clone(),
                count,
            })
            .collect()
    }

    /// The `k` highest counts, descending, ties in first-seen order.
    pub fn top_k(&self, k: usize) -> Vec<Ranked<K>> {
        let mut ranked = self.ranked_in_order();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }

    /// All entries ordered by key.
    pub fn sorted_by_key(&self) -> Vec<Ranked<K>>
    where
        K: Ord,
    {
        let mut ranked = self.ranked_in_order();
        ranked.sort_by(|a, b| a.name.cmp(&b.name));
        ranked
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

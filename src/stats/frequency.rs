use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Label used for null cells so every dimension partitions the population.
pub const MISSING_LABEL: &str = "nan";

/// Distinct value → number of records holding it, in a fixed presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> FrequencyTable<K> {
    pub fn entries(&self) -> &[(K, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl<K: PartialEq> FrequencyTable<K> {
    pub fn count_of(&self, key: &K) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, c)| *c)
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    /// Most frequent value first; equal counts keep first-seen order.
    pub fn by_frequency<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut entries: Vec<(K, usize)> = Vec::new();

        for value in values {
            match index.get(&value) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(value.clone(), entries.len());
                    entries.push((value, 1));
                }
            }
        }

        // sort_by is stable, which keeps ties in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }
}

impl<K: Ord> FrequencyTable<K> {
    /// Ascending by key.
    pub fn by_key<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self {
            entries: counts.into_iter().collect(),
        }
    }
}

/// Display form of a nullable categorical cell.
///
/// Booleans in any case become `True`/`False`; nulls become [`MISSING_LABEL`].
pub fn render_value(value: Option<&str>) -> String {
    match value {
        None => MISSING_LABEL.to_string(),
        Some(v) if v.eq_ignore_ascii_case("true") => render_flag(true),
        Some(v) if v.eq_ignore_ascii_case("false") => render_flag(false),
        Some(v) => v.to_string(),
    }
}

pub fn render_flag(flag: bool) -> String {
    if flag { "True" } else { "False" }.to_string()
}

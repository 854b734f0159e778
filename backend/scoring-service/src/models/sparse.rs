use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};

/// Sparse vector over tag names. A missing tag has weight 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector {
    entries: HashMap<String, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> f64 {
        self.entries.get(tag).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn insert(&mut self, tag: impl Into<String>, weight: f64) {
        self.entries.insert(tag.into(), weight);
    }

    /// Add `weight` to the entry for `tag`, starting from 0 if absent
    pub fn add(&mut self, tag: &str, weight: f64) {
        match self.entries.get_mut(tag) {
            Some(existing) => *existing += weight,
            None => {
                self.entries.insert(tag.to_string(), weight);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.entries.iter()
    }

    /// Dot product; only tags present in both vectors contribute.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        self.dot_with(other, |a, b| a * b)
    }

    /// Sum of `term(self[tag], other[tag])` over the tags both vectors share
    pub fn dot_with(&self, other: &SparseVector, term: impl Fn(f64, f64) -> f64) -> f64 {
        if self.len() <= other.len() {
            self.entries
                .iter()
                .filter_map(|(tag, a)| other.entries.get(tag).map(|b| term(*a, *b)))
                .sum()
        } else {
            other
                .entries
                .iter()
                .filter_map(|(tag, b)| self.entries.get(tag).map(|a| term(*a, *b)))
                .sum()
        }
    }

    /// Euclidean (L2) norm. Folded with `hypot` so large weights don't overflow.
    pub fn norm(&self) -> f64 {
        self.entries.values().fold(0.0, |acc, w| acc.hypot(*w))
    }
}

impl FromIterator<(String, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(tag, weight)| (tag.to_string(), weight))
            .collect()
    }
}

impl From<HashMap<String, f64>> for SparseVector {
    fn from(entries: HashMap<String, f64>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = (&'a String, &'a f64);
    type IntoIter = hash_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

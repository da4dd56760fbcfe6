//! Insertion-ordered frequency counting.
//!
//! Both the skill ranking and the per-skill category breakdown count
//! values and rank them. Ties are resolved by first-seen order, so the
//! counter remembers when each value was first inserted and ranking uses a
//! stable sort.

use std::collections::HashMap;

/// Frequency counter that remembers first-seen order
#[derive(Debug, Clone, Default)]
pub struct OrderedCounter {
    /// value -> index into `entries`
    index: HashMap<String, usize>,

    /// (value, count) in first-seen order
    entries: Vec<(String, u64)>,
}

impl OrderedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `value`
    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn get(&self, value: &str) -> u64 {
        self.index
            .get(value)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most frequent value; the first-seen one wins a tie
    pub fn mode(&self) -> Option<&str> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.entries {
            // Strictly greater, so an earlier entry keeps a tie
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(value, _)| value.as_str())
    }

    /// Top `n` values by count, descending, first-seen order among ties
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for OrderedCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = OrderedCounter::new();
        for value in iter {
            counter.add(value);
        }
        counter
    }
}

/// Most frequent value among `values`, first-seen wins a tie
///
/// **Public** - `None` when there are no values
pub fn mode_of<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<OrderedCounter>()
        .mode()
        .map(str::to_string)
}

/// Top `n` (value, count) pairs among `values`
pub fn ranked_counts<'a, I>(values: I, n: usize) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().collect::<OrderedCounter>().most_common(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let counter: OrderedCounter = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.get("b"), 2);
        assert_eq!(counter.get("z"), 0);
        assert_eq!(
            counter.most_common(10),
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 1),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_most_common_truncates() {
        let counter: OrderedCounter = ["a", "b", "c"].into_iter().collect();
        assert_eq!(counter.most_common(2).len(), 2);
        assert!(counter.most_common(0).is_empty());
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        assert_eq!(mode_of(["x", "y", "y", "x"]), Some("x".to_string()));
        assert_eq!(mode_of(["y", "x", "x", "y"]), Some("y".to_string()));
        assert_eq!(mode_of(["a", "b", "b"]), Some("b".to_string()));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode_of(std::iter::empty()), None);
    }

    #[test]
    fn test_ranked_counts() {
        let ranked = ranked_counts(["IT", "Sales", "IT"], 5);
        assert_eq!(ranked[0], ("IT".to_string(), 2));
        assert_eq!(ranked[1], ("Sales".to_string(), 1));
    }
}

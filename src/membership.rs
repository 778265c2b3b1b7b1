/*!
# Membership Counting

Per collection we count how many participants were recorded and how many of them belong
to a designated subgroup. The counts only ever grow.

The *diversity test* classifies collections by their subgroup ratio. Collections without
any subgroup member are left out of the test entirely (neither passing nor failing).
*/

use std::collections::hash_map::Entry;

use fxhash::FxHashMap;
use log::debug;

use crate::*;

/// Counters of a single collection. `subgroup <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberCounts {
    pub subgroup: u32,
    pub total: u32,
}

impl MemberCounts {
    /// Fraction of subgroup members; `0.0` for an unobserved collection
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.subgroup as f64 / self.total as f64
        }
    }
}

/// Outcome of [`Membership::diversity_test`]; both lists are in first-observation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiversityReport<C> {
    pub passing: Vec<C>,
    pub failing: Vec<C>,
}

/// Membership counters for every observed collection.
#[derive(Debug, Clone)]
pub struct Membership<C: Label> {
    counts: FxHashMap<C, MemberCounts>,
    /// Collections in order of first observation
    order: Vec<C>,
}

impl<C: Label> Default for Membership<C> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<C: Label> Membership<C> {
    /// Creates empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one participant of `collection`.
    pub fn record(&mut self, collection: &C, is_subgroup: bool) {
        let counts = match self.counts.entry(collection.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(MemberCounts::default())
            }
        };

        counts.total += 1;
        if is_subgroup {
            counts.subgroup += 1;
        }
    }

    /// Number of observed collections
    pub fn number_of_collections(&self) -> usize {
        self.order.len()
    }

    /// Observed collections in first-observation order
    pub fn collections(&self) -> impl Iterator<Item = &C> + '_ {
        self.order.iter()
    }

    /// Both counters of `collection`, if it was observed
    pub fn counts(&self, collection: &C) -> Option<MemberCounts> {
        self.counts.get(collection).copied()
    }

    /// Subgroup members of `collection`, if it was observed
    pub fn subgroup_count(&self, collection: &C) -> Option<u32> {
        self.counts(collection).map(|c| c.subgroup)
    }

    /// All recorded participants of `collection`, if it was observed
    pub fn total_count(&self, collection: &C) -> Option<u32> {
        self.counts(collection).map(|c| c.total)
    }

    /// Subgroup ratio of an observed collection
    pub fn ratio(&self, collection: &C) -> Result<f64> {
        self.counts(collection)
            .map(|c| c.ratio())
            .ok_or_else(|| GraphError::not_found(collection))
    }

    /// Classifies every collection with at least one subgroup member:
    /// passing if `subgroup / total >= threshold`, failing otherwise.
    ///
    /// # Example
    /// ```
    /// use castgraph::membership::Membership;
    ///
    /// let mut m = Membership::new();
    /// for female in [true, true, false] {
    ///     m.record(&"M1", female);
    /// }
    /// for female in [true, false, false, false] {
    ///     m.record(&"M2", female);
    /// }
    ///
    /// let report = m.diversity_test(0.5);
    /// assert_eq!(report.passing, vec!["M1"]);
    /// assert_eq!(report.failing, vec!["M2"]);
    /// ```
    pub fn diversity_test(&self, threshold: f64) -> DiversityReport<C> {
        let mut report = DiversityReport {
            passing: Vec::new(),
            failing: Vec::new(),
        };

        for collection in &self.order {
            let counts = self.counts[collection];
            if counts.subgroup == 0 {
                continue;
            }

            if counts.ratio() >= threshold {
                report.passing.push(collection.clone());
            } else {
                report.failing.push(collection.clone());
            }
        }

        debug!(
            "diversity test at {threshold}: {} passing, {} failing, {} without subgroup members",
            report.passing.len(),
            report.failing.len(),
            self.order.len() - report.passing.len() - report.failing.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Membership<&'static str> {
        let mut m = Membership::new();
        for (collection, female) in [
            ("M1", true),
            ("M2", false),
            ("M1", false),
            ("M2", true),
            ("M1", true),
            ("M2", false),
            ("M3", false),
            ("M2", false),
        ] {
            m.record(&collection, female);
        }
        m
    }

    #[test]
    fn counts_accumulate() {
        let m = sample();
        assert_eq!(m.number_of_collections(), 3);
        assert_eq!(m.collections().copied().collect::<Vec<_>>(), vec!["M1", "M2", "M3"]);

        assert_eq!(m.counts(&"M1"), Some(MemberCounts { subgroup: 2, total: 3 }));
        assert_eq!(m.subgroup_count(&"M2"), Some(1));
        assert_eq!(m.total_count(&"M2"), Some(4));
        assert_eq!(m.subgroup_count(&"M3"), Some(0));
        assert_eq!(m.total_count(&"M4"), None);

        for c in m.collections() {
            let counts = m.counts(c).unwrap();
            assert!(counts.subgroup <= counts.total);
        }
    }

    #[test]
    fn ratio_of_unknown_collection_is_not_found() {
        let m = sample();
        assert!((m.ratio(&"M2").unwrap() - 0.25).abs() < 1e-12);
        assert!(matches!(m.ratio(&"M4"), Err(GraphError::NotFound(_))));
    }

    #[test]
    fn diversity_splits_by_threshold() {
        let m = sample();

        let report = m.diversity_test(0.5);
        assert_eq!(report.passing, vec!["M1"]);
        assert_eq!(report.failing, vec!["M2"]);

        // ratio exactly at the threshold passes
        let report = m.diversity_test(0.25);
        assert_eq!(report.passing, vec!["M1", "M2"]);
        assert!(report.failing.is_empty());

        let report = m.diversity_test(0.9);
        assert!(report.passing.is_empty());
        assert_eq!(report.failing, vec!["M1", "M2"]);
    }

    #[test]
    fn collections_without_subgroup_are_excluded() {
        let m = sample();
        for threshold in [0.0, 0.5, 1.0] {
            let report = m.diversity_test(threshold);
            assert!(!report.passing.contains(&"M3"));
            assert!(!report.failing.contains(&"M3"));
        }
    }
}

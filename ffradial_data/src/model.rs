// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset rows and sort orders.

use serde::Deserialize;

/// One state's fast-food metrics.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StateMetric {
    /// Full state name, for the tooltip heading.
    pub state: String,
    /// Two-letter abbreviation; the unique key and the angular domain value.
    pub abbrev: String,
    /// Fast-food restaurants per 1000 residents. Drives bar length.
    pub ff_percapita: f64,
    /// Distinct fast-food brands per 1000 residents. Drives bar color.
    pub unique_count: f64,
}

/// One state's per-brand restaurant counts.
///
/// Entry order is the dataset's column order and is preserved all the way to
/// the pie, so slices don't shuffle between hovers.
#[derive(Clone, Debug, PartialEq)]
pub struct StateBreakdown {
    /// Two-letter state abbreviation.
    pub abbrev: String,
    /// `(brand, count)` pairs in dataset column order.
    pub entries: Vec<(String, f64)>,
}

impl StateBreakdown {
    /// Returns the entries with strictly positive counts, in dataset order.
    ///
    /// Zero counts mean the brand has no restaurants in this state; they are
    /// display noise, not errors.
    pub fn positive_entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .filter(|(_, count)| count.is_finite() && *count > 0.0)
            .map(|(brand, count)| (brand.as_str(), *count))
    }
}

/// The chart's sort orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
    /// Alphabetical by state abbreviation. The initial order.
    #[default]
    ByState,
    /// Descending by total restaurants per capita.
    ByTotalPerCapita,
    /// Descending by unique brands per capita.
    ByUniquePerCapita,
}

/// Sorts metrics in place according to `mode`.
///
/// The sort is stable, so equal values keep their previous relative order.
pub fn sort_metrics(metrics: &mut [StateMetric], mode: SortMode) {
    match mode {
        SortMode::ByState => metrics.sort_by(|a, b| a.abbrev.cmp(&b.abbrev)),
        SortMode::ByTotalPerCapita => {
            metrics.sort_by(|a, b| b.ff_percapita.total_cmp(&a.ff_percapita));
        }
        SortMode::ByUniquePerCapita => {
            metrics.sort_by(|a, b| b.unique_count.total_cmp(&a.unique_count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(abbrev: &str, ff: f64, unique: f64) -> StateMetric {
        StateMetric {
            state: abbrev.to_string(),
            abbrev: abbrev.to_string(),
            ff_percapita: ff,
            unique_count: unique,
        }
    }

    #[test]
    fn sorting_is_a_permutation_in_the_comparator_order() {
        let original = vec![
            metric("TX", 0.4, 12.0),
            metric("AL", 0.9, 8.0),
            metric("WY", 0.6, 15.0),
        ];

        for mode in [
            SortMode::ByState,
            SortMode::ByTotalPerCapita,
            SortMode::ByUniquePerCapita,
        ] {
            let mut sorted = original.clone();
            sort_metrics(&mut sorted, mode);

            // Same multiset of states.
            let mut a: Vec<_> = original.iter().map(|m| m.abbrev.clone()).collect();
            let mut b: Vec<_> = sorted.iter().map(|m| m.abbrev.clone()).collect();
            a.sort();
            b.sort();
            assert_eq!(a, b);

            // Comparator order holds pairwise.
            for w in sorted.windows(2) {
                match mode {
                    SortMode::ByState => assert!(w[0].abbrev <= w[1].abbrev),
                    SortMode::ByTotalPerCapita => {
                        assert!(w[0].ff_percapita >= w[1].ff_percapita);
                    }
                    SortMode::ByUniquePerCapita => {
                        assert!(w[0].unique_count >= w[1].unique_count);
                    }
                }
            }
        }
    }

    #[test]
    fn wyoming_leads_per_capita_alabama_leads_alphabetically() {
        // Wyoming's tiny population gives it a huge per-capita value even
        // with few restaurants.
        let mut metrics = vec![metric("WY", 0.97, 15.0), metric("AL", 0.61, 8.0)];

        sort_metrics(&mut metrics, SortMode::ByTotalPerCapita);
        assert_eq!(metrics[0].abbrev, "WY");

        sort_metrics(&mut metrics, SortMode::ByState);
        assert_eq!(metrics[0].abbrev, "AL");
    }

    #[test]
    fn stable_sort_keeps_ties_in_place() {
        let mut metrics = vec![
            metric("AA", 1.0, 1.0),
            metric("BB", 1.0, 1.0),
            metric("CC", 2.0, 1.0),
        ];
        sort_metrics(&mut metrics, SortMode::ByTotalPerCapita);
        assert_eq!(metrics[0].abbrev, "CC");
        assert_eq!(metrics[1].abbrev, "AA");
        assert_eq!(metrics[2].abbrev, "BB");
    }

    #[test]
    fn positive_entries_filters_zeros_but_keeps_order() {
        let breakdown = StateBreakdown {
            abbrev: "WY".to_string(),
            entries: vec![
                ("Subway".to_string(), 92.0),
                ("Burger King".to_string(), 0.0),
                ("Taco Bell".to_string(), 14.0),
                ("Arby's".to_string(), -1.0),
            ],
        };
        let kept: Vec<_> = breakdown.positive_entries().collect();
        assert_eq!(kept, vec![("Subway", 92.0), ("Taco Bell", 14.0)]);
    }
}

// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV loading and validation.
//!
//! Two files feed the chart: a per-state metrics file with fixed columns, and
//! a wide breakdown file whose header names the brand columns. Loaders are
//! generic over `io::Read` so tests feed them byte slices and the binary feeds
//! them files.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use std::thread;

use crate::error::DataError;
use crate::model::{StateBreakdown, StateMetric};

/// Reads and validates the per-state metrics CSV.
///
/// Expected header: `state,abbrev,ff_percapita,unique_count`. Duplicate
/// abbreviations and negative metric values are rejected; a chart keyed on
/// abbreviations cannot represent either.
pub fn load_metrics(reader: impl std::io::Read) -> Result<Vec<StateMetric>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut seen = HashSet::new();
    let mut metrics = Vec::new();
    for row in csv_reader.deserialize() {
        let metric: StateMetric = row?;
        if !seen.insert(metric.abbrev.clone()) {
            return Err(DataError::DuplicateState(metric.abbrev));
        }
        for (column, value) in [
            ("ff_percapita", metric.ff_percapita),
            ("unique_count", metric.unique_count),
        ] {
            if value < 0.0 {
                return Err(DataError::NegativeValue {
                    abbrev: metric.abbrev.clone(),
                    column,
                    value,
                });
            }
        }
        metrics.push(metric);
    }
    Ok(metrics)
}

/// Reads the wide per-brand breakdown CSV.
///
/// The first header cell must be `abbrev`; every other header cell is a brand
/// name, in the column order the pie will use. Counts may be zero (filtered at
/// display time) but must parse as numbers.
pub fn load_breakdowns(reader: impl std::io::Read) -> Result<Vec<StateBreakdown>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns = headers.iter();
    match columns.next() {
        Some("abbrev") => {}
        other => {
            return Err(DataError::MissingKeyColumn(
                other.unwrap_or_default().to_string(),
            ));
        }
    }
    let brands: Vec<String> = columns.map(str::to_string).collect();

    let mut seen = HashSet::new();
    let mut breakdowns = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let abbrev = record.get(0).unwrap_or_default().to_string();
        if !seen.insert(abbrev.clone()) {
            return Err(DataError::DuplicateState(abbrev));
        }

        let mut entries = Vec::with_capacity(brands.len());
        for (i, brand) in brands.iter().enumerate() {
            let raw = record.get(i + 1).unwrap_or_default();
            let count = raw.parse::<f64>().map_err(|_| DataError::BadCount {
                abbrev: abbrev.clone(),
                brand: brand.clone(),
                raw: raw.to_string(),
            })?;
            entries.push((brand.clone(), count));
        }
        breakdowns.push(StateBreakdown { abbrev, entries });
    }
    Ok(breakdowns)
}

/// Loads both datasets concurrently from files.
///
/// All-or-nothing: if either load fails, the other result is dropped and the
/// error is returned, so the chart never renders partial data.
pub fn load_datasets(
    metrics_path: impl AsRef<Path>,
    breakdowns_path: impl AsRef<Path>,
) -> Result<(Vec<StateMetric>, Vec<StateBreakdown>), DataError> {
    let metrics_path = metrics_path.as_ref();
    let breakdowns_path = breakdowns_path.as_ref();
    thread::scope(|scope| {
        let metrics = scope.spawn(|| load_metrics(File::open(metrics_path)?));
        let breakdowns = scope.spawn(|| load_breakdowns(File::open(breakdowns_path)?));

        // Scoped threads don't outlive this block, so join cannot dangle; a
        // panic in a loader propagates as a panic here.
        let metrics = metrics.join().expect("metrics loader panicked")?;
        let breakdowns = breakdowns.join().expect("breakdowns loader panicked")?;
        Ok((metrics, breakdowns))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: &str = "\
state,abbrev,ff_percapita,unique_count
Alabama,AL,0.61,8
Wyoming,WY,0.97,15
";

    const BREAKDOWNS: &str = "\
abbrev,Subway,Burger King,Other
AL,912,244,1301
WY,92,14,87
";

    #[test]
    fn metrics_load_in_file_order() {
        let metrics = load_metrics(METRICS.as_bytes()).unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].abbrev, "AL");
        assert_eq!(metrics[0].state, "Alabama");
        assert_eq!(metrics[1].ff_percapita, 0.97);
    }

    #[test]
    fn duplicate_abbreviations_are_rejected() {
        let csv = "state,abbrev,ff_percapita,unique_count\nAlabama,AL,1,1\nAlaska,AL,1,1\n";
        let err = load_metrics(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::DuplicateState(a) if a == "AL"));
    }

    #[test]
    fn negative_metrics_are_rejected() {
        let csv = "state,abbrev,ff_percapita,unique_count\nAlabama,AL,-0.2,8\n";
        let err = load_metrics(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::NegativeValue {
                column: "ff_percapita",
                ..
            }
        ));
    }

    #[test]
    fn breakdown_brands_come_from_the_header_in_order() {
        let breakdowns = load_breakdowns(BREAKDOWNS.as_bytes()).unwrap();
        assert_eq!(breakdowns.len(), 2);
        let brands: Vec<_> = breakdowns[0].entries.iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(brands, vec!["Subway", "Burger King", "Other"]);
        assert_eq!(breakdowns[1].entries[0], ("Subway".to_string(), 92.0));
    }

    #[test]
    fn breakdown_requires_the_abbrev_key_column() {
        let csv = "state,Subway\nAL,912\n";
        let err = load_breakdowns(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingKeyColumn(c) if c == "state"));
    }

    #[test]
    fn non_numeric_counts_are_rejected() {
        let csv = "abbrev,Subway\nAL,lots\n";
        let err = load_breakdowns(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::BadCount { raw, .. } if raw == "lots"));
    }

    #[test]
    fn missing_cells_are_rejected_not_defaulted() {
        let csv = "abbrev,Subway,Other\nAL,912\n";
        // The csv crate reports unequal row lengths itself.
        assert!(load_breakdowns(csv.as_bytes()).is_err());
    }
}

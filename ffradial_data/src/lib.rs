// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset loading, validation, and sorting for the ffradial chart.
//!
//! Two CSV inputs: per-state metrics (bar length and color) and a wide
//! per-brand breakdown (the hover pie). Loading is all-or-nothing; sorting is
//! an in-place reorder of the metrics, which is all a re-sort of the chart
//! needs.

mod error;
mod load;
mod model;

pub use error::DataError;
pub use load::{load_breakdowns, load_datasets, load_metrics};
pub use model::{SortMode, StateBreakdown, StateMetric, sort_metrics};

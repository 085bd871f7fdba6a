// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset errors.

use std::io;

use thiserror::Error;

/// Errors from loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening or reading a file failed.
    #[error("reading dataset failed")]
    Io(#[from] io::Error),

    /// CSV parsing or deserialization failed.
    #[error("parsing dataset failed")]
    Csv(#[from] csv::Error),

    /// Two rows share a state abbreviation.
    #[error("duplicate state abbreviation `{0}`")]
    DuplicateState(String),

    /// A metric value is negative.
    #[error("negative value {value} in column `{column}` for state `{abbrev}`")]
    NegativeValue {
        /// The offending state's abbreviation.
        abbrev: String,
        /// The offending column.
        column: &'static str,
        /// The value found.
        value: f64,
    },

    /// The breakdown file is missing its state key column.
    #[error("breakdown file must start with an `abbrev` column, found `{0}`")]
    MissingKeyColumn(String),

    /// A breakdown cell is not a number.
    #[error("breakdown value for `{abbrev}` / `{brand}` is not a number: `{raw}`")]
    BadCount {
        /// The row's state abbreviation.
        abbrev: String,
        /// The column's brand name.
        brand: String,
        /// The raw cell contents.
        raw: String,
    },
}

// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrapping for annotation text.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::measure::TextMeasurer;

/// Wraps `text` into lines no wider than `max_width`, greedily.
///
/// Words are split on ASCII whitespace. A word is moved to the next line as
/// soon as appending it would exceed `max_width`; a single word wider than
/// `max_width` gets a line of its own rather than being broken mid-word.
pub fn wrap_text(
    text: &str,
    max_width: f64,
    font_size: f64,
    measurer: &impl TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let mut candidate = line.clone();
        candidate.push(' ');
        candidate.push_str(word);
        let (width, _) = measurer.measure(&candidate, font_size);
        if width > max_width {
            lines.push(core::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

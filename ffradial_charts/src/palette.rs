// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical colors for breakdown slices.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// The 12-color pastel palette used for categorical series.
pub const CATEGORICAL_12: [Color; 12] = [
    Color::from_rgb8(0x8d, 0xd3, 0xc7),
    Color::from_rgb8(0xff, 0xff, 0xb3),
    Color::from_rgb8(0xbe, 0xba, 0xda),
    Color::from_rgb8(0xfb, 0x80, 0x72),
    Color::from_rgb8(0x80, 0xb1, 0xd3),
    Color::from_rgb8(0xfd, 0xb4, 0x62),
    Color::from_rgb8(0xb3, 0xde, 0x69),
    Color::from_rgb8(0xfc, 0xcd, 0xe5),
    Color::from_rgb8(0xd9, 0xd9, 0xd9),
    Color::from_rgb8(0xbc, 0x80, 0xbd),
    Color::from_rgb8(0xcc, 0xeb, 0xc5),
    Color::from_rgb8(0xff, 0xed, 0x6f),
];

/// Assigns stable categorical colors to brand names.
///
/// Colors must not change with hover order: hovering Wyoming and then Alabama
/// has to show "Subway" in the same color both times. Known brands are seeded
/// into fixed palette slots at construction; anything else hashes into the
/// remaining palette deterministically from its name alone.
#[derive(Clone, Debug, Default)]
pub struct BrandPalette {
    seeded: Vec<String>,
}

impl BrandPalette {
    /// The brands seeded into fixed palette slots, in slot order.
    pub const SEEDED_BRANDS: [&'static str; 6] = [
        "Subway",
        "Burger King",
        "Taco Bell",
        "Arby's",
        "Other",
        "McDonald's",
    ];

    /// Creates a palette with the default brand seeding.
    pub fn new() -> Self {
        Self {
            seeded: Self::SEEDED_BRANDS.iter().map(|s| String::from(*s)).collect(),
        }
    }

    /// Creates a palette seeding the given names into slots 0..n.
    pub fn with_seeds(seeds: impl IntoIterator<Item = String>) -> Self {
        Self {
            seeded: seeds.into_iter().collect(),
        }
    }

    /// Returns the color for a brand name.
    pub fn color(&self, name: &str) -> Color {
        let slot = match self.seeded.iter().position(|s| s == name) {
            Some(i) => i % CATEGORICAL_12.len(),
            None => hash_slot(name),
        };
        CATEGORICAL_12[slot]
    }
}

// FNV-1a. Stable across runs, unlike the default hasher.
fn hash_slot(name: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "reduced modulo the palette size"
    )]
    {
        (hash % CATEGORICAL_12.len() as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn seeded_brands_take_the_first_slots() {
        let palette = BrandPalette::new();
        assert_eq!(palette.color("Subway"), CATEGORICAL_12[0]);
        assert_eq!(palette.color("Burger King"), CATEGORICAL_12[1]);
        assert_eq!(palette.color("McDonald's"), CATEGORICAL_12[5]);
    }

    #[test]
    fn unknown_brands_are_stable_across_calls() {
        let palette = BrandPalette::new();
        let a = palette.color("Chick-fil-A");
        let b = palette.color("Chick-fil-A");
        assert_eq!(a, b);
        assert!(CATEGORICAL_12.contains(&a));
    }

    #[test]
    fn unknown_brand_color_ignores_seeding_state() {
        // Two palettes with different seeds give the same color for a name
        // neither has seen.
        let a = BrandPalette::new();
        let b = BrandPalette::with_seeds(core::iter::empty());
        assert_eq!(a.color("Wendy's"), b.color("Wendy's"));
    }
}

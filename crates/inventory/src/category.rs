use serde::{Deserialize, Serialize};

use gildedrose_core::{ValueObject, clamp};

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Exact name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Exact name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Substring marking backstage passes.
pub const BACKSTAGE_PASSES: &str = "Backstage passes";
/// Substring marking conjured items.
pub const CONJURED: &str = "Conjured";

/// Backstage passes gain +2 from this many days out.
const BACKSTAGE_DOUBLE_FROM: i32 = 10;
/// Backstage passes gain +3 from this many days out.
const BACKSTAGE_TRIPLE_FROM: i32 = 5;

/// Aging behavior of an item, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Never sold, never ages.
    Legendary,
    /// Gains quality with age, twice as fast past the sell-by date.
    Aged,
    /// Gains quality as the concert approaches, worthless once it has passed.
    Backstage,
    /// Degrades twice as fast as ordinary items.
    Conjured,
    /// Degrades by one per day, two past the sell-by date.
    Ordinary,
}

impl ValueObject for ItemCategory {}

impl ItemCategory {
    /// Classify an item by name. First match wins; unknown names are ordinary.
    pub fn classify(name: &str) -> Self {
        if name == SULFURAS {
            ItemCategory::Legendary
        } else if name == AGED_BRIE {
            ItemCategory::Aged
        } else if name.contains(BACKSTAGE_PASSES) {
            ItemCategory::Backstage
        } else if name.contains(CONJURED) {
            ItemCategory::Conjured
        } else {
            ItemCategory::Ordinary
        }
    }

    /// Compute the next-day `(sell_in, quality)` for an item of this category.
    ///
    /// Quality is adjusted using the sell-in value *before* it is decremented,
    /// then sell-in drops by one, then items past their sell-by date get their
    /// correction. Every step is clamped, so no intermediate value escapes
    /// `[MIN_QUALITY, MAX_QUALITY]`.
    pub fn next_state(self, sell_in: i32, quality: i32) -> (i32, i32) {
        if self == ItemCategory::Legendary {
            return (sell_in, quality);
        }

        let mut quality = match self {
            ItemCategory::Legendary => quality,
            ItemCategory::Aged => raise(quality, 1),
            ItemCategory::Backstage => {
                let mut q = raise(quality, 1);
                if sell_in <= BACKSTAGE_DOUBLE_FROM {
                    q = raise(q, 1);
                }
                if sell_in <= BACKSTAGE_TRIPLE_FROM {
                    q = raise(q, 1);
                }
                q
            }
            ItemCategory::Conjured => lower(quality, 2),
            ItemCategory::Ordinary => lower(quality, 1),
        };

        let sell_in = sell_in.saturating_sub(1);

        if sell_in < 0 {
            quality = match self {
                ItemCategory::Legendary => quality,
                ItemCategory::Aged => raise(quality, 1),
                ItemCategory::Backstage => MIN_QUALITY,
                ItemCategory::Conjured => lower(quality, 2),
                ItemCategory::Ordinary => lower(quality, 1),
            };
        }

        (sell_in, quality)
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ItemCategory::Legendary => "legendary",
            ItemCategory::Aged => "aged",
            ItemCategory::Backstage => "backstage",
            ItemCategory::Conjured => "conjured",
            ItemCategory::Ordinary => "ordinary",
        };
        f.write_str(s)
    }
}

fn raise(quality: i32, by: i32) -> i32 {
    clamp(quality.saturating_add(by), MIN_QUALITY, MAX_QUALITY)
}

fn lower(quality: i32, by: i32) -> i32 {
    clamp(quality.saturating_sub(by), MIN_QUALITY, MAX_QUALITY)
}

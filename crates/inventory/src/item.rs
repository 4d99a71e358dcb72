use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::{ItemCategory, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// An inventory record. Owned by the caller and aged in place by
/// [`GildedRose`](crate::GildedRose).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell; negative once past the sell-by date.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Build an item as-is. Input validity is the caller's concern.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Build an item, rejecting states the aging rules never produce.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        match item.category() {
            ItemCategory::Legendary if item.quality != LEGENDARY_QUALITY => {
                Err(DomainError::invariant(format!(
                    "legendary quality must be {LEGENDARY_QUALITY} (got {})",
                    item.quality
                )))
            }
            ItemCategory::Legendary => Ok(item),
            _ if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) => {
                Err(DomainError::invariant(format!(
                    "quality must be within [{MIN_QUALITY}, {MAX_QUALITY}] (got {})",
                    item.quality
                )))
            }
            _ => Ok(item),
        }
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::classify(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

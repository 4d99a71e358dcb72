//! Daily update engine.

use crate::category::ItemCategory;
use crate::item::Item;

/// Ages a caller-owned collection of items, one simulated day per call.
///
/// The engine borrows the items exclusively and classifies each one once, at
/// construction. Names cannot change while the borrow is held, so the cached
/// categories stay valid for the engine's lifetime.
#[derive(Debug)]
pub struct GildedRose<'a> {
    items: &'a mut [Item],
    categories: Vec<ItemCategory>,
}

impl<'a> GildedRose<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        let categories = items.iter().map(Item::category).collect();
        Self { items, categories }
    }

    pub fn items(&self) -> &[Item] {
        &*self.items
    }

    pub fn categories(&self) -> &[ItemCategory] {
        &self.categories
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        let span = tracing::debug_span!("update_quality", items = self.items.len());
        let _enter = span.enter();

        for (item, category) in self.items.iter_mut().zip(self.categories.iter().copied()) {
            let (sell_in, quality) = category.next_state(item.sell_in, item.quality);
            tracing::trace!(
                name = %item.name,
                %category,
                sell_in_before = item.sell_in,
                quality_before = item.quality,
                sell_in,
                quality,
                "item aged"
            );
            item.sell_in = sell_in;
            item.quality = quality;
        }
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}

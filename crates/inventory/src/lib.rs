//! Inventory aging module.
//!
//! This crate contains the daily aging rules for inventory items, implemented
//! purely as deterministic domain logic (no IO, no clocks, no storage). The
//! caller owns the items and decides when a day has passed.

pub mod category;
pub mod engine;
pub mod item;

pub use category::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED, ItemCategory, LEGENDARY_QUALITY, MAX_QUALITY,
    MIN_QUALITY, SULFURAS,
};
pub use engine::GildedRose;
pub use item::Item;

//! # gilded_rose - Deterministic Nightly Inventory Aging
//!
//! A small rules engine that ages shop items by one day at a time. Each
//! item's name selects an update rule, and the rule decides how the
//! item's quality and shelf-life change overnight.
//!
//! ## Core Concepts
//!
//! ### Tick Pipeline
//!
//! ```text
//! [Item name] → [select] → [UpdateRule] → (next shelf-life, next quality)
//! ```
//!
//! 1. **Selection** maps a name to a rule; unknown names age as ordinary items
//! 2. **Rules** compute both new values from the *pre-tick* values
//! 3. **Item** stores the results in place
//!
//! ### Rules
//!
//! | Rule | Items | Quality per day |
//! |---|---|---|
//! | `OrdinaryDecay` | Normal Item, unknown names | -1, then -2 past sell-by; floor 0 |
//! | `Improving` | Aged Brie, Aged Wine, Whisky | threshold table; cap 50 |
//! | `Immutable` | Sulfuras, Hand of Ragnaros | unchanged |
//! | `EventPass` | Backstage passes | +1 / +2 / +3, then 0 after the event |
//! | `AcceleratedDecay` | Conjured Mana Cake | -2, then -4; floor 0 |
//! | `FractionalDecay` | not routed by default | -1, then -2; shelf-life -0.5 |
//!
//! Every operation is total. Selection and ticking never fail, and
//! shelf-life may run arbitrarily negative.
//!
//! ## Example
//!
//! ```rust
//! use gilded_rose::Item;
//!
//! let mut wine = Item::new("Aged Wine", 0.0, 10);
//! wine.tick();
//! assert_eq!((wine.shelf_life(), wine.quality()), (-1.0, 12));
//!
//! let mut sulfuras = Item::new("Sulfuras, Hand of Ragnaros", 5.0, 80);
//! sulfuras.tick_days(30);
//! assert_eq!((sulfuras.shelf_life(), sulfuras.quality()), (5.0, 80));
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The aged item
//! - [`rule`] - Update rules
//! - [`threshold`] - Shelf-life bracket tables for improving items
//! - [`selector`] - Name to rule selection and the rule registry
//! - [`category`] - Named item categories
//! - [`numeric`] - Shelf-life and quality types
//! - [`error`] - Error types

pub mod category;
pub mod error;
pub mod item;
pub mod numeric;
pub mod rule;
pub mod selector;
pub mod threshold;

// Re-export main types for convenience
pub use category::Category;
pub use error::RuleError;
pub use item::Item;
pub use rule::UpdateRule;
pub use selector::{select, SelectorConfig, UpdateRuleSelector};
pub use threshold::{Bracket, ThresholdTable};

pub use numeric::{Days, Quality, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

//! Inventory item module.
//!
//! Contains the `Item` type: a named item with a shelf-life counter and
//! a quality score, aged one day at a time by `tick`.

use crate::numeric::{Days, Quality};
use crate::rule::UpdateRule;
use crate::selector::{select, UpdateRuleSelector};
use serde::{Deserialize, Serialize};

/// A shop item aged nightly by the rule its name selects.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::Item;
///
/// let mut item = Item::new("Aged Brie", 5.0, 10);
/// item.tick();
///
/// assert_eq!(item.shelf_life(), 4.0);
/// assert_eq!(item.quality(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    shelf_life: Days,
    quality: Quality,
}

impl Item {
    /// Create a new item. Values are taken as given; no category check
    /// or quality clamp is applied up front.
    pub fn new(name: impl Into<String>, shelf_life: Days, quality: Quality) -> Self {
        Self {
            name: name.into(),
            shelf_life,
            quality,
        }
    }

    /// The item name, which selects its update rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining until the sell-by date.
    pub fn shelf_life(&self) -> Days {
        self.shelf_life
    }

    /// Current quality.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Age the item by one day using the standard rule table.
    ///
    /// Returns the updated `(shelf_life, quality)` pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gilded_rose::Item;
    ///
    /// let mut pass = Item::new("Backstage passes to a TAFKAL80ETC concert", 0.0, 10);
    /// assert_eq!(pass.tick(), (-1.0, 0));
    /// ```
    pub fn tick(&mut self) -> (Days, Quality) {
        let rule = select(&self.name);
        self.apply(&rule)
    }

    /// Age the item by one day using a custom rule registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gilded_rose::{Item, UpdateRule, UpdateRuleSelector};
    ///
    /// let mut selector = UpdateRuleSelector::new();
    /// selector.register("Enchanted Hourglass", UpdateRule::FractionalDecay).unwrap();
    ///
    /// let mut hourglass = Item::new("Enchanted Hourglass", 1.0, 10);
    /// assert_eq!(hourglass.tick_with(&selector), (0.5, 9));
    /// ```
    pub fn tick_with(&mut self, selector: &UpdateRuleSelector) -> (Days, Quality) {
        let rule = selector.select(&self.name);
        self.apply(rule)
    }

    /// Age the item by several days, one tick at a time.
    pub fn tick_days(&mut self, days: u32) -> (Days, Quality) {
        let rule = select(&self.name);
        for _ in 0..days {
            self.apply(&rule);
        }
        (self.shelf_life, self.quality)
    }

    fn apply(&mut self, rule: &UpdateRule) -> (Days, Quality) {
        let (shelf_life, quality) = rule.apply(self.shelf_life, self.quality);
        tracing::trace!(
            name = %self.name,
            rule = rule.kind(),
            from_shelf_life = self.shelf_life,
            from_quality = self.quality,
            shelf_life,
            quality,
            "ticked item"
        );
        self.shelf_life = shelf_life;
        self.quality = quality;
        (shelf_life, quality)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.shelf_life, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Normal Item", 5.0, 10);
        assert_eq!(item.name(), "Normal Item");
        assert_eq!(item.shelf_life(), 5.0);
        assert_eq!(item.quality(), 10);
    }

    #[test]
    fn test_tick_uses_pre_tick_shelf_life() {
        // Quality must see shelf-life 1, not the decremented 0
        let mut item = Item::new("Normal Item", 1.0, 10);
        assert_eq!(item.tick(), (0.0, 9));
        assert_eq!(item.tick(), (-1.0, 7));
    }

    #[test]
    fn test_tick_days() {
        let mut pass = Item::new("Backstage passes to a TAFKAL80ETC concert", 12.0, 0);
        // 11 and 12 give +1 each, 10..=6 give +2, 5..=1 give +3, then reset
        assert_eq!(pass.tick_days(2), (10.0, 2));
        assert_eq!(pass.tick_days(5), (5.0, 12));
        assert_eq!(pass.tick_days(5), (0.0, 27));
        assert_eq!(pass.tick_days(1), (-1.0, 0));
    }

    #[test]
    fn test_tick_days_zero_is_noop() {
        let mut item = Item::new("Conjured Mana Cake", 3.0, 7);
        assert_eq!(item.tick_days(0), (3.0, 7));
    }

    #[test]
    fn test_display() {
        let item = Item::new("Aged Brie", 2.0, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");

        let hourglass = Item::new("Enchanted Hourglass", -0.5, 3);
        assert_eq!(hourglass.to_string(), "Enchanted Hourglass, -0.5, 3");
    }

    #[test]
    fn test_serialize() {
        let item = Item::new("Whisky", 3.0, 20);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Whisky","shelf_life":3.0,"quality":20}"#);

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}

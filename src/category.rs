//! Item category module.
//!
//! Provides the `Category` type, the closed set of item names the
//! standard rule table routes to a dedicated rule. Any other name is an
//! ordinary item.

use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Item categories with a dedicated rule in the standard table.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::Category;
///
/// let brie: Category = "Aged Brie".parse().unwrap();
/// assert_eq!(brie, Category::AgedBrie);
/// assert_eq!(brie.as_str(), "Aged Brie");
///
/// // Lenient lookup for names outside the table
/// assert_eq!(Category::from_name("Elixir of the Mongoose"), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    Normal,
    AgedBrie,
    AgedWine,
    Whisky,
    Sulfuras,
    BackstagePass,
    ConjuredManaCake,
}

impl Category {
    /// Every routed category, in table order.
    pub const ALL: [Category; 7] = [
        Category::Normal,
        Category::AgedBrie,
        Category::AgedWine,
        Category::Whisky,
        Category::Sulfuras,
        Category::BackstagePass,
        Category::ConjuredManaCake,
    ];

    /// The item name that selects this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "Normal Item",
            Category::AgedBrie => "Aged Brie",
            Category::AgedWine => "Aged Wine",
            Category::Whisky => "Whisky",
            Category::Sulfuras => "Sulfuras, Hand of Ragnaros",
            Category::BackstagePass => "Backstage passes to a TAFKAL80ETC concert",
            Category::ConjuredManaCake => "Conjured Mana Cake",
        }
    }

    /// Look up a category by exact item name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl FromStr for Category {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RuleError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

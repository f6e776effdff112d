//! Rule selection module.
//!
//! Maps item names to update rules. The free function [`select`] covers
//! the standard table and is what [`Item::tick`](crate::Item::tick) uses.
//! [`UpdateRuleSelector`] is an open registry for callers that need to
//! route extra names, such as the dormant fractional-decay rule, or load
//! the table from configuration.

use crate::category::Category;
use crate::error::RuleError;
use crate::rule::UpdateRule;
use crate::threshold::ThresholdTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

impl Category {
    /// The rule the standard table assigns to this category.
    pub fn rule(self) -> UpdateRule {
        match self {
            Category::Normal => UpdateRule::OrdinaryDecay,
            Category::AgedBrie => UpdateRule::Improving(ThresholdTable::brie()),
            Category::AgedWine => UpdateRule::Improving(ThresholdTable::wine()),
            Category::Whisky => UpdateRule::Improving(ThresholdTable::whisky()),
            Category::Sulfuras => UpdateRule::Immutable,
            Category::BackstagePass => UpdateRule::EventPass,
            Category::ConjuredManaCake => UpdateRule::AcceleratedDecay,
        }
    }
}

/// Select the standard rule for an item name.
///
/// Total over all names: anything outside the standard table ages as an
/// ordinary item.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::{select, UpdateRule};
///
/// assert_eq!(select("Sulfuras, Hand of Ragnaros"), UpdateRule::Immutable);
/// assert_eq!(select("Elixir of the Mongoose"), UpdateRule::OrdinaryDecay);
/// ```
pub fn select(name: &str) -> UpdateRule {
    match Category::from_name(name) {
        Some(category) => category.rule(),
        None => {
            tracing::debug!(name, "no category for item name, using ordinary decay");
            UpdateRule::default()
        }
    }
}

/// Serializable rule table.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::SelectorConfig;
///
/// let config: SelectorConfig = serde_json::from_str(r#"{
///     "rules": { "Enchanted Hourglass": { "kind": "fractional_decay" } }
/// }"#).unwrap();
/// assert_eq!(config.rules.len(), 1);
/// assert!(config.fallback.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Rule for names with no entry. Ordinary decay when absent.
    #[serde(default)]
    pub fallback: Option<UpdateRule>,
    /// Rules keyed by exact item name.
    #[serde(default)]
    pub rules: BTreeMap<String, UpdateRule>,
}

/// Registry mapping item names to update rules.
///
/// Starts from the standard table with [`UpdateRuleSelector::new`], or
/// from nothing with [`UpdateRuleSelector::empty`]. Selection always
/// succeeds: unregistered names get the fallback rule.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::{UpdateRule, UpdateRuleSelector};
///
/// let mut selector = UpdateRuleSelector::new();
/// selector
///     .register("Enchanted Hourglass", UpdateRule::FractionalDecay)
///     .unwrap();
///
/// assert_eq!(
///     selector.select("Enchanted Hourglass"),
///     &UpdateRule::FractionalDecay
/// );
/// assert_eq!(selector.select("Anything Else"), &UpdateRule::OrdinaryDecay);
/// ```
#[derive(Debug, Clone)]
pub struct UpdateRuleSelector {
    /// Rules keyed by exact item name.
    rules: HashMap<String, UpdateRule>,

    /// Rule for names with no entry.
    fallback: UpdateRule,
}

impl UpdateRuleSelector {
    /// Create a selector holding the standard table.
    pub fn new() -> Self {
        let rules = Category::ALL
            .into_iter()
            .map(|category| (category.as_str().to_string(), category.rule()))
            .collect();
        Self {
            rules,
            fallback: UpdateRule::default(),
        }
    }

    /// Create a selector with no entries, so every name gets the fallback.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: UpdateRule::default(),
        }
    }

    /// Replace the fallback rule.
    pub fn with_fallback(mut self, fallback: UpdateRule) -> Self {
        self.fallback = fallback;
        self
    }

    /// Register a rule for a name that has none yet.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::DuplicateCategory` if the name already has a
    /// rule. The existing rule is left in place.
    pub fn register(&mut self, name: impl Into<String>, rule: UpdateRule) -> Result<(), RuleError> {
        let name = name.into();
        if self.rules.contains_key(&name) {
            return Err(RuleError::DuplicateCategory(name));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Set the rule for a name, returning the rule it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rule: UpdateRule) -> Option<UpdateRule> {
        let name = name.into();
        let previous = self.rules.insert(name.clone(), rule);
        if let Some(previous) = &previous {
            tracing::debug!(name = %name, replaced = previous.kind(), "replaced update rule");
        }
        previous
    }

    /// Select the rule for a name, or the fallback.
    pub fn select(&self, name: &str) -> &UpdateRule {
        match self.rules.get(name) {
            Some(rule) => rule,
            None => {
                tracing::debug!(name, fallback = self.fallback.kind(), "no rule for item name");
                &self.fallback
            }
        }
    }

    /// Check whether a name has its own rule.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of named rules, not counting the fallback.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no name has its own rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule used for unregistered names.
    pub fn fallback(&self) -> &UpdateRule {
        &self.fallback
    }

    /// Layer a configuration over the standard table.
    ///
    /// Configured names replace built-in entries of the same name.
    pub fn from_config(config: SelectorConfig) -> Self {
        let mut selector = Self::new();
        if let Some(fallback) = config.fallback {
            selector.fallback = fallback;
        }
        for (name, rule) in config.rules {
            selector.insert(name, rule);
        }
        selector
    }

    /// Parse a JSON [`SelectorConfig`] and layer it over the standard table.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidConfig` if the JSON is malformed or a
    /// threshold table in it is invalid.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        let config: SelectorConfig = serde_json::from_str(json)?;
        Ok(Self::from_config(config))
    }
}

impl Default for UpdateRuleSelector {
    fn default() -> Self {
        Self::new()
    }
}

//! Shelf-life threshold tables.
//!
//! Improving items gain quality at a rate that depends on how far past
//! the sell-by date they are. The rate is looked up in an ordered table
//! of brackets, where the first bracket containing the pre-tick
//! shelf-life wins.

use crate::error::RuleError;
use crate::numeric::{Days, Quality};
use serde::{Deserialize, Serialize};

/// A closed shelf-life range mapped to a quality delta.
///
/// `None` bounds are open, so `Bracket::new(None, Some(0), 2)` covers
/// every shelf-life at or below zero.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::threshold::Bracket;
///
/// let bracket = Bracket::new(Some(-9), Some(0), 2);
/// assert!(bracket.contains(-9.0));
/// assert!(bracket.contains(0.0));
/// assert!(!bracket.contains(-10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Inclusive lower bound, or unbounded below.
    #[serde(default)]
    pub lower: Option<i64>,
    /// Inclusive upper bound, or unbounded above.
    #[serde(default)]
    pub upper: Option<i64>,
    /// Quality change applied when the bracket matches.
    pub delta: Quality,
}

impl Bracket {
    /// Create a new bracket.
    pub fn new(lower: Option<i64>, upper: Option<i64>, delta: Quality) -> Self {
        Self {
            lower,
            upper,
            delta,
        }
    }

    /// Bracket covering `[lower, +inf)`.
    pub fn at_least(lower: i64, delta: Quality) -> Self {
        Self::new(Some(lower), None, delta)
    }

    /// Bracket covering `(-inf, upper]`.
    pub fn at_most(upper: i64, delta: Quality) -> Self {
        Self::new(None, Some(upper), delta)
    }

    /// Bracket covering `[lower, upper]`.
    pub fn between(lower: i64, upper: i64, delta: Quality) -> Self {
        Self::new(Some(lower), Some(upper), delta)
    }

    /// Check whether a shelf-life value falls inside this bracket.
    pub fn contains(&self, shelf_life: Days) -> bool {
        let above_lower = self.lower.map_or(true, |lower| shelf_life >= lower as Days);
        let below_upper = self.upper.map_or(true, |upper| shelf_life <= upper as Days);
        above_lower && below_upper
    }

    fn validate(&self) -> Result<(), RuleError> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower > upper => Err(RuleError::InvalidBracket {
                lower: self.lower,
                upper: self.upper,
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered list of brackets evaluated top to bottom.
///
/// A shelf-life that matches no bracket yields a delta of zero, so a
/// lookup never fails even when the brackets leave gaps.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::threshold::ThresholdTable;
///
/// let wine = ThresholdTable::wine();
/// assert_eq!(wine.delta_for(5.0), 1);
/// assert_eq!(wine.delta_for(-9.0), 2);
/// assert_eq!(wine.delta_for(-10.0), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bracket>", into = "Vec<Bracket>")]
pub struct ThresholdTable {
    brackets: Vec<Bracket>,
}

impl ThresholdTable {
    /// Build a table from brackets, rejecting inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::EmptyThresholdTable` when `brackets` is empty
    /// and `RuleError::InvalidBracket` when a bracket's lower bound is
    /// above its upper bound.
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, RuleError> {
        if brackets.is_empty() {
            return Err(RuleError::EmptyThresholdTable);
        }
        for bracket in &brackets {
            bracket.validate()?;
        }
        Ok(Self { brackets })
    }

    /// Aged Brie: +1 before the sell-by date, +2 from then on.
    pub fn brie() -> Self {
        Self {
            brackets: vec![Bracket::at_least(1, 1), Bracket::at_most(0, 2)],
        }
    }

    /// Aged Wine: +1 before the sell-by date, +2 for the following ten
    /// days, +3 after that.
    pub fn wine() -> Self {
        Self {
            brackets: vec![
                Bracket::at_least(1, 1),
                Bracket::between(-9, 0, 2),
                Bracket::at_most(-10, 3),
            ],
        }
    }

    /// Whisky: +1 before the sell-by date, -1 for the following ten
    /// days, +5 after that.
    ///
    /// The dip in the middle bracket breaks the pattern the other
    /// improving tables follow. It is kept as the rule is written.
    pub fn whisky() -> Self {
        Self {
            brackets: vec![
                Bracket::at_least(1, 1),
                Bracket::between(-9, 0, -1),
                Bracket::at_most(-10, 5),
            ],
        }
    }

    /// Quality delta for the given pre-tick shelf-life.
    pub fn delta_for(&self, shelf_life: Days) -> Quality {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(shelf_life))
            .map_or(0, |bracket| bracket.delta)
    }

    /// Brackets in evaluation order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

impl TryFrom<Vec<Bracket>> for ThresholdTable {
    type Error = RuleError;

    fn try_from(brackets: Vec<Bracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<ThresholdTable> for Vec<Bracket> {
    fn from(table: ThresholdTable) -> Self {
        table.brackets
    }
}

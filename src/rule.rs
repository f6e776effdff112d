//! Update rules.
//!
//! An update rule is the pair of pure transitions that ages one item
//! category by a day: one for quality, one for shelf-life. Rules hold
//! no per-item state, so the same rule value can age any number of
//! items.

use crate::numeric::{before_sell_by, cap_quality, floor_quality, Days, Quality};
use crate::threshold::ThresholdTable;
use serde::{Deserialize, Serialize};

/// Shelf-life step for items that age by half a day per tick.
const HALF_DAY: Days = 0.5;

/// The transition rule governing one item category.
///
/// Every operation is total: any shelf-life (including negative and
/// fractional values) and any quality produce a result.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::UpdateRule;
///
/// let rule = UpdateRule::EventPass;
/// assert_eq!(rule.apply(5.0, 10), (4.0, 13));
/// assert_eq!(rule.apply(0.0, 10), (-1.0, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "brackets", rename_all = "snake_case")]
pub enum UpdateRule {
    /// Loses 1 quality per day, 2 once past the sell-by date. Never
    /// drops below zero.
    #[default]
    OrdinaryDecay,

    /// Gains quality at a rate taken from a threshold table. Never
    /// rises above fifty.
    Improving(ThresholdTable),

    /// Neither field ever changes.
    Immutable,

    /// Gains 1, 2 or 3 quality as the event approaches, then drops to
    /// zero once it has passed.
    EventPass,

    /// Decays twice as fast as an ordinary item.
    AcceleratedDecay,

    /// Decays like an ordinary item while shelf-life moves by half a
    /// day per tick.
    FractionalDecay,
}

impl UpdateRule {
    /// Quality after one tick, computed from the pre-tick values.
    pub fn next_quality(&self, shelf_life: Days, quality: Quality) -> Quality {
        match self {
            UpdateRule::OrdinaryDecay | UpdateRule::FractionalDecay => {
                floor_quality(quality, decay_rate(shelf_life, 1))
            }
            UpdateRule::AcceleratedDecay => floor_quality(quality, decay_rate(shelf_life, 2)),
            UpdateRule::Improving(table) => cap_quality(quality, table.delta_for(shelf_life)),
            UpdateRule::Immutable => quality,
            UpdateRule::EventPass => {
                if before_sell_by(shelf_life) {
                    cap_quality(quality, event_pass_rate(shelf_life))
                } else {
                    0
                }
            }
        }
    }

    /// Shelf-life after one tick.
    pub fn next_shelf_life(&self, shelf_life: Days) -> Days {
        match self {
            UpdateRule::Immutable => shelf_life,
            UpdateRule::FractionalDecay => shelf_life - HALF_DAY,
            _ => shelf_life - 1.0,
        }
    }

    /// Compute both transitions from the same pre-tick values.
    ///
    /// Returns `(next_shelf_life, next_quality)`.
    pub fn apply(&self, shelf_life: Days, quality: Quality) -> (Days, Quality) {
        (
            self.next_shelf_life(shelf_life),
            self.next_quality(shelf_life, quality),
        )
    }

    /// Short name of the rule, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpdateRule::OrdinaryDecay => "ordinary_decay",
            UpdateRule::Improving(_) => "improving",
            UpdateRule::Immutable => "immutable",
            UpdateRule::EventPass => "event_pass",
            UpdateRule::AcceleratedDecay => "accelerated_decay",
            UpdateRule::FractionalDecay => "fractional_decay",
        }
    }
}

/// Decay per tick: `-base` before the sell-by date, double afterwards.
fn decay_rate(shelf_life: Days, base: Quality) -> Quality {
    if before_sell_by(shelf_life) {
        -base
    } else {
        -2 * base
    }
}

/// Event pass gain while the event is still ahead.
fn event_pass_rate(shelf_life: Days) -> Quality {
    if shelf_life > 10.0 {
        1
    } else if shelf_life > 5.0 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_decay() {
        let rule = UpdateRule::OrdinaryDecay;
        assert_eq!(rule.apply(5.0, 10), (4.0, 9));
        assert_eq!(rule.apply(0.0, 10), (-1.0, 8));
        assert_eq!(rule.apply(-10.0, 1), (-11.0, 0));
    }

    #[test]
    fn test_accelerated_decay() {
        let rule = UpdateRule::AcceleratedDecay;
        assert_eq!(rule.apply(5.0, 10), (4.0, 8));
        assert_eq!(rule.apply(0.0, 10), (-1.0, 6));
        assert_eq!(rule.apply(0.0, 3), (-1.0, 0));
    }

    #[test]
    fn test_improving_caps_not_floors() {
        let rule = UpdateRule::Improving(ThresholdTable::brie());
        assert_eq!(rule.apply(0.0, 49), (-1.0, 50));

        // Whisky's middle bracket can take quality down with no floor
        let whisky = UpdateRule::Improving(ThresholdTable::whisky());
        assert_eq!(whisky.apply(-3.0, 0), (-4.0, -1));
    }

    #[test]
    fn test_immutable_is_identity() {
        let rule = UpdateRule::Immutable;
        assert_eq!(rule.apply(-10.0, 80), (-10.0, 80));
        assert_eq!(rule.apply(3.5, 1000), (3.5, 1000));
    }

    #[test]
    fn test_event_pass_brackets() {
        let rule = UpdateRule::EventPass;
        assert_eq!(rule.next_quality(11.0, 10), 11);
        assert_eq!(rule.next_quality(10.0, 10), 12);
        assert_eq!(rule.next_quality(6.0, 10), 12);
        assert_eq!(rule.next_quality(5.0, 10), 13);
        assert_eq!(rule.next_quality(1.0, 10), 13);
        assert_eq!(rule.next_quality(1.0, 49), 50);
        assert_eq!(rule.next_quality(0.0, 10), 0);
        assert_eq!(rule.next_quality(-3.0, 70), 0);
    }

    #[test]
    fn test_fractional_decay_steps_half_a_day() {
        let rule = UpdateRule::FractionalDecay;
        assert_eq!(rule.apply(1.0, 10), (0.5, 9));
        assert_eq!(rule.apply(0.5, 9), (0.0, 8));
        assert_eq!(rule.apply(0.0, 8), (-0.5, 6));
        assert_eq!(rule.apply(-0.5, 1), (-1.0, 0));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&UpdateRule::EventPass).unwrap();
        assert_eq!(json, r#"{"kind":"event_pass"}"#);

        let rule: UpdateRule = serde_json::from_str(
            r#"{"kind": "improving", "brackets": [{"lower": 1, "delta": 1}, {"upper": 0, "delta": 2}]}"#,
        )
        .unwrap();
        assert_eq!(rule, UpdateRule::Improving(ThresholdTable::brie()));
    }

    #[test]
    fn test_default_is_ordinary_decay() {
        assert_eq!(UpdateRule::default(), UpdateRule::OrdinaryDecay);
        assert_eq!(UpdateRule::default().kind(), "ordinary_decay");
    }
}

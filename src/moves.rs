use schema::MoveCategory;
use serde::{Deserialize, Serialize};

/// A move in a combatant's loadout.
///
/// `accuracy` is carried for display only; resolution never rolls to hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub accuracy: u8,
    pub power: u32,
    /// Remaining uses. Never drops below zero.
    pub pp: u32,
    /// Element name used for STAB and effectiveness
    pub element: String,
    /// Picks the physical or special stat pair
    pub category: MoveCategory,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        element: impl Into<String>,
        category: MoveCategory,
        power: u32,
        pp: u32,
    ) -> Self {
        Self {
            name: name.into(),
            accuracy: 100,
            power,
            pp,
            element: element.into(),
            category,
        }
    }

    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.min(100);
        self
    }

    pub fn has_pp(&self) -> bool {
        self.pp > 0
    }

    /// Spend one use. Returns false (and changes nothing) when none remain.
    pub fn use_pp(&mut self) -> bool {
        if self.pp == 0 {
            return false;
        }
        self.pp -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_use_pp_stops_at_zero() {
        let mut tackle = Move::new("tackle", "normal", MoveCategory::Physical, 40, 1);
        assert!(tackle.use_pp());
        assert_eq!(tackle.pp, 0);
        assert!(!tackle.use_pp());
        assert_eq!(tackle.pp, 0);
        assert!(!tackle.has_pp());
    }

    #[test]
    fn test_accuracy_is_capped() {
        let swift = Move::new("swift", "normal", MoveCategory::Special, 60, 20).with_accuracy(250);
        assert_eq!(swift.accuracy, 100);
    }

    proptest! {
        #[test]
        fn prop_pp_never_underflows(start in 0u32..64, uses in 0usize..200) {
            let mut m = Move::new("ember", "fire", MoveCategory::Special, 40, start);
            let mut spent = 0u32;
            for _ in 0..uses {
                if m.use_pp() {
                    spent += 1;
                }
            }
            prop_assert_eq!(m.pp, start.saturating_sub(uses as u32));
            prop_assert_eq!(spent, start.min(uses as u32));
        }
    }
}

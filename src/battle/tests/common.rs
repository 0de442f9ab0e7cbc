use crate::battle::state::BattleState;
use crate::moves::Move;
use crate::pokemon::Combatant;
use schema::{Element, MoveCategory, StatType};
use std::sync::Arc;

/// A builder for test combatants with flat, predictable stats.
///
/// # Example
/// ```ignore
/// let combatant = TestCombatantBuilder::new("pikachu")
///     .with_hp(50)
///     .with_moves(vec![tackle(10)])
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    stats: [i32; 6],
    elements: Vec<Arc<Element>>,
    moves: Vec<Move>,
}

impl TestCombatantBuilder {
    /// Every stat starts at 100 and the combatant is a plain "normal" element.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stats: [100; 6],
            elements: vec![Arc::new(Element::new("normal"))],
            moves: Vec::new(),
        }
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.stats[StatType::Hp.index()] = hp;
        self
    }

    pub fn with_stat(mut self, stat: StatType, value: i32) -> Self {
        self.stats[stat.index()] = value;
        self
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements.into_iter().map(Arc::new).collect();
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    pub fn build(self) -> Combatant {
        Combatant::new(0, self.name, self.stats, self.elements, self.moves)
    }
}

/// A physical move of an element no test combatant carries, so no STAB and
/// no effectiveness applies.
pub fn plain_move(name: &str, power: u32, pp: u32) -> Move {
    Move::new(name, "typeless", MoveCategory::Physical, power, pp)
}

pub fn create_test_battle(first: Combatant, second: Combatant) -> BattleState {
    BattleState::new(first, second)
}

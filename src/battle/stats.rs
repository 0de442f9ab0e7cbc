use crate::pokemon::Combatant;
use schema::{MoveCategory, StatType};

/// Attack stat used for a move of the given category.
pub fn effective_attack(attacker: &Combatant, category: MoveCategory) -> i32 {
    match category {
        MoveCategory::Physical => attacker.stat(StatType::Attack),
        MoveCategory::Special => attacker.stat(StatType::SpecialAttack),
    }
}

/// Defense stat used against a move of the given category.
pub fn effective_defense(defender: &Combatant, category: MoveCategory) -> i32 {
    match category {
        MoveCategory::Physical => defender.stat(StatType::Defense),
        MoveCategory::Special => defender.stat(StatType::SpecialDefense),
    }
}

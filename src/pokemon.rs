use crate::moves::Move;
use schema::{Element, StatType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Every combatant fights at this level.
pub const LEVEL: u32 = 100;
/// Individual value applied to every stat.
pub const IV: u32 = 31;
/// Effort value applied to every stat.
pub const EV: u32 = 252;
/// Maximum number of moves a combatant carries into battle.
pub const MAX_LOADOUT: usize = 4;

/// Scale a base stat to its battle value at the fixed IV/EV profile.
///
/// HP  = floor((2*Base + IV + floor(EV/4)) * Level / 100) + Level + 10
/// Other = floor((2*Base + IV + floor(EV/4)) * Level / 100) + 5
pub fn calculate_stat(stat: StatType, base: u16, level: u32) -> i32 {
    let base_calculation = 2 * u32::from(base) + IV + EV / 4;
    let scaled = base_calculation.saturating_mul(level) / 100;
    let bonus = match stat {
        StatType::Hp => level.saturating_add(10),
        _ => 5,
    };
    i32::try_from(scaled.saturating_add(bonus)).unwrap_or(i32::MAX)
}

/// A battle-ready entity.
///
/// `stats` is indexed by `StatType::index`. HP may go negative while a turn
/// resolves; anything at or below zero counts as fainted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: u32,
    pub name: String,
    pub stats: [i32; 6],
    pub elements: Vec<Arc<Element>>,
    pub moves: Vec<Move>,
}

impl Combatant {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        stats: [i32; 6],
        elements: Vec<Arc<Element>>,
        moves: Vec<Move>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
            elements,
            moves,
        }
    }

    pub fn stat(&self, stat: StatType) -> i32 {
        self.stats[stat.index()]
    }

    pub fn hp(&self) -> i32 {
        self.stat(StatType::Hp)
    }

    /// HP as reported to the outside world, clamped at zero.
    pub fn remaining_hp(&self) -> u32 {
        self.hp().max(0) as u32
    }

    pub fn is_fainted(&self) -> bool {
        self.hp() <= 0
    }

    /// Subtract damage from HP without clamping. Returns the new HP.
    pub fn take_damage(&mut self, damage: u32) -> i32 {
        let hp = &mut self.stats[StatType::Hp.index()];
        *hp = hp.saturating_sub(damage.min(i32::MAX as u32) as i32);
        *hp
    }

    pub fn has_element(&self, element: &str) -> bool {
        self.elements.iter().any(|e| e.name == element)
    }

    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(Move::has_pp)
    }

    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

/// Upper-cases the first letter of every word ("mr-mime" -> "Mr-Mime").
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    result
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.display_name())?;

        writeln!(f, "Stats:")?;
        for stat in StatType::ALL {
            writeln!(f, "  {}: {}", stat, self.stat(stat))?;
        }

        writeln!(f, "Types:")?;
        for element in &self.elements {
            writeln!(f, "  {}", element.name)?;
            // Empty relation sets are noise; skip them.
            for (relation, names) in element.populated_relations() {
                writeln!(f, "    {}: [{}]", relation, names.join(", "))?;
            }
        }

        writeln!(f, "Moves:")?;
        for m in &self.moves {
            writeln!(f, "  {}", m.name)?;
            writeln!(f, "    Accuracy: {}", m.accuracy)?;
            writeln!(f, "    Power: {}", m.power)?;
            writeln!(f, "    Pp: {}", m.pp)?;
            writeln!(f, "    Type: {}", m.element)?;
            writeln!(f, "    Category: {}", m.category)?;
        }
        Ok(())
    }
}

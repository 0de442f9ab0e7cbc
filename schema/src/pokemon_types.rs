use serde::{Deserialize, Serialize};
use std::fmt;

/// The six directional damage relations an element carries.
///
/// The `*From` relations describe incoming attacks: "double damage from fire"
/// means a fire attack against this element deals twice the damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageRelation {
    DoubleDamageFrom,
    DoubleDamageTo,
    HalfDamageFrom,
    HalfDamageTo,
    NoDamageFrom,
    NoDamageTo,
}

impl DamageRelation {
    /// Every relation, in display order.
    pub const ALL: [DamageRelation; 6] = [
        DamageRelation::DoubleDamageFrom,
        DamageRelation::DoubleDamageTo,
        DamageRelation::HalfDamageFrom,
        DamageRelation::HalfDamageTo,
        DamageRelation::NoDamageFrom,
        DamageRelation::NoDamageTo,
    ];

    /// Relations consulted when an element is on the receiving end of a move,
    /// in the order they are applied.
    pub const INCOMING: [DamageRelation; 3] = [
        DamageRelation::NoDamageFrom,
        DamageRelation::HalfDamageFrom,
        DamageRelation::DoubleDamageFrom,
    ];

    /// Damage multiplier for an incoming relation; `None` for the `*To` relations.
    pub fn incoming_multiplier(self) -> Option<f64> {
        match self {
            DamageRelation::NoDamageFrom => Some(0.0),
            DamageRelation::HalfDamageFrom => Some(0.5),
            DamageRelation::DoubleDamageFrom => Some(2.0),
            _ => None,
        }
    }
}

impl fmt::Display for DamageRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            DamageRelation::DoubleDamageFrom => "Double damage from",
            DamageRelation::DoubleDamageTo => "Double damage to",
            DamageRelation::HalfDamageFrom => "Half damage from",
            DamageRelation::HalfDamageTo => "Half damage to",
            DamageRelation::NoDamageFrom => "No damage from",
            DamageRelation::NoDamageTo => "No damage to",
        };
        write!(f, "{}", display_name)
    }
}

/// Element names grouped by relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    pub double_damage_from: Vec<String>,
    pub double_damage_to: Vec<String>,
    pub half_damage_from: Vec<String>,
    pub half_damage_to: Vec<String>,
    pub no_damage_from: Vec<String>,
    pub no_damage_to: Vec<String>,
}

impl DamageRelations {
    pub fn get(&self, relation: DamageRelation) -> &[String] {
        match relation {
            DamageRelation::DoubleDamageFrom => &self.double_damage_from,
            DamageRelation::DoubleDamageTo => &self.double_damage_to,
            DamageRelation::HalfDamageFrom => &self.half_damage_from,
            DamageRelation::HalfDamageTo => &self.half_damage_to,
            DamageRelation::NoDamageFrom => &self.no_damage_from,
            DamageRelation::NoDamageTo => &self.no_damage_to,
        }
    }

    pub fn get_mut(&mut self, relation: DamageRelation) -> &mut Vec<String> {
        match relation {
            DamageRelation::DoubleDamageFrom => &mut self.double_damage_from,
            DamageRelation::DoubleDamageTo => &mut self.double_damage_to,
            DamageRelation::HalfDamageFrom => &mut self.half_damage_from,
            DamageRelation::HalfDamageTo => &mut self.half_damage_to,
            DamageRelation::NoDamageFrom => &mut self.no_damage_from,
            DamageRelation::NoDamageTo => &mut self.no_damage_to,
        }
    }
}

/// An elemental type (fire, water, ...) and its damage relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub relations: DamageRelations,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: DamageRelations::default(),
        }
    }

    /// Adds element names to one relation. Handy for hand-built fixtures.
    pub fn with_relation<I, S>(mut self, relation: DamageRelation, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations
            .get_mut(relation)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Relations that list at least one element, in display order.
    pub fn populated_relations(&self) -> impl Iterator<Item = (DamageRelation, &[String])> {
        DamageRelation::ALL
            .into_iter()
            .map(move |relation| (relation, self.relations.get(relation)))
            .filter(|(_, names)| !names.is_empty())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_incoming_relations_have_multipliers() {
        assert_eq!(DamageRelation::NoDamageFrom.incoming_multiplier(), Some(0.0));
        assert_eq!(DamageRelation::HalfDamageFrom.incoming_multiplier(), Some(0.5));
        assert_eq!(DamageRelation::DoubleDamageFrom.incoming_multiplier(), Some(2.0));
        assert_eq!(DamageRelation::DoubleDamageTo.incoming_multiplier(), None);
    }

    #[test]
    fn test_populated_relations_skip_empty_sets() {
        let fire = Element::new("fire")
            .with_relation(DamageRelation::DoubleDamageFrom, ["water", "rock"])
            .with_relation(DamageRelation::HalfDamageTo, ["water"]);

        let populated: Vec<_> = fire.populated_relations().map(|(r, _)| r).collect();
        assert_eq!(
            populated,
            vec![DamageRelation::DoubleDamageFrom, DamageRelation::HalfDamageTo]
        );
    }
}

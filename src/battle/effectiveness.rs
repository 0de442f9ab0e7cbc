use schema::{DamageRelation, Element};
use std::sync::Arc;

/// One relation entry that matched an incoming move.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationMatch {
    pub element: String,
    pub relation: DamageRelation,
}

/// Combined multiplier plus the entries that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Effectiveness {
    pub multiplier: f64,
    pub matches: Vec<RelationMatch>,
}

/// Multiplier for a move of `move_element` against the defending elements.
///
/// Every matching entry applies, across all defending elements and all three
/// incoming relations (no/half/double damage from, in that order). A dual
/// element that is weak on one side and resistant on the other nets 1.0.
pub fn resolve_effectiveness(move_element: &str, defender_elements: &[Arc<Element>]) -> Effectiveness {
    let mut multiplier = 1.0;
    let mut matches = Vec::new();

    for element in defender_elements {
        for relation in DamageRelation::INCOMING {
            let Some(factor) = relation.incoming_multiplier() else {
                continue;
            };
            for name in element.relations.get(relation) {
                if name == move_element {
                    multiplier *= factor;
                    matches.push(RelationMatch {
                        element: element.name.clone(),
                        relation,
                    });
                }
            }
        }
    }

    Effectiveness { multiplier, matches }
}

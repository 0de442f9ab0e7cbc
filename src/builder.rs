//! Turns raw provider records into battle-ready combatants.

use crate::errors::{DataError, DataResult};
use crate::moves::Move;
use crate::pokemon::{calculate_stat, Combatant, LEVEL, MAX_LOADOUT};
use crate::provider::{DataProvider, RawMove, RawStat, RawType};
use crate::rng::BattleRng;
use schema::{DamageRelation, Element, MoveCategory, StatType};
use std::str::FromStr;
use std::sync::Arc;

/// Default cap on usable move candidates gathered per combatant.
pub const DEFAULT_MOVE_CANDIDATES: usize = 10;

/// Builds combatants from a data provider.
///
/// A build either yields a complete combatant or fails; a fetch or parse
/// failure anywhere (entity, any type, any move) aborts the whole build.
pub struct CombatantBuilder<'a, P: DataProvider + ?Sized> {
    provider: &'a P,
    move_candidates: usize,
}

impl<'a, P: DataProvider + ?Sized> CombatantBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            move_candidates: DEFAULT_MOVE_CANDIDATES,
        }
    }

    pub fn with_move_candidates(mut self, cap: usize) -> Self {
        self.move_candidates = cap;
        self
    }

    pub async fn build(&self, id: u32, rng: &mut BattleRng) -> DataResult<Combatant> {
        let raw = self.provider.fetch_entity(id).await?;
        tracing::debug!(id, name = %raw.name, "building combatant");

        let stats = scale_stats(&raw.stats)?;

        check_type_slots(&raw.types.iter().map(|t| t.type_.name.as_str()).collect::<Vec<_>>())?;
        let mut elements = Vec::with_capacity(raw.types.len());
        for slot in &raw.types {
            let raw_type = self.provider.fetch_type(&slot.type_.url).await?;
            elements.push(Arc::new(convert_element(raw_type)));
        }

        // The cap counts usable moves, not references fetched.
        let mut candidates = Vec::new();
        for slot in &raw.moves {
            if candidates.len() >= self.move_candidates {
                break;
            }
            let raw_move = self.provider.fetch_move(&slot.move_.url).await?;
            if let Some(m) = convert_move(raw_move)? {
                candidates.push(m);
            }
        }
        if candidates.is_empty() {
            tracing::warn!(id, name = %raw.name, "no usable moves; combatant will forfeit every turn");
        }

        let moves = select_loadout(candidates, rng);
        tracing::debug!(
            id,
            name = %raw.name,
            moves = ?moves.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            "combatant ready"
        );

        Ok(Combatant::new(raw.id, raw.name, stats, elements, moves))
    }
}

/// Scale every base stat at the fixed level. All six stats must be present.
pub fn scale_stats(raw_stats: &[RawStat]) -> DataResult<[i32; 6]> {
    let mut stats = [None; 6];
    for raw in raw_stats {
        let stat = StatType::from_str(&raw.stat.name)
            .map_err(|_| DataError::parse("pokemon", format!("unknown stat '{}'", raw.stat.name)))?;
        let base = u16::try_from(raw.base_stat).map_err(|_| {
            DataError::parse("pokemon", format!("base stat {} out of range for '{}'", raw.base_stat, stat))
        })?;
        stats[stat.index()] = Some(calculate_stat(stat, base, LEVEL));
    }

    let mut scaled = [0; 6];
    for stat in StatType::ALL {
        scaled[stat.index()] = stats[stat.index()]
            .ok_or_else(|| DataError::parse("pokemon", format!("missing stat '{}'", stat)))?;
    }
    Ok(scaled)
}

/// A combatant carries one or two distinct elements.
fn check_type_slots(names: &[&str]) -> DataResult<()> {
    if names.is_empty() || names.len() > 2 {
        return Err(DataError::parse(
            "pokemon",
            format!("expected 1 or 2 types, found {}", names.len()),
        ));
    }
    if names.len() == 2 && names[0] == names[1] {
        return Err(DataError::parse(
            "pokemon",
            format!("duplicate type '{}'", names[0]),
        ));
    }
    Ok(())
}

pub fn convert_element(raw: RawType) -> Element {
    let relations = raw.damage_relations;
    let sets = [
        (DamageRelation::DoubleDamageFrom, relations.double_damage_from),
        (DamageRelation::DoubleDamageTo, relations.double_damage_to),
        (DamageRelation::HalfDamageFrom, relations.half_damage_from),
        (DamageRelation::HalfDamageTo, relations.half_damage_to),
        (DamageRelation::NoDamageFrom, relations.no_damage_from),
        (DamageRelation::NoDamageTo, relations.no_damage_to),
    ];

    sets.into_iter()
        .fold(Element::new(raw.name), |element, (relation, names)| {
            element.with_relation(relation, names.into_iter().map(|n| n.name))
        })
}

/// Convert a raw move. Moves without accuracy or power are not usable in
/// battle and come back as `Ok(None)`.
pub fn convert_move(raw: RawMove) -> DataResult<Option<Move>> {
    let (Some(accuracy), Some(power)) = (raw.accuracy, raw.power) else {
        tracing::debug!(name = %raw.name, "skipping move without accuracy or power");
        return Ok(None);
    };
    if power == 0 {
        tracing::debug!(name = %raw.name, "skipping zero-power move");
        return Ok(None);
    }
    if power > u32::from(u16::MAX) {
        return Err(DataError::parse(
            "move",
            format!("power {} out of range for '{}'", power, raw.name),
        ));
    }
    if accuracy > 100 {
        return Err(DataError::parse(
            "move",
            format!("accuracy {} out of range for '{}'", accuracy, raw.name),
        ));
    }
    let category = MoveCategory::from_str(&raw.damage_class.name).map_err(|_| {
        DataError::parse(
            "move",
            format!("unknown damage class '{}' for '{}'", raw.damage_class.name, raw.name),
        )
    })?;

    Ok(Some(
        Move::new(raw.name, raw.type_.name, category, power, raw.pp).with_accuracy(accuracy as u8),
    ))
}

/// Keep every candidate when there are few enough; otherwise a uniformly
/// random subset of `MAX_LOADOUT`.
pub fn select_loadout(mut candidates: Vec<Move>, rng: &mut BattleRng) -> Vec<Move> {
    if candidates.len() <= MAX_LOADOUT {
        return candidates;
    }
    rng.shuffle(&mut candidates);
    candidates.truncate(MAX_LOADOUT);
    candidates
}

use crate::battle::effectiveness::resolve_effectiveness;
use crate::battle::state::{BattleEvent, EventBus};
use crate::battle::stats::{effective_attack, effective_defense};
use crate::moves::Move;
use crate::pokemon::{Combatant, LEVEL};
use crate::rng::BattleRng;

/// Same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.5;
pub const CRITICAL_HIT_CHANCE: f64 = 1.0 / 24.0;
pub const CRITICAL_HIT_MULTIPLIER: f64 = 2.0;
/// Damage variance is drawn from `[VARIANCE_MIN, VARIANCE_MIN + VARIANCE_SPAN)`.
pub const VARIANCE_MIN: f64 = 0.85;
pub const VARIANCE_SPAN: f64 = 0.15;

/// Unmodified damage at the fixed level.
///
/// `floor(floor((floor(2*L/5) + 2) * power * attack / defense) / 50) + 2`,
/// evaluated left to right in integer arithmetic. Defense is floored at 1 and
/// the products saturate instead of overflowing.
pub fn base_damage(power: u32, attack: i32, defense: i32) -> i64 {
    let level = i64::from(LEVEL);
    let attack = i64::from(attack.max(0));
    let defense = i64::from(defense.max(1));
    (2 * level / 5 + 2)
        .saturating_mul(i64::from(power))
        .saturating_mul(attack)
        / defense
        / 50
        + 2
}

/// Combined modifier for one use of `move_used`: STAB, effectiveness,
/// critical hit and random variance, applied in that order.
///
/// Effectiveness matches and critical hits are narrated on `bus`.
pub fn compute_modifier(
    attacker: &Combatant,
    move_used: &Move,
    defender: &Combatant,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> f64 {
    let mut modifier = 1.0;

    if attacker.has_element(&move_used.element) {
        modifier *= STAB_MULTIPLIER;
    }

    let effectiveness = resolve_effectiveness(&move_used.element, &defender.elements);
    for matched in &effectiveness.matches {
        bus.push(BattleEvent::EffectivenessApplied {
            defender: defender.display_name(),
            element: matched.element.clone(),
            relation: matched.relation,
        });
    }
    modifier *= effectiveness.multiplier;

    if rng.next_unit("critical hit") < CRITICAL_HIT_CHANCE {
        modifier *= CRITICAL_HIT_MULTIPLIER;
        bus.push(BattleEvent::CriticalHit);
    }

    modifier *= VARIANCE_MIN + rng.next_unit("damage variance") * VARIANCE_SPAN;

    modifier
}

/// Final damage for one use of `move_used`, never negative.
pub fn compute_damage(
    attacker: &Combatant,
    move_used: &Move,
    defender: &Combatant,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> u32 {
    let attack = effective_attack(attacker, move_used.category);
    let defense = effective_defense(defender, move_used.category);
    let base = base_damage(move_used.power, attack, defense);
    let modifier = compute_modifier(attacker, move_used, defender, rng, bus);

    let damage = (base as f64 * modifier).floor();
    tracing::debug!(
        attacker = %attacker.name,
        move_used = %move_used.name,
        defender = %defender.name,
        base,
        modifier,
        damage,
        "damage computed"
    );
    damage.clamp(0.0, u32::MAX as f64) as u32
}

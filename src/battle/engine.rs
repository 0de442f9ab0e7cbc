use crate::battle::calculators::compute_damage;
use crate::battle::state::{BattleEvent, BattleState, EventBus, GameState};
use crate::pokemon::Combatant;
use crate::rng::BattleRng;

/// Random picks allowed before a combatant gives up its turn.
pub const MAX_SELECTION_ATTEMPTS: u32 = 10;

/// Result of picking a move for the active combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSelection {
    Selected(usize),
    /// No move with uses left was found within the attempt budget
    Exhausted { attempts: u32 },
}

/// What happened on a single combatant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Attacked { move_index: usize, damage: u32 },
    Forfeit { attempts: u32 },
    /// A fainted combatant does not act
    AttackerFainted,
}

/// Pick a move uniformly at random, retrying when it has no uses left.
///
/// An empty loadout forfeits immediately without drawing.
pub fn select_move(attacker: &Combatant, rng: &mut BattleRng) -> MoveSelection {
    if attacker.moves.is_empty() {
        return MoveSelection::Exhausted { attempts: 0 };
    }

    for _ in 0..MAX_SELECTION_ATTEMPTS {
        let index = rng.pick_index(attacker.moves.len(), "move selection");
        if attacker.moves[index].has_pp() {
            return MoveSelection::Selected(index);
        }
    }
    MoveSelection::Exhausted {
        attempts: MAX_SELECTION_ATTEMPTS,
    }
}

/// One combatant acts against the other.
///
/// Spends one use of the selected move and subtracts the damage from the
/// defender's HP, which may go below zero.
pub fn run_turn(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> TurnOutcome {
    if attacker.is_fainted() {
        return TurnOutcome::AttackerFainted;
    }

    let move_index = match select_move(attacker, rng) {
        MoveSelection::Selected(index) => index,
        MoveSelection::Exhausted { attempts } => {
            tracing::debug!(combatant = %attacker.name, attempts, "no usable move, turn forfeited");
            bus.push(BattleEvent::NoMovesLeft {
                combatant: attacker.display_name(),
                attempts,
            });
            return TurnOutcome::Forfeit { attempts };
        }
    };

    attacker.moves[move_index].use_pp();
    let move_used = &attacker.moves[move_index];
    bus.push(BattleEvent::MoveUsed {
        attacker: attacker.display_name(),
        move_used: move_used.name.clone(),
    });

    let damage = compute_damage(attacker, move_used, defender, rng, bus);
    defender.take_damage(damage);
    bus.push(BattleEvent::DamageDealt {
        target: defender.display_name(),
        damage,
        remaining_hp: defender.remaining_hp(),
    });

    if defender.is_fainted() {
        bus.push(BattleEvent::Fainted {
            combatant: defender.display_name(),
        });
    }

    TurnOutcome::Attacked { move_index, damage }
}

/// Resolve the next turn of an ongoing battle.
///
/// The combatants alternate strictly, first combatant on odd turns; speed
/// plays no part in the order.
pub fn resolve_turn(battle_state: &mut BattleState, rng: &mut BattleRng) -> EventBus {
    let mut bus = EventBus::new();
    if battle_state.game_state.is_terminal() {
        return bus;
    }

    if !battle_state.combatants.iter().any(Combatant::has_usable_move) {
        tracing::info!(turn = battle_state.turn_number, "no moves left on either side");
        battle_state.game_state = GameState::Stalled;
        bus.push(BattleEvent::BattleEnded { winner: None });
        return bus;
    }

    let attacker_index = battle_state.active_index();
    let [first, second] = &mut battle_state.combatants;
    let (attacker, defender) = if attacker_index == 0 {
        (first, second)
    } else {
        (second, first)
    };

    run_turn(attacker, defender, rng, &mut bus);
    battle_state.turn_number += 1;
    check_win_conditions(battle_state, attacker_index, &mut bus);

    bus
}

/// Run turns until the battle reaches a terminal state.
pub fn run_battle(battle_state: &mut BattleState, rng: &mut BattleRng) -> EventBus {
    let mut bus = EventBus::new();
    bus.push(BattleEvent::BattleStarted {
        combatants: [
            battle_state.combatants[0].display_name(),
            battle_state.combatants[1].display_name(),
        ],
    });
    tracing::info!(
        first = %battle_state.combatants[0].name,
        second = %battle_state.combatants[1].name,
        "battle started"
    );

    while !battle_state.game_state.is_terminal() {
        bus.extend(resolve_turn(battle_state, rng));
    }

    tracing::info!(
        outcome = ?battle_state.game_state,
        turns = battle_state.turn_number - 1,
        "battle finished"
    );
    bus
}

/// The side at or below zero HP loses. Should both be down at once, the
/// side that was just attacked loses.
fn check_win_conditions(battle_state: &mut BattleState, attacker_index: usize, bus: &mut EventBus) {
    let first_down = battle_state.combatants[0].is_fainted();
    let second_down = battle_state.combatants[1].is_fainted();

    let winner = match (first_down, second_down) {
        (false, false) => return,
        (true, true) => attacker_index,
        (true, false) => 1,
        (false, true) => 0,
    };

    battle_state.game_state = if winner == 0 {
        GameState::Combatant1Win
    } else {
        GameState::Combatant2Win
    };
    bus.push(BattleEvent::BattleEnded {
        winner: Some(battle_state.combatants[winner].display_name()),
    });
}

use crate::pokemon::Combatant;
use schema::DamageRelation;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Copy)]
pub enum GameState {
    Ongoing,
    Combatant1Win,
    Combatant2Win,
    /// Neither side has a move with uses left; the battle cannot progress
    Stalled,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self != GameState::Ongoing
    }

    /// Index of the winning combatant, if there is one.
    pub fn winner(self) -> Option<usize> {
        match self {
            GameState::Combatant1Win => Some(0),
            GameState::Combatant2Win => Some(1),
            GameState::Ongoing | GameState::Stalled => None,
        }
    }
}

/// Narration emitted while a battle resolves.
///
/// Events carry display names so they can be rendered without the state that
/// produced them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        combatants: [String; 2],
    },
    MoveUsed {
        attacker: String,
        move_used: String,
    },
    EffectivenessApplied {
        defender: String,
        element: String,
        relation: DamageRelation,
    },
    CriticalHit,
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    NoMovesLeft {
        combatant: String,
        attempts: u32,
    },
    Fainted {
        combatant: String,
    },
    BattleEnded {
        winner: Option<String>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { combatants } => {
                Some(format!("{} VS {}", combatants[0], combatants[1]))
            }
            BattleEvent::MoveUsed { attacker, move_used } => {
                Some(format!("{} uses {}", attacker, move_used))
            }
            BattleEvent::EffectivenessApplied {
                defender, relation, ..
            } => match relation {
                DamageRelation::NoDamageFrom => Some(format!("It has no effect on {}", defender)),
                DamageRelation::HalfDamageFrom => {
                    Some(format!("It's not very effective on {}", defender))
                }
                DamageRelation::DoubleDamageFrom => {
                    Some(format!("It's super effective on {}", defender))
                }
                _ => None,
            },
            BattleEvent::CriticalHit => Some("A critical hit!".to_string()),
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} takes {} damage", target, damage))
            }
            BattleEvent::NoMovesLeft { combatant, .. } => {
                Some(format!("{} has no moves left", combatant))
            }
            BattleEvent::Fainted { combatant } => Some(format!("{} fainted!", combatant)),
            BattleEvent::BattleEnded { winner } => match winner {
                Some(name) => Some(format!("{} wins!", name)),
                None => Some("Neither side can fight on. No winner.".to_string()),
            },
        }
    }
}

/// Event bus for collecting battle events.
///
/// ```rust,ignore
/// event_bus.print_formatted();          // Human-readable narration
/// println!("{}", event_bus);            // Debug format of every event
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, other: EventBus) {
        self.events.extend(other.events);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Formatted text of every non-silent event, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Print every non-silent event as narration.
    pub fn print_formatted(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Two combatants and where the fight stands.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub combatants: [Combatant; 2],
    /// 1-based; odd turns belong to the first combatant
    pub turn_number: u32,
    pub game_state: GameState,
}

impl BattleState {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            turn_number: 1,
            game_state: GameState::Ongoing,
        }
    }

    /// Index of the combatant acting on the current turn.
    pub fn active_index(&self) -> usize {
        ((self.turn_number + 1) % 2) as usize
    }
}

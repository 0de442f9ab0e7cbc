//! Round setup and betting for the interactive duel.

use crate::battle::state::{BattleState, GameState};
use crate::builder::CombatantBuilder;
use crate::config::DuelConfig;
use crate::errors::DataResult;
use crate::provider::DataProvider;
use crate::rng::BattleRng;
use std::io::{self, BufRead, Write};

/// The player's pick before a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetChoice {
    Combatant1,
    Combatant2,
    Abort,
}

impl BetChoice {
    /// `1` and `2` back a combatant, `0` ends the session.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(BetChoice::Combatant1),
            "2" => Some(BetChoice::Combatant2),
            "0" => Some(BetChoice::Abort),
            _ => None,
        }
    }

    fn backs(self, index: usize) -> bool {
        matches!(
            (self, index),
            (BetChoice::Combatant1, 0) | (BetChoice::Combatant2, 1)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetResult {
    Won,
    Lost,
    /// The battle ended without a winner
    NoContest,
}

/// Settle a bet against a finished battle. `None` while the battle is
/// still running or when the player aborted.
pub fn settle_bet(choice: BetChoice, game_state: GameState) -> Option<BetResult> {
    if choice == BetChoice::Abort || !game_state.is_terminal() {
        return None;
    }
    Some(match game_state.winner() {
        Some(index) if choice.backs(index) => BetResult::Won,
        Some(_) => BetResult::Lost,
        None => BetResult::NoContest,
    })
}

/// Prompt until a valid choice is entered. End of input counts as abort.
pub fn read_bet<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    names: [&str; 2],
) -> io::Result<BetChoice> {
    writeln!(output, "Place your bets!")?;
    loop {
        writeln!(output, "1 for {}", names[0])?;
        writeln!(output, "2 for {}", names[1])?;
        writeln!(output, "0 to quit")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(BetChoice::Abort);
        }
        match BetChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Invalid choice")?,
        }
    }
}

/// Two identifiers drawn uniformly from `1..=species_count`.
pub fn pick_identifiers(config: &DuelConfig, rng: &mut BattleRng) -> [u32; 2] {
    let count = config.species_count.max(1) as usize;
    [
        rng.pick_index(count, "first combatant") as u32 + 1,
        rng.pick_index(count, "second combatant") as u32 + 1,
    ]
}

/// Build both combatants concurrently and start a battle.
///
/// The two builds share nothing but the provider; each gets its own forked
/// RNG. The first failure aborts the whole setup.
pub async fn prepare_duel<P: DataProvider + ?Sized>(
    provider: &P,
    config: &DuelConfig,
    rng: &mut BattleRng,
) -> DataResult<BattleState> {
    let [first_id, second_id] = pick_identifiers(config, rng);
    tracing::debug!(first_id, second_id, "preparing duel");

    let builder = CombatantBuilder::new(provider).with_move_candidates(config.move_candidates);
    let mut first_rng = rng.fork();
    let mut second_rng = rng.fork();

    let (first, second) = tokio::try_join!(
        builder.build(first_id, &mut first_rng),
        builder.build(second_id, &mut second_rng),
    )?;

    Ok(BattleState::new(first, second))
}

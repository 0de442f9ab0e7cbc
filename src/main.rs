//! Interactive duel: two random combatants, one bet, one battle per round.

use anyhow::{bail, Result};
use poke_duel::{
    prepare_duel, read_bet, run_battle, settle_bet, BattleRng, BetChoice, BetResult, DuelConfig,
    PokeApiClient, SessionError,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DuelConfig::from_env();
    let provider = PokeApiClient::from_config(&config);
    let mut rng = match config.seed {
        Some(seed) => BattleRng::new_seeded(seed),
        None => BattleRng::new_random(),
    };

    let mut consecutive_failures = 0;
    loop {
        let mut battle_state = match prepare_duel(&provider, &config, &mut rng).await {
            Ok(state) => {
                consecutive_failures = 0;
                state
            }
            Err(err) => {
                consecutive_failures += 1;
                let err = SessionError::from(err);
                tracing::error!(%err, attempt = consecutive_failures, "round aborted");
                if consecutive_failures >= config.max_setup_failures {
                    bail!("giving up after {} failed setups: {}", consecutive_failures, err);
                }
                continue;
            }
        };

        for combatant in &battle_state.combatants {
            println!("{}", combatant);
            println!("--------------------");
        }
        println!();

        let names = [
            battle_state.combatants[0].display_name(),
            battle_state.combatants[1].display_name(),
        ];
        let choice = {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            read_bet(&mut input, &mut output, [names[0].as_str(), names[1].as_str()])
                .map_err(SessionError::from)?
        };
        if choice == BetChoice::Abort {
            return Ok(());
        }

        let bus = run_battle(&mut battle_state, &mut rng);
        bus.print_formatted();
        println!("--------------------");

        match settle_bet(choice, battle_state.game_state) {
            Some(BetResult::Won) => println!("You win!"),
            Some(BetResult::Lost) => println!("You lose!"),
            Some(BetResult::NoContest) => println!("No contest. Your bet is returned."),
            None => {}
        }
        println!();
    }
}

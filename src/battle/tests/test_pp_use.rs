#[cfg(test)]
mod tests {
    use crate::battle::engine::{run_turn, TurnOutcome};
    use crate::battle::state::EventBus;
    use crate::battle::tests::common::{plain_move, TestCombatantBuilder};
    use crate::rng::BattleRng;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_pp_decrements_on_use() {
        let mut attacker = TestCombatantBuilder::new("pikachu")
            .with_moves(vec![plain_move("tackle", 40, 35)])
            .build();
        let mut defender = TestCombatantBuilder::new("charmander").with_hp(1000).build();
        let mut rng = BattleRng::new_for_test(vec![0.0, 0.5, 0.0]);
        let mut bus = EventBus::new();

        let _ = run_turn(&mut attacker, &mut defender, &mut rng, &mut bus);

        assert_eq!(attacker.moves[0].pp, 34, "PP should decrement by 1 after a move is used.");
    }

    #[test]
    fn test_last_use_then_forfeit() {
        let mut attacker = TestCombatantBuilder::new("pikachu")
            .with_moves(vec![plain_move("tackle", 40, 1)])
            .build();
        let mut defender = TestCombatantBuilder::new("charmander").with_hp(1000).build();
        let mut bus = EventBus::new();

        // Turn 1: uses the last PP.
        let mut rng = BattleRng::new_for_test(vec![0.0, 0.5, 0.0]);
        let first = run_turn(&mut attacker, &mut defender, &mut rng, &mut bus);
        assert!(matches!(first, TurnOutcome::Attacked { .. }));
        assert_eq!(attacker.moves[0].pp, 0);

        // Turn 2: nothing left, every pick lands on the empty move.
        let mut rng = BattleRng::new_for_test(vec![0.0; 10]);
        let hp_before = defender.hp();
        let second = run_turn(&mut attacker, &mut defender, &mut rng, &mut bus);
        assert_eq!(second, TurnOutcome::Forfeit { attempts: 10 });
        assert_eq!(attacker.moves[0].pp, 0);
        assert_eq!(defender.hp(), hp_before);
    }

    proptest! {
        #[test]
        fn prop_pp_never_negative_across_turns(seed in any::<u64>(), pps in prop::collection::vec(0u32..4, 1..5), turns in 1usize..40) {
            let moves = pps
                .iter()
                .enumerate()
                .map(|(i, &pp)| plain_move(&format!("m{}", i), 40, pp))
                .collect();
            let mut attacker = TestCombatantBuilder::new("a").with_moves(moves).build();
            let mut defender = TestCombatantBuilder::new("b").with_hp(i32::MAX).build();
            let mut rng = BattleRng::new_seeded(seed);
            let mut bus = EventBus::new();
            let total: u32 = pps.iter().sum();

            let mut attacks = 0u32;
            for _ in 0..turns {
                if let TurnOutcome::Attacked { .. } = run_turn(&mut attacker, &mut defender, &mut rng, &mut bus) {
                    attacks += 1;
                }
            }

            let remaining: u32 = attacker.moves.iter().map(|m| m.pp).sum();
            prop_assert!(attacks <= total);
            prop_assert_eq!(remaining, total - attacks);
        }
    }
}

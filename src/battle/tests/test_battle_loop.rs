#[cfg(test)]
mod tests {
    use crate::battle::engine::{resolve_turn, run_battle};
    use crate::battle::state::{BattleEvent, GameState};
    use crate::battle::tests::common::{create_test_battle, plain_move, TestCombatantBuilder};
    use crate::moves::Move;
    use crate::rng::BattleRng;
    use pretty_assertions::assert_eq;
    use schema::{DamageRelation, Element, MoveCategory, StatType};

    /// Script for one attack from a single-move loadout: pick the move, no
    /// crit, variance near its top. With power 11 and equal attack/defense the
    /// base damage is 11 and the final damage is exactly 10.
    const TEN_DAMAGE_TURN: [f64; 3] = [0.0, 0.5, 0.99];

    #[test]
    fn test_battle_ends_after_six_attacks() {
        // Arrange: the first combatant hits for 10 with unlimited uses; the
        // second has no moves and forfeits every turn.
        let attacker = TestCombatantBuilder::new("onix")
            .with_hp(50)
            .with_moves(vec![plain_move("rock-throw", 11, u32::MAX)])
            .build();
        let defender = TestCombatantBuilder::new("geodude").with_hp(60).build();
        let mut battle_state = create_test_battle(attacker, defender);
        let mut rng = BattleRng::new_for_test(TEN_DAMAGE_TURN.repeat(6));

        // Act
        let bus = run_battle(&mut battle_state, &mut rng);
        bus.print_debug();

        // Assert
        assert_eq!(battle_state.game_state, GameState::Combatant1Win);
        let attacks = bus
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::MoveUsed { .. }))
            .count();
        assert_eq!(attacks, 6);
        let forfeits = bus
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::NoMovesLeft { .. }))
            .count();
        assert_eq!(forfeits, 5);
        assert!(bus
            .events()
            .iter()
            .filter_map(|e| match e {
                BattleEvent::DamageDealt { damage, .. } => Some(*damage),
                _ => None,
            })
            .all(|damage| damage == 10));
        assert_eq!(battle_state.turn_number, 12, "11 turns were played.");
        assert_eq!(battle_state.combatants[0].hp(), 50);
        assert_eq!(battle_state.combatants[1].hp(), 0);
        assert_eq!(
            bus.events().last(),
            Some(&BattleEvent::BattleEnded {
                winner: Some("Onix".to_string())
            })
        );
    }

    #[test]
    fn test_turns_alternate_regardless_of_speed() {
        let slow = TestCombatantBuilder::new("slowpoke")
            .with_stat(StatType::Speed, 1)
            .with_moves(vec![plain_move("tackle", 10, 10)])
            .build();
        let fast = TestCombatantBuilder::new("jolteon")
            .with_stat(StatType::Speed, 999)
            .with_moves(vec![plain_move("tackle", 10, 10)])
            .build();
        let mut battle_state = create_test_battle(slow, fast);
        let mut rng = BattleRng::new_seeded(5);

        let mut order = Vec::new();
        for _ in 0..4 {
            for event in resolve_turn(&mut battle_state, &mut rng).events() {
                if let BattleEvent::MoveUsed { attacker, .. } = event {
                    order.push(attacker.clone());
                }
            }
        }

        assert_eq!(order, vec!["Slowpoke", "Jolteon", "Slowpoke", "Jolteon"]);
    }

    #[test]
    fn test_no_moves_on_either_side_stalls() {
        let a = TestCombatantBuilder::new("a").build();
        let b = TestCombatantBuilder::new("b").build();
        let mut battle_state = create_test_battle(a, b);
        let mut rng = BattleRng::new_for_test(vec![]);

        let bus = run_battle(&mut battle_state, &mut rng);

        assert_eq!(battle_state.game_state, GameState::Stalled);
        assert_eq!(bus.events().last(), Some(&BattleEvent::BattleEnded { winner: None }));
    }

    #[test]
    fn test_both_down_means_defender_loses() {
        // Both sides are already at zero; the first combatant is the attacker
        // on turn one, so the second combatant is the one that loses.
        let a = TestCombatantBuilder::new("a")
            .with_hp(0)
            .with_moves(vec![plain_move("tackle", 10, 10)])
            .build();
        let b = TestCombatantBuilder::new("b").with_hp(-5).build();
        let mut battle_state = create_test_battle(a, b);
        let mut rng = BattleRng::new_for_test(vec![]);

        let _ = resolve_turn(&mut battle_state, &mut rng);

        assert_eq!(battle_state.game_state, GameState::Combatant1Win);
    }

    #[test]
    fn test_resolving_a_finished_battle_is_a_no_op() {
        let a = TestCombatantBuilder::new("a").with_moves(vec![plain_move("tackle", 10, 10)]).build();
        let b = TestCombatantBuilder::new("b").build();
        let mut battle_state = create_test_battle(a, b);
        battle_state.game_state = GameState::Combatant2Win;
        let mut rng = BattleRng::new_for_test(vec![]);

        let bus = resolve_turn(&mut battle_state, &mut rng);

        assert!(bus.is_empty());
        assert_eq!(battle_state.turn_number, 1);
    }

    #[test]
    fn test_seeded_battle_reaches_a_winner() {
        let a = TestCombatantBuilder::new("a")
            .with_hp(300)
            .with_moves(vec![plain_move("tackle", 40, 35), plain_move("slam", 80, 20)])
            .build();
        let b = TestCombatantBuilder::new("b")
            .with_hp(300)
            .with_moves(vec![plain_move("scratch", 40, 35)])
            .build();
        let mut battle_state = create_test_battle(a, b);
        let mut rng = BattleRng::new_seeded(2024);

        let _ = run_battle(&mut battle_state, &mut rng);

        let winner = battle_state.game_state.winner().expect("battle should have a winner");
        assert!(battle_state.combatants[1 - winner].is_fainted());
        assert!(!battle_state.combatants[winner].is_fainted());
    }

    #[test]
    fn test_effectiveness_is_narrated_during_battle() {
        let squirtle = TestCombatantBuilder::new("squirtle")
            .with_elements(vec![Element::new("water")])
            .with_moves(vec![Move::new("water-gun", "water", MoveCategory::Special, 40, 25)])
            .build();
        let charmander = TestCombatantBuilder::new("charmander")
            .with_elements(vec![
                Element::new("fire").with_relation(DamageRelation::DoubleDamageFrom, ["water"])
            ])
            .build();
        let mut battle_state = create_test_battle(squirtle, charmander);
        // Pick the move, no crit, minimum variance: floor(35 * 1.5 * 2 * 0.85) = 89.
        let mut rng = BattleRng::new_for_test(vec![0.0, 0.5, 0.0]);

        let bus = resolve_turn(&mut battle_state, &mut rng);

        assert_eq!(
            bus.lines(),
            vec![
                "Squirtle uses water-gun",
                "It's super effective on Charmander",
                "Charmander takes 89 damage",
            ]
        );
        assert_eq!(battle_state.combatants[1].hp(), 11);
    }
}

//! Resource invariants over arbitrary play sequences

use door_fitter::catalog::Catalog;
use door_fitter::core::{ActionKind, GameConfig};
use door_fitter::session::{GamePhase, GameSession};
use proptest::prelude::*;

proptest! {
    /// Counters stay inside their bounds after every operation, and every
    /// action either pays its full cost or is rejected with no deltas.
    #[test]
    fn counters_stay_in_range(
        seed in any::<u64>(),
        moves in prop::collection::vec(any::<bool>(), 0..60),
    ) {
        let catalog = Catalog::builtin().unwrap();
        let config = GameConfig::default();
        let mut session = GameSession::with_seed(config.clone(), &catalog, seed).unwrap();

        for hammer in moves {
            match session.phase() {
                GamePhase::Playing => {
                    let hours_before = session.hours_remaining();
                    let debt_before = session.tech_debt();
                    let score_before = session.score();

                    let (action, cost) = if hammer {
                        (ActionKind::Hammer, config.hammer_cost)
                    } else {
                        (ActionKind::Measure, config.measure_cost)
                    };
                    let snap = session.apply_action(action);

                    if snap.phase == GamePhase::DeadlineMissed {
                        prop_assert_eq!(snap.hours_remaining, hours_before);
                        prop_assert_eq!(snap.tech_debt, debt_before);
                        prop_assert_eq!(snap.score, score_before);
                    } else {
                        prop_assert_eq!(snap.hours_remaining, hours_before - cost);
                    }
                }
                GamePhase::Feedback => {
                    let index_before = session.round_index();
                    let snap = session.advance_round();
                    if snap.phase == GamePhase::Playing {
                        prop_assert_eq!(snap.round_index, index_before + 1);
                    } else {
                        prop_assert_eq!(snap.phase, GamePhase::Victory);
                    }
                }
                _ => break,
            }

            prop_assert!(session.tech_debt() <= config.debt_ceiling);
            prop_assert!(session.hours_remaining() <= config.time_budget);
        }
    }

    /// Hammering through the whole sprint always ends in a terminal phase,
    /// and that phase absorbs every further call.
    #[test]
    fn terminal_phases_are_sticky(seed in any::<u64>()) {
        let catalog = Catalog::builtin().unwrap();
        let mut session =
            GameSession::with_seed(GameConfig::default(), &catalog, seed).unwrap();

        loop {
            match session.phase() {
                GamePhase::Playing => {
                    session.apply_action(ActionKind::Hammer);
                }
                GamePhase::Feedback => {
                    session.advance_round();
                }
                _ => break,
            }
        }

        let terminal = session.snapshot();
        prop_assert!(terminal.phase.is_terminal());

        let after_action = session.apply_action(ActionKind::Measure);
        prop_assert_eq!(&after_action, &terminal);
        let after_advance = session.advance_round();
        prop_assert_eq!(&after_advance, &terminal);
    }
}

// Property-based tests: invariants that must hold for any seed and any
// settings input, however malformed.

mod common;

use std::collections::HashSet;

use mockdraft_core::draft::roster::{earliest_round, hard_cap};
use mockdraft_core::rng::DraftRng;
use mockdraft_core::valuation::grade::score_from_percentiles;
use mockdraft_core::{
    run_draft, run_mock_draft, Position, SeedInput, Settings, SettingsInput,
    Percentiles, Strategy as DraftStrategy,
};
use proptest::prelude::*;

fn legal_settings() -> impl Strategy<Value = Settings> {
    (
        prop::sample::select(vec![10u32, 12, 14]),
        prop::sample::select(vec![12u32, 15, 18]),
        any::<u32>(),
        prop::sample::select(DraftStrategy::ALL.to_vec()),
        any::<u32>(),
    )
        .prop_map(|(teams, rounds, slot_seed, strategy, seed)| Settings {
            teams,
            rounds,
            draft_slot: slot_seed % teams + 1,
            strategy,
            seed,
            ..Settings::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: rng output is always in [0, 1)
    #[test]
    fn prop_rng_in_unit_interval(seed in any::<u32>()) {
        let mut rng = DraftRng::new(seed);
        for _ in 0..64 {
            let v = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    /// Property: normalization never produces out-of-range settings
    #[test]
    fn prop_normalize_always_in_range(
        teams in prop::num::f64::ANY,
        rounds in prop::num::f64::ANY,
        slot in prop::num::f64::ANY,
        scoring in ".{0,12}",
        seed in prop::num::f64::ANY,
    ) {
        let s = Settings::normalize(&SettingsInput {
            teams: Some(teams),
            rounds: Some(rounds),
            draft_slot: Some(slot),
            scoring: Some(scoring),
            strategy: None,
            seed: Some(SeedInput::Number(seed)),
        });
        prop_assert!([10, 12, 14].contains(&s.teams));
        prop_assert!([12, 15, 18].contains(&s.rounds));
        prop_assert!(s.draft_slot >= 1 && s.draft_slot <= s.teams);
    }

    /// Property: every draft is legal, unique, and fully sequenced
    #[test]
    fn prop_draft_invariants(settings in legal_settings()) {
        let pool = common::synthetic_pool();
        let outcome = run_draft(&settings, &pool);

        prop_assert_eq!(outcome.picks.len() as u32, settings.total_picks());
        let mut seen = HashSet::new();
        for (i, pick) in outcome.picks.iter().enumerate() {
            prop_assert_eq!(pick.overall_pick, i as u32 + 1);
            prop_assert!(pick.round >= earliest_round(pick.position));
            prop_assert!(seen.insert(pick.player_name.clone()));
        }
        for team in &outcome.teams {
            prop_assert_eq!(team.counts.total(), settings.rounds);
            for pos in Position::ALL {
                prop_assert!(team.counts.get(pos) <= hard_cap(pos, &outcome.targets));
            }
        }
    }

    /// Property: the grade is always in range and reproducible
    #[test]
    fn prop_grade_bounded_and_deterministic(settings in legal_settings()) {
        let pool = common::synthetic_pool();
        let input = SettingsInput::from(&settings);
        let a = run_mock_draft(&input, &pool).unwrap();
        let b = run_mock_draft(&input, &pool).unwrap();
        prop_assert!(a.grade.score >= 58 && a.grade.score <= 99);
        for p in [a.percentiles.starter, a.percentiles.value, a.percentiles.balance, a.percentiles.upside] {
            prop_assert!((0.0..=1.0).contains(&p));
        }
        prop_assert_eq!(a, b);
    }

    /// Property: raising any percentile never lowers the score
    #[test]
    fn prop_score_monotone_in_percentiles(
        base in prop::array::uniform4(0.0f64..=1.0),
        which in 0usize..4,
        bump in 0.0f64..=1.0,
    ) {
        let lower = Percentiles { starter: base[0], value: base[1], balance: base[2], upside: base[3] };
        let mut raised = base;
        raised[which] = (raised[which] + bump).min(1.0);
        let higher = Percentiles { starter: raised[0], value: raised[1], balance: raised[2], upside: raised[3] };
        prop_assert!(score_from_percentiles(&higher) >= score_from_percentiles(&lower));
    }
}

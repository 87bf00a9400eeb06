//! Integration tests for streak-core
//!
//! These tests exercise parsing, scoring, ranking and streak storage
//! together, the way the CLI drives them.

use chrono::NaiveDate;
use streak_core::{
    ActivityWindow, DailyGameScore, FriendResult, GameCatalog, GameStreak, Leaderboard,
    ScoringModel, StreakCounts, StreakStatus, StreakStore, StreakValidationError, metric_label,
    parse_share, points,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Properties the scoring normalizer must hold
mod scoring_tests {
    use super::*;

    #[test]
    fn test_failed_results_score_zero_for_every_model() {
        let models = [
            None,
            Some(ScoringModel::LowerAttempts),
            Some(ScoringModel::LowerGuesses),
            Some(ScoringModel::LowerHints),
            Some(ScoringModel::HigherIsBetter),
            Some(ScoringModel::LowerTimeSeconds),
        ];
        for model in models {
            for raw in [None, Some(1), Some(7), Some(-3)] {
                assert_eq!(points(&DailyGameScore::new(false, raw, 7), model), 0);
            }
        }
    }

    #[test]
    fn test_attempt_scoring_against_seven() {
        for model in [
            ScoringModel::LowerAttempts,
            ScoringModel::LowerGuesses,
            ScoringModel::LowerHints,
        ] {
            assert_eq!(points(&DailyGameScore::success(1, 7), Some(model)), 7);
            assert_eq!(points(&DailyGameScore::success(7, 7), Some(model)), 1);
            assert_eq!(points(&DailyGameScore::success(8, 7), Some(model)), 0);
        }
    }

    #[test]
    fn test_higher_is_better_and_time() {
        let higher = Some(ScoringModel::HigherIsBetter);
        assert_eq!(points(&DailyGameScore::success(10, 1), higher), 7);
        assert_eq!(points(&DailyGameScore::success(0, 1), higher), 0);
        assert_eq!(points(&DailyGameScore::success(3, 1), higher), 3);

        let time = Some(ScoringModel::LowerTimeSeconds);
        assert_eq!(points(&DailyGameScore::success(15, 1), time), 7);
        assert_eq!(points(&DailyGameScore::success(45, 1), time), 6);
        assert_eq!(points(&DailyGameScore::success(300, 1), time), 1);
        assert_eq!(points(&DailyGameScore::success(0, 1), time), 7);
    }

    #[test]
    fn test_label_sanity() {
        assert_eq!(metric_label(ScoringModel::LowerAttempts, 7), "1 guesses");
        assert_eq!(metric_label(ScoringModel::LowerHints, 6), "1 hint");
        assert_eq!(metric_label(ScoringModel::HigherIsBetter, 1), "1 pt");
        assert_eq!(metric_label(ScoringModel::LowerTimeSeconds, 7), "<30s");
        assert_eq!(metric_label(ScoringModel::LowerTimeSeconds, 1), ">=3m");
        assert_eq!(metric_label(ScoringModel::LowerAttempts, 0), "7 guesses");
    }
}

/// GameStreak construction rules
mod streak_tests {
    use super::*;

    #[test]
    fn test_construction_rejects_completed_over_played() {
        let result = GameStreak::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Wordle",
            StreakCounts {
                total_games_completed: 5,
                total_games_played: 3,
                ..Default::default()
            },
            None,
            None,
        );
        assert!(matches!(
            result,
            Err(StreakValidationError::CompletedExceedsPlayed { .. })
        ));
    }

    #[test]
    fn test_construction_clamps_max_streak() {
        let streak = GameStreak::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Wordle",
            StreakCounts {
                current_streak: 5,
                max_streak: 0,
                total_games_played: 5,
                total_games_completed: 5,
            },
            None,
            None,
        )
        .unwrap();
        assert_eq!(streak.max_streak(), 5);
    }

    #[test]
    fn test_empty_for_game_is_broken() {
        let catalog = GameCatalog::builtin();
        let streak = GameStreak::empty_for(catalog.find("Wordle").unwrap());
        assert_eq!(streak.counts(), StreakCounts::default());
        assert!(streak.last_played_date().is_none());
        assert!(streak.streak_start_date().is_none());
        assert_eq!(streak.streak_status(), StreakStatus::Broken);
    }
}

/// Share text through to stored streaks and rankings
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_shares_build_a_streak() {
        let catalog = GameCatalog::builtin();
        let mut store = StreakStore::new();

        let shares = [
            ("Wordle 1,100 4/6", date(2024, 4, 1)),
            ("Wordle 1,101 2/6", date(2024, 4, 2)),
            ("Wordle 1,102 X/6", date(2024, 4, 3)),
            ("Wordle 1,103 5/6", date(2024, 4, 4)),
        ];
        for (text, day) in shares {
            let share = parse_share(text, &catalog).unwrap();
            store.record(&share.game, &share.score, day);
        }

        let wordle = catalog.find("wordle").unwrap();
        let streak = store.get(&wordle.id()).unwrap();
        assert_eq!(streak.current_streak(), 1);
        assert_eq!(streak.max_streak(), 2);
        assert_eq!(streak.total_games_played(), 4);
        assert_eq!(streak.total_games_completed(), 3);
        assert_eq!(
            streak.streak_status_on(date(2024, 4, 5), ActivityWindow::default()),
            StreakStatus::Active
        );
    }

    #[test]
    fn test_friend_shares_rank() {
        let catalog = GameCatalog::builtin();
        let entries: Vec<FriendResult> = [
            ("ana", "Mini 0:52"),
            ("ben", "Mini 0:21"),
            ("cy", "Mini 4:10"),
        ]
        .into_iter()
        .map(|(player, text)| FriendResult::new(player, parse_share(text, &catalog).unwrap().score))
        .collect();

        let board = Leaderboard::rank(Some(ScoringModel::LowerTimeSeconds), &entries);
        let rows: Vec<_> = board
            .rows
            .iter()
            .map(|r| (r.rank, r.player.as_str(), r.label.as_str()))
            .collect();
        assert_eq!(rows, [(1, "ben", "<30s"), (2, "ana", "<1m"), (3, "cy", ">=3m")]);
    }

    #[test]
    fn test_export_and_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let catalog = GameCatalog::builtin();

        let mut store = StreakStore::new();
        let strands = catalog.find("Strands").unwrap();
        store.record(strands, &DailyGameScore::success(0, 7), date(2024, 4, 1));
        store.save(&path).unwrap();

        let mut fresh = StreakStore::new();
        assert_eq!(fresh.merge(StreakStore::load(&path).unwrap()), 1);
        assert_eq!(fresh.get(&strands.id()), store.get(&strands.id()));
    }
}

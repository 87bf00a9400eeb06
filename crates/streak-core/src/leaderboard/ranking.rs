use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::score::{DailyGameScore, ScoringModel, metric_label};

/// A friend's result for the game being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendResult {
    pub player: String,
    pub score: DailyGameScore,
}

impl FriendResult {
    pub fn new(player: impl Into<String>, score: DailyGameScore) -> Self {
        Self {
            player: player.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Competition rank: tied players share a rank and the next one skips
    pub rank: u32,
    pub player: String,
    pub points: u32,
    pub label: String,
}

/// One game's page of friend rankings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    pub model: Option<ScoringModel>,
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    /// Rank friends by points, highest first.
    ///
    /// Equal points are ordered by player name so output is stable. Labels
    /// use attempts wording when the model is unknown.
    pub fn rank(model: Option<ScoringModel>, entries: &[FriendResult]) -> Self {
        let label_model = model.unwrap_or(ScoringModel::LowerAttempts);

        let mut scored: Vec<(&FriendResult, u32)> = entries
            .iter()
            .map(|entry| (entry, entry.score.points(model)))
            .collect();
        scored.sort_by(|(a, a_points), (b, b_points)| {
            b_points
                .cmp(a_points)
                .then_with(|| compare_names(&a.player, &b.player))
        });

        let mut rows = Vec::with_capacity(scored.len());
        let mut previous: Option<u32> = None;
        let mut rank = 0;
        for (position, (entry, points)) in scored.into_iter().enumerate() {
            if previous != Some(points) {
                rank = u32::try_from(position + 1).unwrap_or(u32::MAX);
                previous = Some(points);
            }
            rows.push(LeaderboardRow {
                rank,
                player: entry.player.clone(),
                points,
                label: metric_label(label_model, points),
            });
        }

        Self { model, rows }
    }

    pub fn leaders(&self) -> impl Iterator<Item = &LeaderboardRow> {
        self.rows.iter().filter(|row| row.rank == 1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(name: &str, score: i32) -> FriendResult {
        FriendResult::new(name, DailyGameScore::success(score, 6))
    }

    #[test]
    fn test_rank_orders_by_points() {
        let board = Leaderboard::rank(
            Some(ScoringModel::LowerGuesses),
            &[friend("carol", 5), friend("alice", 2), friend("bob", 4)],
        );
        let names: Vec<_> = board.rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
        assert_eq!(board.rows[0].points, 5);
        assert_eq!(board.rows[0].label, "2 guesses");
        assert_eq!(board.rows[2].rank, 3);
    }

    #[test]
    fn test_ties_share_rank_and_next_skips() {
        let board = Leaderboard::rank(
            Some(ScoringModel::LowerGuesses),
            &[
                friend("Zed", 3),
                friend("amy", 3),
                friend("Bea", 5),
                FriendResult::new("dan", DailyGameScore::failed(6)),
            ],
        );
        let ranks: Vec<_> = board
            .rows
            .iter()
            .map(|r| (r.rank, r.player.as_str()))
            .collect();
        assert_eq!(ranks, [(1, "amy"), (1, "Zed"), (3, "Bea"), (4, "dan")]);
        assert_eq!(board.leaders().count(), 2);
        assert_eq!(board.rows[3].points, 0);
    }

    #[test]
    fn test_unknown_model_uses_attempt_labels() {
        let board = Leaderboard::rank(None, &[friend("alice", 1)]);
        assert_eq!(board.rows[0].points, 6);
        assert_eq!(board.rows[0].label, "1 guesses");
    }

    #[test]
    fn test_time_model() {
        let entries = [
            FriendResult::new("slow", DailyGameScore::success(200, 1)),
            FriendResult::new("fast", DailyGameScore::success(20, 1)),
        ];
        let board = Leaderboard::rank(Some(ScoringModel::LowerTimeSeconds), &entries);
        assert_eq!(board.rows[0].player, "fast");
        assert_eq!(board.rows[0].label, "<30s");
        assert_eq!(board.rows[1].label, ">=3m");
    }

    #[test]
    fn test_json_input_with_zero_max_attempts() {
        let entries: Vec<FriendResult> = serde_json::from_str(
            r#"[{"player":"eve","score":{"completed":true,"score":1,"maxAttempts":0}}]"#,
        )
        .unwrap();
        let board = Leaderboard::rank(Some(ScoringModel::LowerAttempts), &entries);
        assert_eq!(board.rows[0].points, 1);
        assert_eq!(board.rows[0].rank, 1);
    }

    #[test]
    fn test_empty_board() {
        let board = Leaderboard::rank(Some(ScoringModel::HigherIsBetter), &[]);
        assert!(board.is_empty());
        assert_eq!(board.leaders().count(), 0);
    }
}

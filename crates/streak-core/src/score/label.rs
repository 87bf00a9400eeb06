use crate::config::limits::{LAST_TIME_BUCKET, MAX_POINTS, TIME_BUCKET_LABELS};
use crate::score::ScoringModel;

/// Render points back into a display label for the given model.
///
/// The forward mapping collapses ranges, so this is a best-effort reverse
/// and not a true inverse. For attempt-based games, 0 points renders as
/// `"7 guesses"`. Display only; never rank or persist on the label.
pub fn metric_label(model: ScoringModel, points: u32) -> String {
    let points = i64::from(points);

    match model {
        ScoringModel::LowerAttempts | ScoringModel::LowerGuesses => {
            let attempts = (MAX_POINTS - points).max(1);
            format!("{attempts} guesses")
        }
        ScoringModel::LowerHints => {
            let hints = (MAX_POINTS - points).max(0);
            if hints == 1 {
                "1 hint".to_string()
            } else {
                format!("{hints} hints")
            }
        }
        ScoringModel::HigherIsBetter => {
            if points == 1 {
                "1 pt".to_string()
            } else {
                format!("{points} pts")
            }
        }
        ScoringModel::LowerTimeSeconds => {
            let bucket = (MAX_POINTS - points.max(1)).clamp(0, LAST_TIME_BUCKET);
            TIME_BUCKET_LABELS[bucket as usize].to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_labels() {
        assert_eq!(metric_label(ScoringModel::LowerAttempts, 7), "1 guesses");
        assert_eq!(metric_label(ScoringModel::LowerGuesses, 4), "3 guesses");
        assert_eq!(metric_label(ScoringModel::LowerAttempts, 0), "7 guesses");
        assert_eq!(metric_label(ScoringModel::LowerAttempts, 12), "1 guesses");
    }

    #[test]
    fn test_hint_labels() {
        assert_eq!(metric_label(ScoringModel::LowerHints, 6), "1 hint");
        assert_eq!(metric_label(ScoringModel::LowerHints, 7), "0 hints");
        assert_eq!(metric_label(ScoringModel::LowerHints, 4), "3 hints");
        assert_eq!(metric_label(ScoringModel::LowerHints, 9), "0 hints");
    }

    #[test]
    fn test_point_labels() {
        assert_eq!(metric_label(ScoringModel::HigherIsBetter, 1), "1 pt");
        assert_eq!(metric_label(ScoringModel::HigherIsBetter, 0), "0 pts");
        assert_eq!(metric_label(ScoringModel::HigherIsBetter, 5), "5 pts");
    }

    #[test]
    fn test_time_labels() {
        let model = ScoringModel::LowerTimeSeconds;
        assert_eq!(metric_label(model, 7), "<30s");
        assert_eq!(metric_label(model, 6), "<1m");
        assert_eq!(metric_label(model, 5), "<1m30");
        assert_eq!(metric_label(model, 4), "<2m");
        assert_eq!(metric_label(model, 3), "<2m30");
        assert_eq!(metric_label(model, 2), "<3m");
        assert_eq!(metric_label(model, 1), ">=3m");
        assert_eq!(metric_label(model, 0), ">=3m");
        assert_eq!(metric_label(model, 40), "<30s");
    }
}

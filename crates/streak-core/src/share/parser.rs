use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{Game, GameCatalog};
use crate::score::{DailyGameScore, ScoringModel};

const HINT_MARKER: char = '\u{1F4A1}';

/// A shared result resolved against the game catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedShare {
    pub game: Game,
    pub puzzle_number: Option<u32>,
    pub score: DailyGameScore,
}

/// Parse pasted share text such as `"Wordle 1,234 3/6"`.
///
/// The game is named by the first word of the first non-empty line. How the
/// rest is read depends on the game's scoring model.
pub fn parse_share(text: &str, catalog: &GameCatalog) -> Result<ParsedShare> {
    let header = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| Error::ShareParse("empty text".to_string()))?;

    let mut header_words = header.split_whitespace();
    let name = header_words
        .next()
        .map(|w| w.trim_end_matches([':', ',', '#']))
        .unwrap_or_default();
    let game = catalog
        .find(name)
        .ok_or_else(|| Error::UnknownGame(name.to_string()))?
        .clone();
    let puzzle_number = header_words.next().and_then(parse_puzzle_number);

    let words: Vec<&str> = text.split_whitespace().skip(1).collect();
    let score = match game.scoring_model() {
        ScoringModel::LowerAttempts | ScoringModel::LowerGuesses => parse_attempts(&words)?,
        ScoringModel::LowerHints => {
            DailyGameScore::success(parse_hints(text, &words), game.max_attempts())
        }
        ScoringModel::HigherIsBetter => {
            let points = parse_points(&words)
                .ok_or_else(|| Error::ShareParse("no score found".to_string()))?;
            DailyGameScore::success(points, game.max_attempts())
        }
        ScoringModel::LowerTimeSeconds => {
            let seconds = words
                .iter()
                .find_map(|w| parse_clock(w))
                .ok_or_else(|| Error::ShareParse("no time found".to_string()))?;
            DailyGameScore::success(seconds, game.max_attempts())
        }
    };

    debug!(
        "Parsed {} share: completed={}, score={:?}",
        game.name(),
        score.completed,
        score.score
    );

    Ok(ParsedShare {
        game,
        puzzle_number,
        score,
    })
}

/// `1,234` or `#1234`.
fn parse_puzzle_number(word: &str) -> Option<u32> {
    let digits: String = word
        .trim_start_matches('#')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.parse().ok()
}

/// `N/M` or `X/M`; trailing marks such as hard-mode `*` are ignored.
fn parse_attempts(words: &[&str]) -> Result<DailyGameScore> {
    for word in words {
        let Some((used, max)) = word.split_once('/') else {
            continue;
        };
        let max_digits: String = max.chars().take_while(char::is_ascii_digit).collect();
        let Ok(max_attempts) = max_digits.parse::<u32>() else {
            continue;
        };

        if used.eq_ignore_ascii_case("x") {
            return Ok(DailyGameScore::failed(max_attempts));
        }
        if let Ok(used) = used.parse::<i32>() {
            return Ok(DailyGameScore::success(used, max_attempts));
        }
    }

    Err(Error::ShareParse("no N/M attempts found".to_string()))
}

/// Hint bulbs if present, otherwise `N hint(s)`, otherwise none used.
fn parse_hints(text: &str, words: &[&str]) -> i32 {
    let bulbs = text.chars().filter(|c| *c == HINT_MARKER).count();
    if bulbs > 0 {
        return i32::try_from(bulbs).unwrap_or(i32::MAX);
    }

    words
        .windows(2)
        .find_map(|pair| {
            let unit = pair[1].trim_end_matches(|c: char| !c.is_alphanumeric());
            if unit.eq_ignore_ascii_case("hint") || unit.eq_ignore_ascii_case("hints") {
                let count: u32 = pair[0].parse().ok()?;
                Some(i32::try_from(count).unwrap_or(i32::MAX))
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// `Score: N`, `N pts` or `N points`.
fn parse_points(words: &[&str]) -> Option<i32> {
    words.windows(2).find_map(|pair| {
        let (first, second) = (pair[0], pair[1]);
        if first.eq_ignore_ascii_case("score:") {
            return second.parse().ok();
        }
        let unit = second.trim_end_matches(|c: char| !c.is_alphanumeric());
        match unit.to_ascii_lowercase().as_str() {
            "pt" | "pts" | "points" => first.parse().ok(),
            _ => None,
        }
    })
}

/// `m:ss` or `h:mm:ss` in seconds.
fn parse_clock(word: &str) -> Option<i32> {
    let word = word.trim_matches(|c: char| !c.is_ascii_digit());
    if !word.contains(':') {
        return None;
    }

    let parts: Vec<i32> = word
        .split(':')
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [m, s] if *s < 60 => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] if *m < 60 && *s < 60 => h.checked_mul(3600)?.checked_add(m * 60 + s),
        _ => None,
    }
}

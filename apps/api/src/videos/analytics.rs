use serde::Serialize;
use sqlx::FromRow;

use crate::videos::scoring::{round_half_up, ScoringConfig};

/// Score projection of a stored video, the only columns aggregation needs.
/// Sequences of these are always supplied newest-first; nothing here sorts.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ScoreRow {
    pub craft_score: i32,
    pub experience_score: i32,
    pub delta_score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAverages {
    pub craft_score: i32,
    pub experience_score: i32,
    pub delta_score: i32,
}

impl ScoreAverages {
    const ZERO: ScoreAverages = ScoreAverages {
        craft_score: 0,
        experience_score: 0,
        delta_score: 0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_videos: usize,
    pub overall_averages: ScoreAverages,
    pub recent_averages: ScoreAverages,
}

fn averages(entries: &[ScoreRow]) -> ScoreAverages {
    if entries.is_empty() {
        return ScoreAverages::ZERO;
    }
    let len = entries.len() as f64;
    let (mut craft, mut experience, mut delta) = (0i64, 0i64, 0i64);
    for entry in entries {
        craft += i64::from(entry.craft_score);
        experience += i64::from(entry.experience_score);
        delta += i64::from(entry.delta_score);
    }
    ScoreAverages {
        craft_score: round_half_up(craft as f64 / len),
        experience_score: round_half_up(experience as f64 / len),
        delta_score: round_half_up(delta as f64 / len),
    }
}

/// Cross-video aggregation for the trends display. `entries` must already be
/// in recency order (newest first); the recent window is simply the leading
/// `recent_window` entries. Empty input yields a zeroed summary, not an
/// error.
pub fn aggregate(entries: &[ScoreRow], config: &ScoringConfig) -> AnalyticsSummary {
    let recent = &entries[..entries.len().min(config.recent_window)];
    AnalyticsSummary {
        total_videos: entries.len(),
        overall_averages: averages(entries),
        recent_averages: averages(recent),
    }
}

/// Length of the contiguous newest-first run with craft score at or above
/// `threshold`. Caller-supplied order is authoritative.
pub fn current_streak(entries: &[ScoreRow], threshold: i32) -> usize {
    entries
        .iter()
        .take_while(|entry| entry.craft_score >= threshold)
        .count()
}

use serde::{Deserialize, Serialize};

use crate::models::video::{ExperienceInputs, ScriptRatings, SoundRatings};

/// All scoring knobs in one place so the engine carries no embedded literals
/// and can be exercised against alternate weightings in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Upper bound of the 1-N rating scale used by script/sound ratings.
    pub rating_scale_max: f64,
    pub retention_weight: f64,
    pub watch_time_weight: f64,
    pub mentions_weight: f64,
    /// Points credited per craft mention before the cap is applied.
    pub mentions_per_unit: f64,
    pub mentions_cap: f64,
    /// Craft score a video must reach to count toward the current streak.
    pub streak_threshold: i32,
    /// How many of the most recent entries feed the recent averages.
    pub recent_window: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rating_scale_max: 5.0,
            retention_weight: 0.6,
            watch_time_weight: 0.3,
            mentions_weight: 0.1,
            mentions_per_unit: 10.0,
            mentions_cap: 100.0,
            streak_threshold: 60,
            recent_window: 5,
        }
    }
}

/// The three derived scores attached to every stored video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub craft: i32,
    pub experience: i32,
    pub delta: i32,
}

/// Rounds to the nearest integer, halves up (0.5 -> 1, -0.5 -> 0).
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Mean of the nine script/sound ratings scaled to 0-100.
/// Experiment flags and notes are excluded by construction. Total over
/// well-formed input; range validation happens at the boundary before this
/// is called.
pub fn compute_craft_score(
    script: &ScriptRatings,
    sound: &SoundRatings,
    config: &ScoringConfig,
) -> i32 {
    let ratings = [
        script.hook_effectiveness,
        script.structure_clarity,
        script.concision,
        script.specificity,
        script.audience_bridge,
        sound.cue_alignment,
        sound.silence_placement,
        sound.mix_balance,
        sound.emotional_fit,
    ];
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    round_half_up(mean / config.rating_scale_max * 100.0)
}

/// Weighted sum of the audience signals, with the mentions term saturating
/// at `mentions_cap` before weighting.
///
/// Does not clamp `retention30s`/`avgWatchTime`: out-of-range percentages
/// are rejected by boundary validation, never silently corrected here, so
/// this function stays a faithful map of its inputs.
pub fn compute_experience_score(inputs: &ExperienceInputs, config: &ScoringConfig) -> i32 {
    let mentions = (f64::from(inputs.craft_mentions) * config.mentions_per_unit)
        .min(config.mentions_cap);
    round_half_up(
        inputs.retention_30s * config.retention_weight
            + inputs.avg_watch_time * config.watch_time_weight
            + mentions * config.mentions_weight,
    )
}

/// Experience minus craft. Unbounded; negative means self-assessed craft
/// outran the audience response.
pub fn compute_delta_score(craft_score: i32, experience_score: i32) -> i32 {
    experience_score - craft_score
}

/// Single recomputation path used by both create and update, so stored
/// scores can never drift from the inputs they were derived from.
pub fn score_entry(
    script: &ScriptRatings,
    sound: &SoundRatings,
    inputs: &ExperienceInputs,
    config: &ScoringConfig,
) -> Scores {
    let craft = compute_craft_score(script, sound, config);
    let experience = compute_experience_score(inputs, config);
    Scores {
        craft,
        experience,
        delta: compute_delta_score(craft, experience),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(ratings: [u8; 5]) -> ScriptRatings {
        ScriptRatings {
            hook_effectiveness: ratings[0],
            structure_clarity: ratings[1],
            concision: ratings[2],
            specificity: ratings[3],
            audience_bridge: ratings[4],
            new_experiment: false,
            experiment_notes: None,
        }
    }

    fn sound(ratings: [u8; 4]) -> SoundRatings {
        SoundRatings {
            cue_alignment: ratings[0],
            silence_placement: ratings[1],
            mix_balance: ratings[2],
            emotional_fit: ratings[3],
            new_experiment: false,
            experiment_notes: None,
        }
    }

    fn inputs(retention: f64, watch_time: f64, mentions: u32) -> ExperienceInputs {
        ExperienceInputs {
            retention_30s: retention,
            avg_watch_time: watch_time,
            craft_mentions: mentions,
        }
    }

    #[test]
    fn test_all_fives_is_100() {
        let cfg = ScoringConfig::default();
        assert_eq!(
            compute_craft_score(&script([5; 5]), &sound([5; 4]), &cfg),
            100
        );
    }

    #[test]
    fn test_all_ones_is_20() {
        let cfg = ScoringConfig::default();
        assert_eq!(compute_craft_score(&script([1; 5]), &sound([1; 4]), &cfg), 20);
    }

    #[test]
    fn test_craft_score_rounds_half_up() {
        let cfg = ScoringConfig::default();
        // sum 21, mean 21/9 = 2.333.. -> 46.66.. -> 47
        assert_eq!(
            compute_craft_score(&script([3, 3, 3, 2, 2]), &sound([2, 2, 2, 2]), &cfg),
            47
        );
    }

    #[test]
    fn test_craft_score_permutation_invariant() {
        let cfg = ScoringConfig::default();
        let a = compute_craft_score(&script([5, 1, 3, 2, 4]), &sound([4, 2, 5, 1]), &cfg);
        let b = compute_craft_score(&script([1, 2, 3, 4, 5]), &sound([1, 2, 4, 5]), &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn test_craft_score_bounds() {
        let cfg = ScoringConfig::default();
        for lo in 1..=5u8 {
            for hi in 1..=5u8 {
                let s = compute_craft_score(&script([lo; 5]), &sound([hi; 4]), &cfg);
                assert!((0..=100).contains(&s), "score {s} out of range");
            }
        }
    }

    #[test]
    fn test_experience_score_maximum() {
        let cfg = ScoringConfig::default();
        assert_eq!(compute_experience_score(&inputs(100.0, 100.0, 10), &cfg), 100);
    }

    #[test]
    fn test_experience_score_zero() {
        let cfg = ScoringConfig::default();
        assert_eq!(compute_experience_score(&inputs(0.0, 0.0, 0), &cfg), 0);
    }

    #[test]
    fn test_experience_score_weighting() {
        let cfg = ScoringConfig::default();
        // 50*0.6 + 40*0.3 + 20*0.1 = 30 + 12 + 2 = 44
        assert_eq!(compute_experience_score(&inputs(50.0, 40.0, 2), &cfg), 44);
    }

    #[test]
    fn test_mentions_saturate_at_cap() {
        let cfg = ScoringConfig::default();
        let at_cap = compute_experience_score(&inputs(0.0, 0.0, 10), &cfg);
        let past_cap = compute_experience_score(&inputs(0.0, 0.0, 50), &cfg);
        assert_eq!(at_cap, past_cap);
        assert_eq!(at_cap, 10);
    }

    #[test]
    fn test_delta_round_trip() {
        for x in [-40, -1, 0, 1, 37] {
            assert_eq!(compute_delta_score(60, 60 + x), x);
        }
    }

    #[test]
    fn test_score_entry_composes_all_three() {
        let cfg = ScoringConfig::default();
        let scores = score_entry(
            &script([5; 5]),
            &sound([5; 4]),
            &inputs(50.0, 50.0, 0),
            &cfg,
        );
        assert_eq!(scores.craft, 100);
        assert_eq!(scores.experience, 45);
        assert_eq!(scores.delta, -55);
    }

    #[test]
    fn test_score_entry_idempotent_on_same_inputs() {
        let cfg = ScoringConfig::default();
        let s = script([4, 3, 5, 2, 4]);
        let snd = sound([3, 4, 4, 5]);
        let i = inputs(62.5, 41.0, 3);
        assert_eq!(score_entry(&s, &snd, &i, &cfg), score_entry(&s, &snd, &i, &cfg));
    }

    #[test]
    fn test_alternate_weights() {
        let cfg = ScoringConfig {
            retention_weight: 1.0,
            watch_time_weight: 0.0,
            mentions_weight: 0.0,
            ..ScoringConfig::default()
        };
        assert_eq!(compute_experience_score(&inputs(73.0, 99.0, 9), &cfg), 73);
    }

    #[test]
    fn test_alternate_rating_scale() {
        let cfg = ScoringConfig {
            rating_scale_max: 10.0,
            ..ScoringConfig::default()
        };
        // all fives on a 10-point scale is half marks
        assert_eq!(compute_craft_score(&script([5; 5]), &sound([5; 4]), &cfg), 50);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.4999), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
    }
}

use crate::models::video::{ExperienceInputs, ScriptRatings, SoundRatings, VideoSubmission};

const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

/// Checks a submission against the input contract before any scoring runs:
/// every rating in [1,5], percentages in [0,100], a non-empty title, and
/// finite non-negative distribution numbers. Returns every problem found so
/// the client can fix a form in one pass.
pub fn validate_submission(submission: &VideoSubmission) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if submission.title.trim().is_empty() {
        problems.push("title must not be empty".to_string());
    }

    check_script_ratings(&submission.script, &mut problems);
    check_sound_ratings(&submission.sound, &mut problems);
    check_experience_inputs(&submission.experience_inputs, &mut problems);

    if let Some(ctr) = submission.distribution_metrics.ctr {
        if !ctr.is_finite() || ctr < 0.0 {
            problems.push(format!("distributionMetrics.ctr must be a finite number >= 0, got {ctr}"));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

fn check_script_ratings(script: &ScriptRatings, problems: &mut Vec<String>) {
    check_rating("script.hookEffectiveness", script.hook_effectiveness, problems);
    check_rating("script.structureClarity", script.structure_clarity, problems);
    check_rating("script.concision", script.concision, problems);
    check_rating("script.specificity", script.specificity, problems);
    check_rating("script.audienceBridge", script.audience_bridge, problems);
}

fn check_sound_ratings(sound: &SoundRatings, problems: &mut Vec<String>) {
    check_rating("sound.cueAlignment", sound.cue_alignment, problems);
    check_rating("sound.silencePlacement", sound.silence_placement, problems);
    check_rating("sound.mixBalance", sound.mix_balance, problems);
    check_rating("sound.emotionalFit", sound.emotional_fit, problems);
}

fn check_experience_inputs(inputs: &ExperienceInputs, problems: &mut Vec<String>) {
    check_percentage("experienceInputs.retention30s", inputs.retention_30s, problems);
    check_percentage("experienceInputs.avgWatchTime", inputs.avg_watch_time, problems);
}

fn check_rating(field: &str, value: u8, problems: &mut Vec<String>) {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        problems.push(format!(
            "{field} must be between {RATING_MIN} and {RATING_MAX}, got {value}"
        ));
    }
}

fn check_percentage(field: &str, value: f64, problems: &mut Vec<String>) {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        problems.push(format!("{field} must be a percentage in [0,100], got {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::video::{DistributionMetrics, Playlist};

    fn valid_submission() -> VideoSubmission {
        VideoSubmission {
            title: "Morning routine rebuild".to_string(),
            playlist: Playlist::Building,
            script: ScriptRatings {
                hook_effectiveness: 4,
                structure_clarity: 3,
                concision: 5,
                specificity: 4,
                audience_bridge: 3,
                new_experiment: true,
                experiment_notes: Some("cold open without intro".to_string()),
            },
            sound: SoundRatings {
                cue_alignment: 4,
                silence_placement: 3,
                mix_balance: 4,
                emotional_fit: 5,
                new_experiment: false,
                experiment_notes: None,
            },
            experience_inputs: ExperienceInputs {
                retention_30s: 62.5,
                avg_watch_time: 41.0,
                craft_mentions: 3,
            },
            distribution_metrics: DistributionMetrics {
                views: Some(1200),
                ctr: Some(4.8),
            },
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission(&valid_submission()).is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut sub = valid_submission();
        sub.title = "   ".to_string();
        let problems = validate_submission(&sub).unwrap_err();
        assert!(problems[0].contains("title"));
    }

    #[test]
    fn test_rating_zero_rejected() {
        let mut sub = valid_submission();
        sub.script.concision = 0;
        let problems = validate_submission(&sub).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("script.concision"));
    }

    #[test]
    fn test_rating_above_scale_rejected() {
        let mut sub = valid_submission();
        sub.sound.mix_balance = 6;
        assert!(validate_submission(&sub).is_err());
    }

    #[test]
    fn test_retention_above_100_rejected() {
        let mut sub = valid_submission();
        sub.experience_inputs.retention_30s = 104.0;
        let problems = validate_submission(&sub).unwrap_err();
        assert!(problems[0].contains("retention30s"));
    }

    #[test]
    fn test_negative_watch_time_rejected() {
        let mut sub = valid_submission();
        sub.experience_inputs.avg_watch_time = -1.0;
        assert!(validate_submission(&sub).is_err());
    }

    #[test]
    fn test_non_finite_percentage_rejected() {
        let mut sub = valid_submission();
        sub.experience_inputs.retention_30s = f64::NAN;
        assert!(validate_submission(&sub).is_err());
    }

    #[test]
    fn test_negative_ctr_rejected() {
        let mut sub = valid_submission();
        sub.distribution_metrics.ctr = Some(-0.5);
        assert!(validate_submission(&sub).is_err());
    }

    #[test]
    fn test_all_problems_collected() {
        let mut sub = valid_submission();
        sub.title = String::new();
        sub.script.hook_effectiveness = 0;
        sub.experience_inputs.avg_watch_time = 250.0;
        let problems = validate_submission(&sub).unwrap_err();
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_boundary_values_pass() {
        let mut sub = valid_submission();
        sub.script.hook_effectiveness = 1;
        sub.sound.emotional_fit = 5;
        sub.experience_inputs.retention_30s = 0.0;
        sub.experience_inputs.avg_watch_time = 100.0;
        sub.experience_inputs.craft_mentions = 0;
        assert!(validate_submission(&sub).is_ok());
    }
}

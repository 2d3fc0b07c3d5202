use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed set of playlists a video can belong to. Unknown values fail
/// deserialization at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playlist {
    Building,
    Body,
    Mind,
    Reflections,
}

impl Playlist {
    pub fn as_str(&self) -> &'static str {
        match self {
            Playlist::Building => "Building",
            Playlist::Body => "Body",
            Playlist::Mind => "Mind",
            Playlist::Reflections => "Reflections",
        }
    }
}

/// Self-rated script quality, five ratings on a 1-5 scale.
/// The experiment fields are descriptive metadata and never feed scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRatings {
    pub hook_effectiveness: u8,
    pub structure_clarity: u8,
    pub concision: u8,
    pub specificity: u8,
    pub audience_bridge: u8,
    pub new_experiment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_notes: Option<String>,
}

/// Self-rated sound quality, four ratings on a 1-5 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundRatings {
    pub cue_alignment: u8,
    pub silence_placement: u8,
    pub mix_balance: u8,
    pub emotional_fit: u8,
    pub new_experiment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment_notes: Option<String>,
}

/// Audience-observed signals, supplied by the caller, never derived.
/// The two percentages are expected in [0,100] and rejected by validation
/// when out of range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInputs {
    #[serde(rename = "retention30s")]
    pub retention_30s: f64,
    pub avg_watch_time: f64,
    pub craft_mentions: u32,
}

/// Observational distribution numbers. Never feeds score computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctr: Option<f64>,
}

/// Raw submission from the client. Scores are intentionally absent here:
/// they are always recomputed server-side on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubmission {
    pub title: String,
    pub playlist: Playlist,
    pub script: ScriptRatings,
    pub sound: SoundRatings,
    pub experience_inputs: ExperienceInputs,
    #[serde(default)]
    pub distribution_metrics: DistributionMetrics,
}

/// Persisted video entry as stored in and returned from Postgres.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VideoRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub playlist: String,
    pub script: Json<ScriptRatings>,
    pub sound: Json<SoundRatings>,
    pub experience_inputs: Json<ExperienceInputs>,
    pub distribution_metrics: Json<DistributionMetrics>,
    pub craft_score: i32,
    pub experience_score: i32,
    pub delta_score: i32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

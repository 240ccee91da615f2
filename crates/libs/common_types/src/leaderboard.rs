use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Literal time value for runs that did not finish within the limit.
/// Never compared against real timestamps when picking a best time.
pub const TIME_OVER: &str = "TIME OVER";

/// One reconstructed leaderboard row.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct PlayerRow {
    pub nickname: String,
    /// Rank points, only present in table layouts that show a TR column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr: Option<u32>,
    pub exp: u64,
    /// Either a colon-delimited timestamp or the literal `TIME OVER`.
    pub time: String,
}

/// Cumulative results for one nickname across every processed image.
/// The nickname is the only identity, OCR misreads stay separate entries.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct PlayerAggregate {
    pub nickname: String,
    #[serde(rename = "totalEXP")]
    pub total_exp: u64,
    pub appearances: u32,
    #[serde(rename = "bestTime")]
    pub best_time: String,
    #[serde(rename = "timeOverCount")]
    pub time_over_count: u32,
    /// Filenames the player appeared in, in upload order.
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Statistics {
    pub unique_players: usize,
    pub total_images: usize,
    pub total_exp: u64,
    /// Floor of `total_exp / unique_players`, 0 when nobody was recognized.
    pub avg_exp: u64,
}

/// Processing outcome for a single uploaded image.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ImageReport {
    pub filename: String,
    pub players: Vec<PlayerRow>,
    pub player_count: usize,
    /// Present when this image failed; such images contribute no rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything recorded during one request, in upload order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AggregatedData {
    pub players: Vec<PlayerAggregate>,
    pub statistics: Statistics,
    pub processed_images: Vec<ImageReport>,
}

use common_types::{ImageReport, PlayerAggregate, Statistics};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One file taken from the multipart form, in upload order.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename; empty when the form part carried none.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Response of the processing endpoint. `total_images` and `unique_players`
/// repeat values from `statistics` for clients that only read the top level.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ProcessResponse {
    pub success: bool,
    pub processed_images: Vec<ImageReport>,
    pub aggregated_players: Vec<PlayerAggregate>,
    pub statistics: Statistics,
    pub total_images: usize,
    pub unique_players: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_wire_shape() {
        let response = ProcessResponse {
            success: true,
            processed_images: vec![],
            aggregated_players: vec![],
            statistics: Statistics {
                unique_players: 0,
                total_images: 0,
                total_exp: 0,
                avg_exp: 0,
            },
            total_images: 0,
            unique_players: 0,
        };

        let value = serde_json::to_value(&response).unwrap();
        for key in [
            "success",
            "processed_images",
            "aggregated_players",
            "statistics",
            "total_images",
            "unique_players",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["success"], true);
        assert_eq!(value["statistics"]["avg_exp"], 0);
    }
}

use common_types::{AggregatedData, ImageReport, PlayerAggregate, PlayerRow, Statistics, TIME_OVER};
use std::collections::HashMap;

/// Running per-nickname totals for one request.
///
/// Lives on the request handler's stack and is dropped with the response;
/// nothing is shared between requests. Aggregates are kept in first-seen
/// order. Best times are compared as strings, which matches numeric order
/// for the zero-padded `HH:MM:SS` values the extractor produces.
#[derive(Debug, Default)]
pub struct PlayerAggregator {
    players: Vec<PlayerAggregate>,
    index_by_nickname: HashMap<String, usize>,
    processed_images: Vec<ImageReport>,
}

impl PlayerAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the image report, then folds every row into the aggregate table.
    pub fn record(&mut self, filename: &str, rows: Vec<PlayerRow>) {
        self.processed_images.push(ImageReport {
            filename: filename.to_string(),
            player_count: rows.len(),
            players: rows.clone(),
            error: None,
        });
        for row in rows {
            self.fold_row(filename, row);
        }
    }

    /// Logs an image that could not be processed. Failed images contribute
    /// no rows, so they never influence player totals.
    pub fn record_failure(&mut self, filename: &str, error: String) {
        self.processed_images.push(ImageReport {
            filename: filename.to_string(),
            players: Vec::new(),
            player_count: 0,
            error: Some(error),
        });
    }

    fn fold_row(&mut self, filename: &str, row: PlayerRow) {
        if let Some(&index) = self.index_by_nickname.get(&row.nickname) {
            let entry = &mut self.players[index];
            entry.total_exp += row.exp;
            entry.appearances += 1;
            entry.images.push(filename.to_string());
            if row.time == TIME_OVER {
                entry.time_over_count += 1;
            } else if entry.best_time == TIME_OVER || row.time < entry.best_time {
                entry.best_time = row.time;
            }
        } else {
            let time_over_count = u32::from(row.time == TIME_OVER);
            self.index_by_nickname
                .insert(row.nickname.clone(), self.players.len());
            self.players.push(PlayerAggregate {
                nickname: row.nickname,
                total_exp: row.exp,
                appearances: 1,
                best_time: row.time,
                time_over_count,
                images: vec![filename.to_string()],
            });
        }
    }

    /// Stable read of everything recorded so far. Safe to call at any point,
    /// including before the first image.
    #[must_use]
    pub fn snapshot(&self) -> AggregatedData {
        let unique_players = self.players.len();
        let total_exp: u64 = self.players.iter().map(|player| player.total_exp).sum();
        let avg_exp = if unique_players == 0 {
            0
        } else {
            total_exp / unique_players as u64
        };

        AggregatedData {
            players: self.players.clone(),
            statistics: Statistics {
                unique_players,
                total_images: self.processed_images.len(),
                total_exp,
                avg_exp,
            },
            processed_images: self.processed_images.clone(),
        }
    }
}

#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod leaderboard;
mod ocr;

pub use leaderboard::*;
pub use ocr::*;

use app_state::ExtractionSettings;
use common_types::{OcrFragment, PlayerRow, TIME_OVER};
use std::collections::BTreeMap;
use tracing::debug;

/// Rows recovered from one screenshot, plus counts of what was thrown away.
/// The counts exist to judge extraction quality; they never change the rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableExtraction {
    pub rows: Vec<PlayerRow>,
    /// Fragments that were header noise or matched no classification rule.
    pub discarded_fragments: usize,
    /// Candidate rows dropped because nickname, exp or time never resolved.
    pub discarded_rows: usize,
}

#[derive(Debug, Default)]
struct RowDraft {
    nickname: Option<String>,
    tr: Option<u32>,
    exp: Option<u64>,
    time: Option<String>,
}

/// Reconstructs the leaderboard table from one image's unordered OCR output.
///
/// Fragments are grouped into rows by snapping their vertical centers to a
/// pixel grid, then classified left to right. A row is emitted only when
/// nickname, exp and time all resolved; rows with exp and time but no
/// readable nickname get a synthesized `runner<N>` nickname instead.
#[must_use]
pub fn extract_table(fragments: &[OcrFragment], settings: &ExtractionSettings) -> TableExtraction {
    let mut buckets: BTreeMap<i64, Vec<&OcrFragment>> = BTreeMap::new();
    for fragment in fragments {
        let bucket = (fragment.y_center() / settings.row_bucket_px).round() as i64;
        buckets.entry(bucket).or_default().push(fragment);
    }

    let mut extraction = TableExtraction::default();
    let mut fallback_counter = 1;

    for mut row_fragments in buckets.into_values() {
        row_fragments.sort_by(|a, b| a.left_x().total_cmp(&b.left_x()));

        let mut draft = RowDraft::default();
        for fragment in row_fragments {
            if !classify_fragment(fragment.text.trim(), &mut draft, settings) {
                extraction.discarded_fragments += 1;
            }
        }

        if draft.nickname.is_none() && draft.exp.is_some() && draft.time.is_some() {
            draft.nickname = Some(format!(
                "{}{fallback_counter}",
                settings.fallback_nickname_prefix
            ));
            fallback_counter += 1;
        }

        match (draft.nickname, draft.exp, draft.time) {
            (Some(nickname), Some(exp), Some(time)) => extraction.rows.push(PlayerRow {
                nickname,
                tr: draft.tr,
                exp,
                time,
            }),
            _ => extraction.discarded_rows += 1,
        }
    }

    if extraction.discarded_fragments > 0 || extraction.discarded_rows > 0 {
        debug!(
            "extraction discarded {} fragments and {} incomplete rows",
            extraction.discarded_fragments, extraction.discarded_rows
        );
    }
    extraction
}

/// Applies one fragment's trimmed text to the row draft. Rules are ordered
/// by specificity and the first matching rule wins; assignments overwrite
/// earlier ones from the same row. Returns false when the text was noise.
fn classify_fragment(text: &str, draft: &mut RowDraft, settings: &ExtractionSettings) -> bool {
    let lowered = text.to_lowercase();

    if text.is_empty()
        || settings
            .stop_words
            .iter()
            .any(|word| word.to_lowercase() == lowered)
    {
        return false;
    }
    if lowered == "time over" {
        draft.time = Some(TIME_OVER.to_string());
        return true;
    }
    if text.contains(':') && text.split(':').count() == 3 {
        draft.time = Some(text.to_string());
        return true;
    }
    if is_digits(text) && text.len() > settings.exp_digit_threshold {
        return assign_exp(draft, text);
    }
    if text.contains(' ') {
        let qualifying = text
            .split_whitespace()
            .find(|token| is_digits(token) && token.len() > settings.exp_digit_threshold);
        if let Some(token) = qualifying {
            return assign_exp(draft, token);
        }
    }
    let runs = digit_runs(text);
    if matches!(runs.len(), 1 | 2) {
        return assign_from_digit_runs(draft, &runs, settings);
    }
    if is_printable(text) && !is_digits(text) && text.chars().count() <= settings.max_nickname_chars
    {
        draft.nickname = Some(text.to_string());
        return true;
    }
    false
}

/// Two-number heuristic for digit-bearing text that is not a clean EXP
/// value: two runs are a TR/EXP pair, a lone run is classified by length.
/// Text with three or more runs never gets here; it is left to the
/// nickname rule instead of guessing which runs are numbers.
fn assign_from_digit_runs(
    draft: &mut RowDraft,
    runs: &[&str],
    settings: &ExtractionSettings,
) -> bool {
    match runs {
        [tr_run, exp_run] => {
            let mut assigned = false;
            if let Ok(tr) = tr_run.parse::<u32>() {
                draft.tr = Some(tr);
                assigned = true;
            }
            if let Ok(exp) = exp_run.parse::<u64>() {
                draft.exp = Some(exp);
                assigned = true;
            }
            assigned
        }
        [run] => {
            if run.len() > settings.merged_digit_threshold {
                // TR and EXP fused into one token; the EXP digits follow the
                // first `exp_digit_threshold` ones.
                match run.get(settings.exp_digit_threshold..) {
                    Some(rest) => assign_exp(draft, rest),
                    None => false,
                }
            } else if run.len() > settings.exp_digit_threshold {
                assign_exp(draft, run)
            } else if let Ok(tr) = run.parse::<u32>() {
                draft.tr = Some(tr);
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

fn assign_exp(draft: &mut RowDraft, digits: &str) -> bool {
    match digits.parse::<u64>() {
        Ok(exp) => {
            draft.exp = Some(exp);
            true
        }
        Err(_) => false,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn is_printable(text: &str) -> bool {
    text.chars().all(|c| !c.is_control())
}

fn digit_runs(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

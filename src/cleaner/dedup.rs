/*!
 * Removal of consecutive duplicate subtitle blocks.
 *
 * A block is a duplicate when its trimmed text equals the trimmed text of
 * the most recently kept block. Dropped blocks never become the baseline,
 * so "A, A, B, B" collapses to "A, B" and "A, B, A" is left alone.
 */

use log::debug;

use crate::subtitle_processor::SubtitleBlock;

/// A block skipped because it has fewer than three parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    /// 1-based position among the split segments
    pub position: usize,
    /// First line of the block, for reporting
    pub first_line: String,
}

/// Result of one deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome<'a> {
    /// Kept blocks in their original raw form
    pub kept: Vec<&'a str>,
    /// Blocks dropped as adjacent duplicates
    pub duplicate_count: usize,
    /// Blocks skipped as malformed; not counted as duplicates
    pub malformed: Vec<MalformedBlock>,
}

/// Adjacent deduplicator over raw blocks
pub struct AdjacentDeduplicator;

impl AdjacentDeduplicator {
    /// Filter blocks in order, keeping the first of each run of equal texts
    pub fn dedup<'a>(blocks: &[&'a str]) -> DedupOutcome<'a> {
        let mut outcome = DedupOutcome {
            kept: Vec::with_capacity(blocks.len()),
            ..Default::default()
        };
        let mut last_kept_text: Option<&str> = None;

        for (i, &raw) in blocks.iter().enumerate() {
            let Some(block) = SubtitleBlock::parse(raw) else {
                outcome.malformed.push(MalformedBlock {
                    position: i + 1,
                    first_line: raw.lines().next().unwrap_or_default().to_string(),
                });
                continue;
            };

            let current_text = block.dedup_key();
            if last_kept_text == Some(current_text) {
                outcome.duplicate_count += 1;
                continue;
            }

            outcome.kept.push(block.raw());
            last_kept_text = Some(current_text);
        }

        debug!(
            "Deduplication: {} kept, {} duplicates, {} malformed",
            outcome.kept.len(),
            outcome.duplicate_count,
            outcome.malformed.len()
        );

        outcome
    }
}

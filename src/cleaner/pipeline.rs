/*!
 * Pipeline that runs split, deduplication and renumbering in order.
 */

use log::debug;

use crate::subtitle_processor::{join_blocks, split_blocks};

use super::dedup::{AdjacentDeduplicator, MalformedBlock};
use super::renumber::Renumberer;

/// Output of one cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Cleaned document text
    pub output: String,
    /// Number of segments produced by the splitter, malformed ones included
    pub original_count: usize,
    /// Number of blocks written to the output
    pub kept_count: usize,
    /// Number of blocks dropped as adjacent duplicates
    pub duplicate_count: usize,
    /// Blocks skipped as malformed
    pub malformed: Vec<MalformedBlock>,
}

impl CleanReport {
    pub fn malformed_count(&self) -> usize {
        self.malformed.len()
    }

    /// Whether the run changed nothing but index labels
    pub fn is_clean(&self) -> bool {
        self.duplicate_count == 0 && self.malformed.is_empty()
    }
}

/// Cleanup pipeline over a whole SRT document
pub struct CleanerPipeline;

impl CleanerPipeline {
    /// Clean one document. Never fails; empty input gives an empty output.
    pub fn clean(content: &str) -> CleanReport {
        let blocks = split_blocks(content);
        debug!("Split document into {} blocks", blocks.len());

        let outcome = AdjacentDeduplicator::dedup(&blocks);
        let renumbered = Renumberer::renumber(&outcome.kept);

        CleanReport {
            output: join_blocks(&renumbered),
            original_count: blocks.len(),
            kept_count: renumbered.len(),
            duplicate_count: outcome.duplicate_count,
            malformed: outcome.malformed,
        }
    }
}

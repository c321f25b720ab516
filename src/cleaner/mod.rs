/*!
 * Cleanup pipeline for SRT documents.
 *
 * The pipeline runs three stages over the blocks of one document:
 * - Splitting raw content into blocks (`subtitle_processor::split_blocks`)
 * - Collapsing consecutive blocks that repeat the same text
 * - Renumbering the surviving blocks from 1
 *
 * # Architecture
 *
 * - `dedup`: Drops blocks whose text repeats the last kept block
 * - `renumber`: Rewrites numeric index lines with the block's new position
 * - `pipeline`: Runs all stages and collects the summary counters
 */

pub mod dedup;
pub mod renumber;
pub mod pipeline;

// Re-export main types
pub use dedup::{AdjacentDeduplicator, DedupOutcome, MalformedBlock};
pub use renumber::Renumberer;
pub use pipeline::{CleanerPipeline, CleanReport};

/*!
 * Sequential renumbering of kept subtitle blocks.
 */

use log::debug;

use crate::subtitle_processor::SubtitleBlock;

/// Renumberer for kept blocks
pub struct Renumberer;

impl Renumberer {
    /// Replace each numeric index line with the block's 1-based position.
    ///
    /// Blocks whose first line is not purely numeric keep it verbatim.
    /// All other lines are passed through unchanged.
    pub fn renumber<S: AsRef<str>>(blocks: &[S]) -> Vec<String> {
        let mut relabelled = 0;

        let renumbered: Vec<String> = blocks
            .iter()
            .enumerate()
            .map(|(j, block)| {
                let position = (j + 1).to_string();
                let mut lines: Vec<&str> = block.as_ref().split('\n').collect();

                if SubtitleBlock::has_numeric_index(lines[0]) {
                    lines[0] = &position;
                    relabelled += 1;
                }

                lines.join("\n")
            })
            .collect();

        debug!("Renumbering: {} of {} blocks relabelled", relabelled, blocks.len());

        renumbered
    }
}

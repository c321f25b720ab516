use std::fmt;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

// @module: SRT block model and document splitting

// @const: Blank-line delimiter between blocks
pub const BLOCK_DELIMITER: &str = "\n\n";

// @const: Non-Nd characters whose Unicode numeric type is Digit
// (superscripts, subscripts, circled and parenthesized digits, ...)
const DIGIT_RANGES: &[(char, char)] = &[
    ('\u{00B2}', '\u{00B3}'),
    ('\u{00B9}', '\u{00B9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19DA}', '\u{19DA}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24EA}', '\u{24EA}'),
    ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'),
    ('\u{2776}', '\u{277E}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278A}', '\u{2792}'),
    ('\u{10A40}', '\u{10A43}'),
    ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'),
    ('\u{1E8C7}', '\u{1E8CF}'),
    ('\u{1F100}', '\u{1F10A}'),
];

// @struct: One raw subtitle block with a three-part view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock<'a> {
    // @field: Block exactly as it appeared in the document
    raw: &'a str,

    // @field: First line (source sequence number)
    index: &'a str,

    // @field: Second line (opaque timing range)
    timing: &'a str,

    // @field: Everything after the second line break, untrimmed
    text: &'a str,
}

impl<'a> SubtitleBlock<'a> {
    /// Split a raw block on its first two line breaks.
    ///
    /// Returns `None` for malformed blocks, i.e. blocks that do not yield
    /// an index, a timing and a text part.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.splitn(3, '\n');
        let index = parts.next()?;
        let timing = parts.next()?;
        let text = parts.next()?;

        Some(SubtitleBlock {
            raw,
            index,
            timing,
            text,
        })
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn index(&self) -> &'a str {
        self.index
    }

    pub fn timing(&self) -> &'a str {
        self.timing
    }

    /// Text lines joined by their original line breaks
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Trimmed text used to compare neighbouring blocks
    pub fn dedup_key(&self) -> &'a str {
        self.text.trim()
    }

    /// Whether a line is a pure sequence number.
    ///
    /// Every char must be a Unicode digit: any decimal digit (`1`, `١`, `１`)
    /// or a digit form such as `²` or `①`. An empty line is not numeric.
    pub fn has_numeric_index(line: &str) -> bool {
        !line.is_empty() && line.chars().all(is_digit_char)
    }
}

fn is_digit_char(c: char) -> bool {
    if c.is_ascii_digit() || matches!(c.general_category(), GeneralCategory::DecimalNumber) {
        return true;
    }
    DIGIT_RANGES.iter().any(|&(start, end)| (start..=end).contains(&c))
}

impl fmt::Display for SubtitleBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Split a whole document into raw blocks.
///
/// The content is trimmed first, then cut on blank lines. Empty segments
/// (from runs of three or more line breaks) are discarded, so empty or
/// whitespace-only input yields no blocks.
pub fn split_blocks(content: &str) -> Vec<&str> {
    content
        .trim()
        .split(BLOCK_DELIMITER)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Serialize blocks back into a document, one blank line between blocks
pub fn join_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    let mut output = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            output.push_str(BLOCK_DELIMITER);
        }
        output.push_str(block.as_ref());
    }
    output
}

/// Convert CRLF and lone CR line endings to LF
pub fn normalize_line_endings(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

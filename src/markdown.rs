//! Raw Markdown source and the text-scanning queries run against it.
//!
//! Nothing here parses Markdown. A [`MarkdownDocument`] is the file contents
//! held verbatim, and every query is a line-oriented scan over that text:
//!
//! - **Title**: the first line that starts with `"# "`.
//! - **Images**: alphanumeric runs immediately followed by `.png` or `.jpg`.
//!
//! The image scan is a heuristic. It does not check that the files exist, and
//! a URL such as `https://example.com/img/cake.png?w=2` still yields
//! `cake.png` because only the run directly before the extension counts.

use std::collections::BTreeSet;
use std::fmt;

/// Extensions recognized by [`MarkdownDocument::images`].
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg"];

/// Prefix marking a top-level heading line.
const HEADING_PREFIX: &str = "# ";

/// Raw Markdown text, never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    text: String,
}

impl MarkdownDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, unchanged.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text of the first `# heading` line, trimmed.
    ///
    /// A line counts only when its first two characters are `"# "`, so
    /// indented headings and `## subheadings` are ignored. Heading lines with
    /// nothing after the marker are skipped.
    pub fn title(&self) -> Option<&str> {
        self.text
            .lines()
            .filter_map(|line| line.strip_prefix(HEADING_PREFIX))
            .map(str::trim)
            .find(|title| !title.is_empty())
    }

    /// Image filenames referenced anywhere in the text.
    ///
    /// Every occurrence of every extension on a line is considered, so a line
    /// mentioning both `a.png` and `b.jpg` contributes both.
    pub fn images(&self) -> BTreeSet<String> {
        let mut images = BTreeSet::new();

        for line in self.text.lines() {
            if !IMAGE_EXTENSIONS.iter().any(|ext| line.contains(ext)) {
                continue;
            }
            for ext in IMAGE_EXTENSIONS {
                for (ext_start, _) in line.match_indices(ext) {
                    if let Some(name) = filename_ending_at(line, ext_start, ext.len()) {
                        images.insert(name.to_string());
                    }
                }
            }
        }

        images
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for MarkdownDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Slice out `<alnum run><ext>` where the extension starts at `ext_start`.
///
/// Walks backward from `ext_start` over alphanumeric characters, stopping at
/// the start of the line. Returns `None` when the run is empty.
fn filename_ending_at(line: &str, ext_start: usize, ext_len: usize) -> Option<&str> {
    let before = &line[..ext_start];
    let run_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric())
        .last()
        .map(|(idx, _)| idx)?;
    Some(&line[run_start..ext_start + ext_len])
}

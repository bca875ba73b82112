//! Line normalizer and node classifier for indentation-encoded tree exports.
//!
//! Exports look like:
//!
//! ```text
//! |--- Addicted_Score <= 5.50
//! |   |--- class: 0
//! |--- Addicted_Score >  5.50
//! |   |--- class: 1
//! ```
//!
//! Depth is inferred from the run of marker characters at the start of each
//! line; everything after the marker/fill prefix is node content.

use itertools::Itertools;
use regex::Regex;

/// Character set used to decode the textual nesting prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Character counted to derive depth.
    pub marker: char,
    /// Filler characters stripped alongside markers and whitespace.
    pub fill: Vec<char>,
    /// Case-insensitive tokens that mark a leaf line (`class: 3`).
    pub keywords: Vec<String>,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            marker: '|',
            fill: vec!['-'],
            // The exporter emits localized labels in some deployments.
            keywords: vec!["class".into(), "clase".into()],
        }
    }
}

/// One normalized line: inferred depth plus stripped content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub depth: usize,
    pub content: String,
}

/// Split raw export text into depth-annotated lines.
///
/// Depth = (markers in the leading marker/fill/whitespace run) - 1, floored
/// at 0, so unindented lines land at the top level. Lines that are empty
/// after stripping are dropped.
pub fn scan_lines(text: &str, encoding: &Encoding) -> Vec<RawLine> {
    text.lines()
        .filter_map(|line| normalize_line(line, encoding))
        .collect()
}

fn normalize_line(line: &str, encoding: &Encoding) -> Option<RawLine> {
    let mut markers = 0usize;
    let mut content_start = 0usize;

    for (pos, ch) in line.char_indices() {
        if ch == encoding.marker {
            markers += 1;
        } else if !encoding.fill.contains(&ch) && !ch.is_whitespace() {
            content_start = pos;
            break;
        }
        content_start = pos + ch.len_utf8();
    }

    let content = line[content_start..].trim();
    if content.is_empty() {
        return None;
    }

    Some(RawLine {
        depth: markers.saturating_sub(1),
        content: content.to_string(),
    })
}

/// Classifier output: what kind of node a line denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    /// A branching condition, children still to be attached.
    Condition(String),
    /// A terminal class assignment.
    Class(i64),
}

/// Decides whether stripped line content denotes a leaf or a decision.
#[derive(Debug)]
pub struct Classifier {
    label_regex: Regex,
    digits_regex: Regex,
}

impl Classifier {
    pub fn new(encoding: &Encoding) -> Self {
        let alternatives = encoding
            .keywords
            .iter()
            .map(|kw| regex::escape(kw))
            .join("|");
        Self {
            // keyword, optional whitespace, colon; the class integer may sit
            // anywhere after that
            label_regex: Regex::new(&format!(r"(?i)^(?:{})\s*:", alternatives))
                .expect("class label pattern"),
            digits_regex: Regex::new(r"\d+").expect("digit pattern"),
        }
    }

    /// Classify stripped content. Empty content yields nothing.
    ///
    /// Leaf lines without a parsable integer fall back to class 0 rather
    /// than failing.
    pub fn classify(&self, content: &str) -> Option<NodePayload> {
        if content.is_empty() {
            return None;
        }
        if self.label_regex.is_match(content) {
            let class_id = self
                .digits_regex
                .find(content)
                .and_then(|m| m.as_str().parse::<i64>().ok())
                .unwrap_or(0);
            return Some(NodePayload::Class(class_id));
        }
        Some(NodePayload::Condition(content.to_string()))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Encoding::default())
    }
}

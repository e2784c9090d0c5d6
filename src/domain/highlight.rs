//! Keyword highlighting
//!
//! Every case-insensitive occurrence of a keyword is marked while the original
//! casing and all other text are kept as-is. Keywords are tried in list order and
//! the first keyword to claim a span keeps it; later matches overlapping a claimed
//! span are dropped.

use std::fmt;
use std::ops::Range;

use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

pub const DEFAULT_KEYWORDS: [&str; 11] = [
    "board",
    "director",
    "governance",
    "ethic",
    "moral",
    "virtue",
    "virtuous",
    "integrity",
    "utilitarian",
    "values",
    "decision-making",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted {
    segments: Vec<Segment>,
}

impl Highlighted {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.segments.iter().filter(|s| s.emphasized).count()
    }

    /// Original text without markers
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn to_marked(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.emphasized {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }
}

impl fmt::Display for Highlighted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_marked(MARK_OPEN, MARK_CLOSE))
    }
}

/// Remove `<mark>`/`</mark>` pairs from marked text
pub fn strip_marks(marked: &str) -> String {
    marked.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl Highlighter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = keywords
            .into_iter()
            .filter(|k| !k.as_ref().is_empty())
            .filter_map(|k| {
                RegexBuilder::new(&regex::escape(k.as_ref()))
                    .case_insensitive(true)
                    .build()
                    .inspect_err(|e| tracing::warn!("Skipping keyword {:?}: {e}", k.as_ref()))
                    .ok()
            })
            .collect();
        Self { patterns }
    }

    pub fn keyword_count(&self) -> usize {
        self.patterns.len()
    }

    /// Highlight `text`; `None` yields an empty result
    pub fn highlight(&self, text: Option<&str>) -> Highlighted {
        let Some(text) = text else {
            return Highlighted::default();
        };
        if text.is_empty() {
            return Highlighted::default();
        }

        let mut claimed: Vec<Range<usize>> = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                let span = m.range();
                if span.is_empty() {
                    continue;
                }
                if claimed
                    .iter()
                    .all(|c| span.end <= c.start || span.start >= c.end)
                {
                    claimed.push(span);
                }
            }
        }
        claimed.sort_by_key(|r| r.start);

        let mut segments = Vec::with_capacity(claimed.len() * 2 + 1);
        let mut pos = 0;
        for span in claimed {
            if span.start > pos {
                segments.push(Segment {
                    text: text[pos..span.start].to_string(),
                    emphasized: false,
                });
            }
            segments.push(Segment {
                text: text[span.clone()].to_string(),
                emphasized: true,
            });
            pos = span.end;
        }
        if pos < text.len() {
            segments.push(Segment {
                text: text[pos..].to_string(),
                emphasized: false,
            });
        }
        Highlighted { segments }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_two_keywords_marked_independently() {
        let h = Highlighter::new(["board", "governance"]);
        let out = h.highlight(Some("Board governance matters"));
        assert_eq!(
            out.to_string(),
            "<mark>Board</mark> <mark>governance</mark> matters"
        );
        assert_eq!(out.match_count(), 2);
    }

    #[test]
    fn test_earlier_keyword_wins_overlap() {
        let h = Highlighter::new(["virtue", "virtuous", "tuo"]);
        // "virtuous" does not contain "virtue", so the second keyword claims it
        assert_eq!(
            h.highlight(Some("A virtuous virtue")).to_string(),
            "A <mark>virtuous</mark> <mark>virtue</mark>"
        );

        let h = Highlighter::new(["ethic", "ethics"]);
        assert_eq!(
            h.highlight(Some("Ethics")).to_string(),
            "<mark>Ethic</mark>s"
        );
    }

    #[test]
    fn test_no_double_wrapping() {
        let h = Highlighter::new(["board", "boar", "oard"]);
        let out = h.highlight(Some("board"));
        assert_eq!(out.to_string(), "<mark>board</mark>");
    }

    #[rstest]
    #[case("")]
    #[case("Nothing relevant here.")]
    #[case("Corporate finance and tax policy")]
    fn test_identity_without_keywords(#[case] text: &str) {
        let h = Highlighter::default();
        let out = h.highlight(Some(text));
        assert_eq!(out.to_string(), text);
        assert_eq!(out.match_count(), 0);
    }

    #[rstest]
    #[case("Board directors and their Ethical values in decision-making.")]
    #[case("MORAL virtue; Integrity; utilitarian views")]
    #[case("Ünïcode bøard — governance")]
    fn test_stripping_marks_round_trips(#[case] text: &str) {
        let h = Highlighter::default();
        let out = h.highlight(Some(text));
        assert_eq!(strip_marks(&out.to_string()), text);
        assert_eq!(out.plain_text(), text);
    }

    #[test]
    fn test_absent_text() {
        let h = Highlighter::default();
        assert!(h.highlight(None).is_empty());
        assert_eq!(h.highlight(None).to_string(), "");
    }

    #[test]
    fn test_keyword_with_regex_metacharacters() {
        let h = Highlighter::new(["decision-making", "c++"]);
        assert_eq!(
            h.highlight(Some("Decision-Making in C++")).to_string(),
            "<mark>Decision-Making</mark> in <mark>C++</mark>"
        );
    }

    #[test]
    fn test_empty_keywords_are_ignored() {
        let h = Highlighter::new(["", "board"]);
        assert_eq!(h.keyword_count(), 1);
        assert_eq!(h.highlight(Some("Board")).to_string(), "<mark>Board</mark>");
    }

    #[test]
    fn test_default_keywords() {
        assert_eq!(Highlighter::default().keyword_count(), 11);
    }
}

//! Markdown style tagging for syntax highlighting
//!
//! Tags are recomputed from scratch on every call. Line tags (headings,
//! metadata lines, list items) are decided per line; inline tags are found by
//! scanning the whole document once per tag kind in priority order, with
//! lower-priority kinds dropping any candidate that starts inside a range
//! already claimed by a kind they exclude.

use crate::domain::position::CharCounter;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::OnceLock;

/// Style classification produced by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkdownTag {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    /// `% ` metadata line
    Info,
    List,
    BoldItalic,
    /// `#word` marker
    Hashtag,
    Bold,
    Italic,
    Code,
    Link,
}

impl MarkdownTag {
    pub const ALL: [MarkdownTag; 13] = [
        MarkdownTag::Heading1,
        MarkdownTag::Heading2,
        MarkdownTag::Heading3,
        MarkdownTag::Heading4,
        MarkdownTag::Heading5,
        MarkdownTag::Info,
        MarkdownTag::List,
        MarkdownTag::BoldItalic,
        MarkdownTag::Hashtag,
        MarkdownTag::Bold,
        MarkdownTag::Italic,
        MarkdownTag::Code,
        MarkdownTag::Link,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MarkdownTag::Heading1 => "h1",
            MarkdownTag::Heading2 => "h2",
            MarkdownTag::Heading3 => "h3",
            MarkdownTag::Heading4 => "h4",
            MarkdownTag::Heading5 => "h5",
            MarkdownTag::Info => "info",
            MarkdownTag::List => "list",
            MarkdownTag::BoldItalic => "bold_italic",
            MarkdownTag::Hashtag => "tag",
            MarkdownTag::Bold => "bold",
            MarkdownTag::Italic => "italic",
            MarkdownTag::Code => "code",
            MarkdownTag::Link => "link",
        }
    }

    pub fn heading(level: u8) -> Option<MarkdownTag> {
        match level {
            1 => Some(MarkdownTag::Heading1),
            2 => Some(MarkdownTag::Heading2),
            3 => Some(MarkdownTag::Heading3),
            4 => Some(MarkdownTag::Heading4),
            5 => Some(MarkdownTag::Heading5),
            _ => None,
        }
    }
}

impl fmt::Display for MarkdownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkdownTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkdownTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| format!("Unknown tag: {}", s))
    }
}

/// One tagged character range, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagAssignment {
    pub tag: MarkdownTag,
    pub start: usize,
    pub end: usize,
}

/// Which optional tag kinds are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggerOptions {
    /// Tag `% ` metadata lines as `info`
    pub metadata_lines: bool,
    /// Tag `#word` markers as `tag`
    pub hashtags: bool,
}

impl Default for TaggerOptions {
    fn default() -> Self {
        TaggerOptions {
            metadata_lines: true,
            hashtags: true,
        }
    }
}

struct InlineRule {
    tag: MarkdownTag,
    regex: Regex,
    excludes: &'static [MarkdownTag],
}

/// Most specific heading prefix first
fn line_rules() -> &'static [(Regex, MarkdownTag)] {
    static RULES: OnceLock<Vec<(Regex, MarkdownTag)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"^#####\s", MarkdownTag::Heading5),
            (r"^####\s", MarkdownTag::Heading4),
            (r"^###\s", MarkdownTag::Heading3),
            (r"^##\s", MarkdownTag::Heading2),
            (r"^#\s", MarkdownTag::Heading1),
            (r"^%\s", MarkdownTag::Info),
        ]
        .into_iter()
        .map(|(pattern, tag)| (Regex::new(pattern).expect("valid line pattern"), tag))
        .collect()
    })
}

fn list_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[*\-+]\s").expect("valid list pattern"))
}

/// The `#word` token is group 1; the trailing whitespace is not part of the tag
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(#[\w-]+)(?:\s|$)").expect("valid hashtag pattern"))
}

/// Emphasis, code and link rules in priority order
fn inline_rules() -> &'static [InlineRule] {
    static RULES: OnceLock<Vec<InlineRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let rule =
            |tag: MarkdownTag, pattern: &str, excludes: &'static [MarkdownTag]| InlineRule {
                tag,
                regex: Regex::new(pattern).expect("valid inline pattern"),
                excludes,
            };
        vec![
            rule(MarkdownTag::BoldItalic, r"\*\*\*(.+?)\*\*\*", &[]),
            rule(
                MarkdownTag::Bold,
                r"\*\*(.+?)\*\*",
                &[MarkdownTag::BoldItalic],
            ),
            rule(
                MarkdownTag::Italic,
                r"\*(.+?)\*",
                &[MarkdownTag::Bold, MarkdownTag::BoldItalic],
            ),
            rule(MarkdownTag::Code, r"`(.+?)`", &[]),
            rule(MarkdownTag::Link, r"\[(.+?)\]\((.+?)\)", &[]),
        ]
    })
}

/// Byte ranges accepted so far, per tag kind, in ascending order
#[derive(Debug, Default)]
struct ClaimedRanges {
    ranges: HashMap<MarkdownTag, Vec<Range<usize>>>,
}

impl ClaimedRanges {
    fn claim(&mut self, tag: MarkdownTag, range: Range<usize>) {
        self.ranges.entry(tag).or_default().push(range);
    }

    fn covers(&self, tag: MarkdownTag, position: usize) -> bool {
        let Some(ranges) = self.ranges.get(&tag) else {
            return false;
        };
        let idx = ranges.partition_point(|range| range.start <= position);
        idx > 0 && position < ranges[idx - 1].end
    }

    fn any_covers(&self, tags: &[MarkdownTag], position: usize) -> bool {
        tags.iter().any(|tag| self.covers(*tag, position))
    }
}

/// Computes style tags for a document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownTagger {
    options: TaggerOptions,
}

impl MarkdownTagger {
    pub fn new(options: TaggerOptions) -> Self {
        MarkdownTagger { options }
    }

    pub fn options(&self) -> TaggerOptions {
        self.options
    }

    /// All tag assignments for `text`, ordered by start offset
    pub fn compute(&self, text: &str) -> Vec<TagAssignment> {
        let mut assignments = Vec::new();

        self.tag_lines(text, &mut assignments);

        let mut claimed = ClaimedRanges::default();

        // Bold-italic has the highest priority; hashtags are scanned right
        // after it and neither exclude nor are excluded by emphasis.
        for (idx, rule) in inline_rules().iter().enumerate() {
            Self::tag_spans(text, rule, &mut claimed, &mut assignments);
            if idx == 0 && self.options.hashtags {
                Self::tag_hashtags(text, &mut assignments);
            }
        }

        assignments.sort_by_key(|assignment| assignment.start);
        assignments
    }

    fn tag_lines(&self, text: &str, assignments: &mut Vec<TagAssignment>) {
        let mut offset = 0usize;

        for line in text.split('\n') {
            let length = line.chars().count();
            let range = (offset, offset + length);

            let line_tag = line_rules()
                .iter()
                .filter(|(_, tag)| self.options.metadata_lines || *tag != MarkdownTag::Info)
                .find(|(regex, _)| regex.is_match(line))
                .map(|(_, tag)| *tag);
            if let Some(tag) = line_tag {
                assignments.push(TagAssignment {
                    tag,
                    start: range.0,
                    end: range.1,
                });
            }

            if list_regex().is_match(line) {
                assignments.push(TagAssignment {
                    tag: MarkdownTag::List,
                    start: range.0,
                    end: range.1,
                });
            }

            offset += length + 1;
        }
    }

    fn tag_spans(
        text: &str,
        rule: &InlineRule,
        claimed: &mut ClaimedRanges,
        assignments: &mut Vec<TagAssignment>,
    ) {
        let mut counter = CharCounter::new(text);

        for found in rule.regex.find_iter(text) {
            if claimed.any_covers(rule.excludes, found.start()) {
                continue;
            }
            claimed.claim(rule.tag, found.range());
            assignments.push(TagAssignment {
                tag: rule.tag,
                start: counter.char_offset(found.start()),
                end: counter.char_offset(found.end()),
            });
        }
    }

    fn tag_hashtags(text: &str, assignments: &mut Vec<TagAssignment>) {
        let mut counter = CharCounter::new(text);

        for captures in hashtag_regex().captures_iter(text) {
            let Some(token) = captures.get(1) else {
                continue;
            };
            assignments.push(TagAssignment {
                tag: MarkdownTag::Hashtag,
                start: counter.char_offset(token.start()),
                end: counter.char_offset(token.end()),
            });
        }
    }
}

/// Tags for `text` with every optional kind enabled
pub fn compute_tags(text: &str) -> Vec<TagAssignment> {
    MarkdownTagger::default().compute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(text: &str, tag: MarkdownTag) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        compute_tags(text)
            .into_iter()
            .filter(|a| a.tag == tag)
            .map(|a| chars[a.start..a.end].iter().collect())
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_tags() {
        assert!(compute_tags("").is_empty());
    }

    #[test]
    fn test_heading_levels() {
        let text = "# One\n## Two\n### Three\n#### Four\n##### Five";
        assert_eq!(tagged(text, MarkdownTag::Heading1), vec!["# One"]);
        assert_eq!(tagged(text, MarkdownTag::Heading2), vec!["## Two"]);
        assert_eq!(tagged(text, MarkdownTag::Heading3), vec!["### Three"]);
        assert_eq!(tagged(text, MarkdownTag::Heading4), vec!["#### Four"]);
        assert_eq!(tagged(text, MarkdownTag::Heading5), vec!["##### Five"]);
    }

    #[test]
    fn test_level_five_heading_has_only_one_tag() {
        let tags = compute_tags("##### Title");
        assert_eq!(
            tags,
            vec![TagAssignment {
                tag: MarkdownTag::Heading5,
                start: 0,
                end: 11
            }]
        );
    }

    #[test]
    fn test_six_hashes_is_not_a_heading() {
        assert!(compute_tags("###### Six").is_empty());
        assert!(compute_tags("#NoSpace").iter().all(|a| a.tag == MarkdownTag::Hashtag));
    }

    #[test]
    fn test_list_is_independent_of_headings() {
        assert_eq!(tagged("* item", MarkdownTag::List), vec!["* item"]);
        assert_eq!(tagged("- item", MarkdownTag::List), vec!["- item"]);
        assert_eq!(tagged("+ item", MarkdownTag::List), vec!["+ item"]);

        let heading = compute_tags("# item");
        assert_eq!(heading.len(), 1);
        assert_eq!(heading[0].tag, MarkdownTag::Heading1);
    }

    #[test]
    fn test_metadata_lines() {
        let text = "% Title\n% Author: X\nBody";
        assert_eq!(
            tagged(text, MarkdownTag::Info),
            vec!["% Title", "% Author: X"]
        );

        let tagger = MarkdownTagger::new(TaggerOptions {
            metadata_lines: false,
            hashtags: true,
        });
        assert!(tagger.compute(text).is_empty());
    }

    #[test]
    fn test_emphasis_exclusion() {
        let text = "***x*** and **y**";
        assert_eq!(tagged(text, MarkdownTag::BoldItalic), vec!["***x***"]);
        assert_eq!(tagged(text, MarkdownTag::Bold), vec!["**y**"]);
        assert!(tagged(text, MarkdownTag::Italic).is_empty());
    }

    #[test]
    fn test_italic_outside_bold() {
        let text = "*a* then **b**\n*c*";
        assert_eq!(tagged(text, MarkdownTag::Italic), vec!["*a*", "*c*"]);
        assert_eq!(tagged(text, MarkdownTag::Bold), vec!["**b**"]);
    }

    #[test]
    fn test_rejected_candidate_is_dropped_whole() {
        // "* *" starts inside the bold range and swallows the star before "c"
        let text = "**b** *c*";
        assert_eq!(tagged(text, MarkdownTag::Bold), vec!["**b**"]);
        assert!(tagged(text, MarkdownTag::Italic).is_empty());
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert!(tagged("*open\nclose*", MarkdownTag::Italic).is_empty());
    }

    #[test]
    fn test_code_and_links() {
        let text = "Run `cargo build` or see [docs](https://example.com).";
        assert_eq!(tagged(text, MarkdownTag::Code), vec!["`cargo build`"]);
        assert_eq!(
            tagged(text, MarkdownTag::Link),
            vec!["[docs](https://example.com)"]
        );
    }

    #[test]
    fn test_code_is_not_excluded_by_emphasis() {
        let text = "**`x`**";
        assert_eq!(tagged(text, MarkdownTag::Bold), vec!["**`x`**"]);
        assert_eq!(tagged(text, MarkdownTag::Code), vec!["`x`"]);
    }

    #[test]
    fn test_hashtags() {
        let text = "Notes #work and #team_ops-1\n#последний";
        assert_eq!(
            tagged(text, MarkdownTag::Hashtag),
            vec!["#work", "#team_ops-1", "#последний"]
        );

        let tagger = MarkdownTagger::new(TaggerOptions {
            metadata_lines: true,
            hashtags: false,
        });
        assert!(tagger.compute(text).is_empty());
    }

    #[test]
    fn test_hashtag_requires_trailing_whitespace() {
        assert!(tagged("#word, next", MarkdownTag::Hashtag).is_empty());
    }

    #[test]
    fn test_offsets_are_characters() {
        let text = "Привет\n**мир**";
        let tags = compute_tags(text);
        assert_eq!(
            tags,
            vec![TagAssignment {
                tag: MarkdownTag::Bold,
                start: 7,
                end: 14
            }]
        );
    }

    #[test]
    fn test_results_sorted_by_start() {
        let text = "# Head *x*\n* item `c`";
        let starts: Vec<usize> = compute_tags(text).iter().map(|a| a.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let text = "# T\n***a*** **b** *c* `d` [e](f) #g\n";
        assert_eq!(compute_tags(text), compute_tags(text));
    }

    #[test]
    fn test_tag_names_round_trip() {
        for tag in MarkdownTag::ALL {
            assert_eq!(tag.name().parse::<MarkdownTag>().unwrap(), tag);
        }
        assert!("current_line".parse::<MarkdownTag>().is_err());
    }
}

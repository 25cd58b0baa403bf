//! Ordered replacement rule tables for text correction
//!
//! Every rule runs over the output of the rule before it, so the order of the
//! standard table decides the result (e.g. `..` becomes `...` before the run of
//! dots collapses into a single `…`).

use regex::{NoExpand, Regex};
use std::sync::OnceLock;

/// Dash, guillemet and punctuation spacing fixes, applied as plain substring replaces
const LITERAL_RULES: &[(&str, &str)] = &[
    (" -- ", " — "),
    (" »", "»"),
    ("« ", "«"),
    ("–", "—"),
    (" - ", " — "),
    (" -", " — "),
    ("- ", " — "),
    (". .", ".."),
    ("..", "..."),
    (" .", "."),
    (" ,", ","),
    (" !", "!"),
    (" ?", "?"),
    (" …", "…"),
    ("* ", "*"),
    ("_ ", "_"),
    (" \".\n", "\".\n"),
    (". \"\n", ".\"\n"),
    (" \"!\n", "\"!\n"),
    ("! \"\n", "!\"\n"),
    (" \"?\n", "\"?\n"),
    ("? \"\n", "?\"\n"),
    (" *", "*"),
    (", #", " #"),
    (".…", "…"),
];

/// Line-break cleanup after the regex pass
const CLEANUP_RULES: &[(&str, &str)] = &[
    (" \n", "\n"),
    ("\n #", "\n#"),
    ("\n %", "\n%"),
    ("\n\n%", "\n%"),
];

/// A single find/replace step
#[derive(Debug, Clone)]
pub enum ReplacementRule {
    /// Global, non-overlapping, left-to-right substring replace
    Literal { from: String, to: String },
    /// Regex replace; the replacement is inserted verbatim
    Pattern { regex: Regex, to: String },
    /// Rewrites that need look-around context
    Transform {
        name: &'static str,
        apply: fn(&str) -> String,
    },
}

impl ReplacementRule {
    pub fn literal(from: &str, to: &str) -> Self {
        ReplacementRule::Literal {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn pattern(pattern: &str, to: &str) -> Result<Self, regex::Error> {
        Ok(ReplacementRule::Pattern {
            regex: Regex::new(pattern)?,
            to: to.to_string(),
        })
    }

    pub fn transform(name: &'static str, apply: fn(&str) -> String) -> Self {
        ReplacementRule::Transform { name, apply }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            ReplacementRule::Literal { from, to } => text.replace(from.as_str(), to),
            ReplacementRule::Pattern { regex, to } => {
                regex.replace_all(text, NoExpand(to)).into_owned()
            }
            ReplacementRule::Transform { apply, .. } => apply(text),
        }
    }

    /// Short label for logging
    pub fn describe(&self) -> String {
        match self {
            ReplacementRule::Literal { from, to } => format!("{:?} -> {:?}", from, to),
            ReplacementRule::Pattern { regex, to } => {
                format!("/{}/ -> {:?}", regex.as_str(), to)
            }
            ReplacementRule::Transform { name, .. } => name.to_string(),
        }
    }
}

/// Ordered collection of replacement rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ReplacementRule>) -> Self {
        RuleSet { rules }
    }

    /// The built-in correction table
    pub fn standard() -> Self {
        static STANDARD: OnceLock<RuleSet> = OnceLock::new();
        STANDARD.get_or_init(build_standard).clone()
    }

    pub fn push(&mut self, rule: ReplacementRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order over the cumulative result
    pub fn apply(&self, text: &str) -> String {
        let mut content = text.to_string();
        for rule in &self.rules {
            let next = rule.apply(&content);
            if next != content {
                log::trace!("rule {} changed the text", rule.describe());
            }
            content = next;
        }
        content
    }
}

fn build_standard() -> RuleSet {
    let mut rules: Vec<ReplacementRule> = LITERAL_RULES
        .iter()
        .map(|(from, to)| ReplacementRule::literal(from, to))
        .collect();

    let pattern = |p: &str, to: &str| {
        ReplacementRule::pattern(p, to).expect("standard correction pattern must compile")
    };
    rules.push(pattern(r"\.{2,}", "…"));
    rules.push(pattern("…{2,}", "…"));
    rules.push(pattern(" {2,}", " "));
    rules.push(ReplacementRule::transform(
        "space after ellipsis",
        space_after_ellipsis,
    ));
    rules.push(pattern(r"(?m)^\. ", ""));
    rules.push(ReplacementRule::transform(
        "paragraph breaks",
        split_paragraphs,
    ));

    rules.extend(
        CLEANUP_RULES
            .iter()
            .map(|(from, to)| ReplacementRule::literal(from, to)),
    );

    RuleSet::new(rules)
}

/// Insert a space after every `…` not already followed by whitespace
pub fn space_after_ellipsis(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '…' && !chars.peek().is_some_and(|next| next.is_whitespace()) {
            out.push(' ');
        }
    }
    out
}

/// Turn every lone `\n` into a blank-line paragraph break, unless the next
/// line starts with `#` or `*`
pub fn split_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut previous = None;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '\n'
            && previous != Some('\n')
            && !matches!(chars.peek(), Some('\n' | '#' | '*'))
        {
            out.push('\n');
        }
        previous = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_ordered() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.len(),
            LITERAL_RULES.len() + 6 + CLEANUP_RULES.len()
        );
        match &rules.rules()[0] {
            ReplacementRule::Literal { from, .. } => assert_eq!(from, " -- "),
            other => panic!("unexpected first rule: {:?}", other),
        }
    }

    #[test]
    fn test_literal_rules_chain() {
        let rules = RuleSet::new(vec![
            ReplacementRule::literal("..", "..."),
            ReplacementRule::literal("...", "…"),
        ]);
        assert_eq!(rules.apply("a..b"), "a…b");
    }

    #[test]
    fn test_pattern_replacement_is_literal() {
        let rule = ReplacementRule::pattern("x+", "$1").unwrap();
        assert_eq!(rule.apply("axxb"), "a$1b");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        assert!(ReplacementRule::pattern("(", "").is_err());
    }

    #[test]
    fn test_space_after_ellipsis() {
        assert_eq!(space_after_ellipsis("a…b"), "a… b");
        assert_eq!(space_after_ellipsis("a… b"), "a… b");
        assert_eq!(space_after_ellipsis("a…\nb"), "a…\nb");
        assert_eq!(space_after_ellipsis("end…"), "end… ");
    }

    #[test]
    fn test_split_paragraphs() {
        assert_eq!(split_paragraphs("a\nb"), "a\n\nb");
        assert_eq!(split_paragraphs("a\n\nb"), "a\n\nb");
        assert_eq!(split_paragraphs("a\n# h"), "a\n# h");
        assert_eq!(split_paragraphs("a\n* item"), "a\n* item");
        assert_eq!(split_paragraphs("a\n\n\nb"), "a\n\n\nb");
        assert_eq!(split_paragraphs("a\n"), "a\n\n");
    }

    #[test]
    fn test_empty_rule_set_is_identity() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert_eq!(rules.apply("  keep  me "), "  keep  me ");
    }
}

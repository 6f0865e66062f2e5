//! Step patterns
//!
//! The step vocabulary as an explicit enumerated set rather than ad-hoc
//! regex dispatch: each [`PatternKind`] is one tagged variant with a
//! fixed capture schema, paired at registration time with a compiled
//! match expression. The repeat-count group deliberately matches any
//! token (`\S+`) so a non-numeric count reaches count validation in the
//! interpreter instead of silently failing to match the step.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The step vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Tap each `view` in the table, N times over
    Tap,
    /// Long-press each `view` in the table, N times over
    LongTap,
    /// Drag `first_view` onto `second_view` per row, N times over
    DragAndDrop,
    /// Pan left then right across a quoted view, N times over
    Swipe,
    /// Pinch in then out on a quoted view, N times over
    PinchAndSpread,
    /// Re-dispatch a quoted step, N times over, with a settle delay
    Nested,
    /// Enter then clear text in a quoted field, N times over
    TypeText,
    /// Query each `view` in the table by id, N times over
    FindById,
    /// Query each `view` in the table by content description, N times over
    FindByDescription,
    /// Query each `view_content` in the table by text, N times over
    FindByContent,
    /// Press the device back button once
    GoBack,
}

impl PatternKind {
    /// Canonical step template, used in error messages.
    pub fn template(&self) -> &'static str {
        match self {
            PatternKind::Tap => "I tap <view> for N times",
            PatternKind::LongTap => "I long tap <view> for N times",
            PatternKind::DragAndDrop => "I dragndrop <first_view> to <second_view> for N times",
            PatternKind::Swipe => r#"I swipe in "view" for N times"#,
            PatternKind::PinchAndSpread => r#"I pinch and spread on "view" for N times"#,
            PatternKind::Nested => r#""step" for N times"#,
            PatternKind::TypeText => r#"I type "text" in "field" for N times"#,
            PatternKind::FindById => "I find view with id <view> for N times",
            PatternKind::FindByDescription => "I find view with description <view> for N times",
            PatternKind::FindByContent => "I find view with content <view_content> for N times",
            PatternKind::GoBack => "I go back",
        }
    }

    /// Whether this pattern takes its per-iteration arguments from a
    /// data table.
    pub fn is_table_driven(&self) -> bool {
        matches!(
            self,
            PatternKind::Tap
                | PatternKind::LongTap
                | PatternKind::DragAndDrop
                | PatternKind::FindById
                | PatternKind::FindByDescription
                | PatternKind::FindByContent
        )
    }

    /// Whether this pattern carries a repeat count.
    ///
    /// Count-less patterns execute their template exactly once.
    pub fn has_count(&self) -> bool {
        !matches!(self, PatternKind::GoBack)
    }
}

/// A registered step pattern: kind plus compiled match expression.
#[derive(Debug, Clone)]
pub struct StepPattern {
    kind: PatternKind,
    regex: Regex,
    specificity: usize,
}

impl StepPattern {
    /// Compile a pattern from its regex source.
    ///
    /// # Errors
    /// Returns the regex compilation error for an invalid source.
    pub fn new(kind: PatternKind, source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(source)?;
        let specificity = literal_len(source);
        Ok(Self {
            kind,
            regex,
            specificity,
        })
    }

    /// Pattern kind.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Length of the pattern's literal template, for most-specific-match
    /// ordering. Higher wins.
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    /// Match step text against this pattern.
    pub fn matches<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }
}

/// Regex sources for the built-in vocabulary, mirroring the original
/// step definitions.
pub(crate) const BUILTIN_PATTERNS: &[(PatternKind, &str)] = &[
    (PatternKind::Tap, r"^I tap <view> for (?P<count>\S+) times$"),
    (
        PatternKind::LongTap,
        r"^I long tap <view> for (?P<count>\S+) times$",
    ),
    (
        PatternKind::DragAndDrop,
        r"^I dragndrop <first_view> to <second_view> for (?P<count>\S+) times$",
    ),
    (
        PatternKind::Swipe,
        r#"^I swipe in "(?P<view>[^"]*)" for (?P<count>\S+) times$"#,
    ),
    (
        PatternKind::PinchAndSpread,
        r#"^I pinch and spread on "(?P<view>[^"]*)" for (?P<count>\S+) times$"#,
    ),
    (
        PatternKind::TypeText,
        r#"^I type "(?P<text>[^"]*)" in "(?P<field>[^"]*)" for (?P<count>\S+) times$"#,
    ),
    (
        PatternKind::FindById,
        r"^I find view with id <view> for (?P<count>\S+) times$",
    ),
    (
        PatternKind::FindByDescription,
        r"^I find view with description <view> for (?P<count>\S+) times$",
    ),
    (
        PatternKind::FindByContent,
        r"^I find view with content <view_content> for (?P<count>\S+) times$",
    ),
    (PatternKind::GoBack, r"^I go back$"),
    // Catch-all composite pattern; registered last and carrying the
    // shortest literal template, so it only wins when nothing more
    // specific matches.
    (
        PatternKind::Nested,
        r#"^"(?P<step>[^"]*)" for (?P<count>\S+) times$"#,
    ),
];

/// Length of the literal step template left after stripping capture
/// groups and anchors from a regex source.
fn literal_len(source: &str) -> usize {
    static GROUP: OnceLock<Regex> = OnceLock::new();
    let group = GROUP.get_or_init(|| {
        #[allow(clippy::expect_used)]
        let re = Regex::new(r"\(\?P<\w+>[^)]*\)").expect("group-stripping regex is valid");
        re
    });
    group
        .replace_all(source, "")
        .chars()
        .filter(|c| *c != '^' && *c != '$')
        .count()
}

//! Step pattern registry
//!
//! Maps incoming step text to a registered pattern. The registry is
//! built once at startup and never mutated afterwards; lookup scans all
//! patterns and picks the most specific match (longest literal template,
//! ties broken by registration order).
//!
//! # Example
//!
//! ```
//! use tapkit_steps::{PatternKind, StepRegistry};
//!
//! let registry = StepRegistry::default();
//! let matched = registry.find("I tap <view> for 3 times").unwrap();
//! assert_eq!(matched.kind(), PatternKind::Tap);
//! assert_eq!(matched.capture("count"), Some("3"));
//! ```

use regex::Captures;

use crate::pattern::{PatternKind, StepPattern, BUILTIN_PATTERNS};

/// A successful pattern lookup: the kind plus its captured groups.
pub struct StepMatch<'t> {
    kind: PatternKind,
    captures: Captures<'t>,
}

impl StepMatch<'_> {
    /// Kind of the matched pattern.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Value of a named capture group, if the pattern has it.
    pub fn capture(&self, name: &str) -> Option<&str> {
        self.captures.name(name).map(|m| m.as_str())
    }
}

/// Registry of step patterns.
pub struct StepRegistry {
    patterns: Vec<StepPattern>,
}

impl StepRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Register a pattern.
    pub fn register(&mut self, pattern: StepPattern) {
        self.patterns.push(pattern);
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find the most specific pattern matching the step text.
    ///
    /// Returns `None` when no registered pattern matches.
    pub fn find<'t>(&self, text: &'t str) -> Option<StepMatch<'t>> {
        let mut best: Option<(usize, StepMatch<'t>)> = None;

        for pattern in &self.patterns {
            let Some(captures) = pattern.matches(text) else {
                continue;
            };
            // Strictly greater keeps the earliest registration on ties
            let better = match &best {
                Some((specificity, _)) => pattern.specificity() > *specificity,
                None => true,
            };
            if better {
                best = Some((
                    pattern.specificity(),
                    StepMatch {
                        kind: pattern.kind(),
                        captures,
                    },
                ));
            }
        }

        best.map(|(_, matched)| matched)
    }
}

impl Default for StepRegistry {
    /// Registry with the full built-in step vocabulary.
    fn default() -> Self {
        let mut registry = Self::new();
        for (kind, source) in BUILTIN_PATTERNS {
            // Sources are compile-time constants covered by tests
            if let Ok(pattern) = StepPattern::new(*kind, source) {
                registry.register(pattern);
            }
        }
        registry
    }
}

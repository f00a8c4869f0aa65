//! Resting place for [PatternTable]: the ordered list of log line shapes a parser understands.
//!
//! Every entry is a named regular expression with named capture groups, carrying a payload of the
//! caller's choosing (the `bll` crate stores the line handler there). Lines are matched against the
//! entries in insertion order and the first entry to match wins -- so more specific shapes must be
//! registered before the more general ones they overlap with.
//!
//! IMPLEMENTATION NOTE: a `RegexSet` answers, in a single pass, which entries match a line. Only the
//! winning entry then runs its (much more expensive) capturing `Regex`. See `benches/pattern_table.rs`.

use regex::{Captures, Regex, RegexBuilder, RegexSet, RegexSetBuilder};


/// Prepended to every pattern body: an optional `minutes:seconds` timestamp, surrounded by optional spaces
const LINE_PREFIX: &str = r#"^\s*(?:\d+:\d{2}\s*)?"#;
/// Appended to every pattern body
const LINE_SUFFIX: &str = r#"\s*$"#;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern '{name}' doesn't compile: {source}")]
    Invalid { name: &'static str, source: regex::Error },
    #[error("the patterns don't compile as a set: {0}")]
    InvalidSet(regex::Error),
}

/// One of the shapes of a [PatternTable]
#[derive(Debug)]
pub struct PatternEntry<T> {
    pub name: &'static str,
    pub regex: Regex,
    pub payload: T,
}

/// Immutable, ordered collection of named line patterns -- see the module docs
#[derive(Debug)]
pub struct PatternTable<T> {
    entries: Vec<PatternEntry<T>>,
    set: RegexSet,
}

impl<T> PatternTable<T> {

    /// Compiles the `(name, pattern body, payload)` triples, in order.\
    /// Bodies are anchored, made case-insensitive and tolerant to the leading timestamp of log lines.
    pub fn new<'a>(patterns: impl IntoIterator<Item=(&'static str, &'a str, T)>) -> Result<Self, PatternError> {
        let mut entries = Vec::new();
        let mut sources = Vec::new();
        for (name, body, payload) in patterns {
            let source = format!("{LINE_PREFIX}{body}{LINE_SUFFIX}");
            let regex = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .map_err(|source| PatternError::Invalid { name, source })?;
            entries.push(PatternEntry { name, regex, payload });
            sources.push(source);
        }
        let set = RegexSetBuilder::new(&sources)
            .case_insensitive(true)
            .build()
            .map_err(PatternError::InvalidSet)?;
        Ok(Self { entries, set })
    }

    /// Returns the first entry, in insertion order, matching the whole `line` -- along with its captures
    pub fn first_match<'t>(&self, line: &'t str) -> Option<(&PatternEntry<T>, Captures<'t>)> {
        let index = self.set.matches(line).iter().next()?;
        let entry = &self.entries[index];
        entry.regex.captures(line)
            .map(|captures| (entry, captures))
    }

    /// The entry names, in priority order
    pub fn names(&self) -> impl Iterator<Item=&'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

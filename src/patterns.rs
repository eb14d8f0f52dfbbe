//! # Exclude Patterns
//!
//! Serializes resolved exclusions into host exclude-pattern entries and
//! answers "is this path hidden?" for previews.
//!
//! Each resolved root-relative path `p` becomes the recursive pattern
//! `p/**`. Always-hidden names (VCS metadata, OS droppings, configured
//! extras) become `**/<name>`. The settings object maps every pattern to
//! `true`, the shape editors use for their file-exclude settings.

use std::collections::BTreeMap;

use glob::Pattern;
use serde::Serialize;

use crate::defaults::ALWAYS_HIDDEN;
use crate::error::Result;
use crate::path::{self, SEPARATOR};

/// Host exclude settings: pattern → enabled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExcludeSettings {
    patterns: BTreeMap<String, bool>,
}

impl ExcludeSettings {
    /// Build settings from resolved paths plus extra always-hidden names.
    pub fn new<S: AsRef<str>>(excluded: &[String], extra_hidden: &[S]) -> Self {
        let hidden_names = ALWAYS_HIDDEN
            .iter()
            .copied()
            .chain(extra_hidden.iter().map(|name| name.as_ref()));

        let patterns = hidden_names
            .map(|name| format!("**/{name}"))
            .chain(excluded.iter().map(|relative| format!("{relative}/**")))
            .map(|pattern| (pattern, true))
            .collect();

        Self { patterns }
    }

    /// Patterns in lexical order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pretty-printed JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decides visibility of root-relative paths under resolved exclusions
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    excluded: Vec<String>,
    hidden_names: Vec<Pattern>,
}

impl ExcludeMatcher {
    /// Fails when an extra always-hidden name is not a valid glob.
    pub fn new<S: AsRef<str>>(excluded: &[String], extra_hidden: &[S]) -> Result<Self> {
        let hidden_names = ALWAYS_HIDDEN
            .iter()
            .copied()
            .chain(extra_hidden.iter().map(|name| name.as_ref()))
            .map(Pattern::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded: excluded.to_vec(),
            hidden_names,
        })
    }

    /// True when `relative` (root-relative) would be hidden in every root.
    pub fn is_hidden(&self, relative: &str) -> bool {
        let relative = path::trim_dir_marker(relative);
        if relative.is_empty() {
            return false;
        }
        self.excluded
            .iter()
            .any(|excluded| path::is_same_or_nested(relative, excluded))
            || relative
                .split(SEPARATOR)
                .any(|segment| self.hidden_names.iter().any(|name| name.matches(segment)))
    }
}

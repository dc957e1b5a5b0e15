//! Search query and the filter predicate it drives.

use std::cell::RefCell;
use std::fmt;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// How a non-empty query is matched against item labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match (nucleo). Result order stays source order.
    Fuzzy,
}

/// The current query plus whatever is needed to evaluate it.
pub struct Filter {
    mode: FilterMode,
    query: String,
    /// Lowercased query for substring matching
    needle: String,
    /// Compiled pattern for fuzzy matching
    pattern: Option<Pattern>,
    matcher: RefCell<Matcher>,
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("mode", &self.mode)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(FilterMode::default())
    }
}

impl Filter {
    /// Create a filter with an empty query.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            query: String::new(),
            needle: String::new(),
            pattern: None,
            matcher: RefCell::new(Matcher::new(Config::DEFAULT)),
        }
    }

    /// Get the filter mode.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Get the current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a non-empty query is active.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Replace the query. Returns true if it changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.needle = query.to_lowercase();
        self.pattern = match self.mode {
            FilterMode::Fuzzy if !query.is_empty() => Some(Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )),
            _ => None,
        };
        true
    }

    /// Check whether a label passes the current query.
    ///
    /// An empty query lets everything through.
    pub fn matches(&self, label: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        match (self.mode, &self.pattern) {
            (FilterMode::Fuzzy, Some(pattern)) => {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(label, &mut buf);
                let mut matcher = self.matcher.borrow_mut();
                pattern.score(haystack, &mut matcher).is_some()
            }
            _ => label.to_lowercase().contains(&self.needle),
        }
    }
}

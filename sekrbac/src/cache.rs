use parking_lot::RwLock;
use regex::Regex;
use std::collections::HashMap;

use crate::pattern::PermissionPattern;

/// Compiled pattern cache
///
/// Hot paths check the same handful of patterns repeatedly (a list page
/// gating fifty rows on one permission), so each distinct pattern
/// string is compiled once and reused for the life of the process.
#[derive(Default)]
pub struct PatternCache(RwLock<HashMap<String, Regex>>);

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests `value` against the compiled form of `pattern`.  A pattern
    /// that fails to compile matches nothing.
    pub fn matches(&self, pattern: &str, value: &str) -> bool {
        if let Some(re) = self.0.read().get(pattern) {
            return re.is_match(value);
        }
        match PermissionPattern::new(pattern).compile() {
            Some(re) => {
                let matched = re.is_match(value);
                self.0.write()
                    .entry(pattern.to_string())
                    .or_insert(re);
                matched
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

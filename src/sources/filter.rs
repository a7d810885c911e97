//! Package name filtering.
//!
//! A [`PackageFilter`] combines the user-supplied regexps into one alternation
//! and matches it anywhere in a package name (substring search, not a full
//! match). The two constructors encode an asymmetry the commands rely on:
//! `list` with no patterns shows everything, while `checkout` with no
//! patterns is an error.

use regex::Regex;

use crate::error::{DevoutError, Result};

/// Compiled filter over package names.
#[derive(Debug, Clone)]
pub struct PackageFilter {
    regex: Option<Regex>,
}

impl PackageFilter {
    /// Build a filter that must match at least one pattern.
    ///
    /// An empty pattern list is rejected; this is the checkout path.
    pub fn any_of(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(DevoutError::EmptyPatterns);
        }
        Ok(Self {
            regex: Some(compile(patterns)?),
        })
    }

    /// Build a filter where an empty pattern list matches every name.
    ///
    /// This is the list path.
    pub fn permissive(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { regex: None });
        }
        Ok(Self {
            regex: Some(compile(patterns)?),
        })
    }

    /// Whether the filter matches anywhere in `name`.
    pub fn matches(&self, name: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(name),
            None => true,
        }
    }
}

/// Compile the alternation of the patterns, each individually parenthesized.
fn compile(patterns: &[String]) -> Result<Regex> {
    let alternation = patterns
        .iter()
        .map(|p| format!("({})", p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).map_err(|err| DevoutError::InvalidPattern {
        pattern: alternation,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn any_of_rejects_empty_pattern_list() {
        let err = PackageFilter::any_of(&[]).unwrap_err();
        assert!(matches!(err, DevoutError::EmptyPatterns));
    }

    #[test]
    fn permissive_with_no_patterns_matches_everything() {
        let filter = PackageFilter::permissive(&[]).unwrap();
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn matches_anywhere_in_the_name() {
        let filter = PackageFilter::any_of(&patterns(&["core"])).unwrap();
        assert!(filter.matches("core"));
        assert!(filter.matches("my.core.utils"));
        assert!(!filter.matches("my.cor.utils"));
    }

    #[test]
    fn alternation_matches_any_pattern() {
        let filter = PackageFilter::any_of(&patterns(&["^pkgA$", "B"])).unwrap();
        assert!(filter.matches("pkgA"));
        assert!(filter.matches("pkgB"));
        assert!(!filter.matches("pkgAx"));
        assert!(!filter.matches("pkgC"));
    }

    #[test]
    fn patterns_are_individually_grouped() {
        // Without per-pattern grouping "ab|cd" anchored at either end would
        // associate differently than "(ab)|(cd)".
        let filter = PackageFilter::any_of(&patterns(&["^a", "b$"])).unwrap();
        assert!(filter.matches("apple"));
        assert!(filter.matches("crab"));
        assert!(!filter.matches("xaxb x"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = PackageFilter::any_of(&patterns(&["("])).unwrap_err();
        assert!(matches!(err, DevoutError::InvalidPattern { .. }));
    }

    #[test]
    fn permissive_with_patterns_filters() {
        let filter = PackageFilter::permissive(&patterns(&["A"])).unwrap();
        assert!(filter.matches("pkgA"));
        assert!(!filter.matches("pkgB"));
    }
}

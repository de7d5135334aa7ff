//! Language-tag naming convention for article text files.
//!
//! Every markdown file inside an article directory must be named after the
//! language it contains: a 2-3 letter lowercase language code, optionally
//! followed by a hyphen and a 2-letter uppercase region code. Examples:
//! `en.md`, `fr-CA.md`, `zho.md`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Anchored pattern for a bare language tag (no extension).
///
/// `^[a-z]{2,3}(-[A-Z]{2})?$` — the whole base name must match, a tag
/// embedded in a longer name does not count.
static LANGUAGE_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid language tag regex: {err}"),
    }
});

/// Error returned when a string is not a valid language tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid language tag (expected e.g. 'en', 'fr-CA', 'zho')")]
pub struct LanguageTagError(String);

/// A parsed language tag: language code plus optional region code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    /// 2-3 letter lowercase language code (e.g. "en", "zho").
    language: String,
    /// Optional 2-letter uppercase region code (e.g. "CA" in "fr-CA").
    region: Option<String>,
}

impl LanguageTag {
    /// The language code portion of the tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region code portion of the tag, if present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_language_tag(s) {
            return Err(LanguageTagError(s.to_owned()));
        }
        match s.split_once('-') {
            Some((language, region)) => Ok(Self {
                language: language.to_owned(),
                region: Some(region.to_owned()),
            }),
            None => Ok(Self {
                language: s.to_owned(),
                region: None,
            }),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Check whether a base name (extension already stripped) is a language tag.
///
/// Matching is anchored: the whole string must conform, not a substring.
#[must_use]
pub fn is_language_tag(base_name: &str) -> bool {
    LANGUAGE_TAG_PATTERN.is_match(base_name)
}

//! Language Tag Parsing
//!
//! Splits locale-like strings (`en-US`, `en_US`, `en`) into a
//! language/country pair. This is deliberately not a BCP 47 parser: only
//! the first two subtags are read and nothing is validated.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A language and country pair parsed from a tag.
///
/// # Examples
///
/// ```
/// use armature_resolver::LanguageTag;
///
/// let tag = LanguageTag::parse("en_us");
/// assert_eq!(tag.language, "en");
/// assert_eq!(tag.country, "US");
/// assert_eq!(tag.to_string(), "en-US");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageTag {
    /// Primary subtag, lowercase (e.g., "en"). Empty when absent.
    pub language: String,
    /// Region subtag, uppercase (e.g., "US"). Empty when absent.
    pub country: String,
}

impl LanguageTag {
    /// Create a tag, normalizing case.
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: country.into().to_uppercase(),
        }
    }

    /// Parse a raw tag string.
    ///
    /// Splits on `-` or `_`. The first subtag becomes the language and the
    /// second the country; anything after that is dropped, so `zh-Hans-CN`
    /// yields `zh` / `HANS`.
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        Self::new(language, country)
    }

    /// Get the tag string (e.g., "en-US", or "en" without a country).
    pub fn tag(&self) -> String {
        if self.country.is_empty() {
            self.language.clone()
        } else {
            format!("{}-{}", self.language, self.country)
        }
    }

    /// Check whether a country subtag is present.
    pub fn has_country(&self) -> bool {
        !self.country.is_empty()
    }

    /// Check whether both subtags are empty.
    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.country.is_empty()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for LanguageTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Input accepted by [`parse_lang_tag`].
///
/// Callers may hold either a raw tag or a pair that was parsed earlier;
/// both go through the same entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangTagInput {
    /// No tag at all
    Absent,
    /// A raw tag string such as "en-US"
    Raw(String),
    /// An already parsed pair, passed through untouched
    Parsed(LanguageTag),
}

impl From<&str> for LangTagInput {
    fn from(tag: &str) -> Self {
        Self::Raw(tag.to_string())
    }
}

impl From<String> for LangTagInput {
    fn from(tag: String) -> Self {
        Self::Raw(tag)
    }
}

impl From<Option<&str>> for LangTagInput {
    fn from(tag: Option<&str>) -> Self {
        tag.map_or(Self::Absent, Self::from)
    }
}

impl From<LanguageTag> for LangTagInput {
    fn from(tag: LanguageTag) -> Self {
        Self::Parsed(tag)
    }
}

impl From<&LanguageTag> for LangTagInput {
    fn from(tag: &LanguageTag) -> Self {
        Self::Parsed(tag.clone())
    }
}

/// Parse a language tag into a [`LanguageTag`].
///
/// Already parsed pairs are returned unchanged, so calling this on its own
/// output is a no-op. Absent or empty input yields an empty pair.
///
/// # Example
///
/// ```
/// use armature_resolver::{parse_lang_tag, LanguageTag};
///
/// let tag = parse_lang_tag("fr_ca");
/// assert_eq!(tag, LanguageTag::new("fr", "CA"));
/// assert_eq!(parse_lang_tag(tag.clone()), tag);
/// assert!(parse_lang_tag(None::<&str>).is_empty());
/// ```
pub fn parse_lang_tag(input: impl Into<LangTagInput>) -> LanguageTag {
    match input.into() {
        LangTagInput::Parsed(tag) => {
            trace!(language = %tag.language, country = %tag.country, "Language tag already parsed");
            tag
        }
        LangTagInput::Absent => LanguageTag::default(),
        LangTagInput::Raw(raw) => {
            let tag = if raw.is_empty() {
                LanguageTag::default()
            } else {
                LanguageTag::parse(&raw)
            };
            debug!(input = %raw, language = %tag.language, country = %tag.country, "Parsed language tag");
            tag
        }
    }
}

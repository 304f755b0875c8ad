//! Structural BCP 47 language tag parser.
//!
//! This only checks the *shape* of each subtag and its position; whether a
//! subtag is actually registered is decided by [`crate::resolve`].

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("empty language tag")]
    Empty,

    /// The tag contained a character outside of [-0-9A-Za-z_].
    #[error("invalid character in language tag {0:?}")]
    InvalidCharacter(String),

    /// A subtag has an unexpected shape, or came in the wrong order.
    #[error("unexpected subtag {subtag:?} in language tag {tag:?}")]
    SubtagForm { tag: String, subtag: String },

    #[error("duplicate variant {variant:?} in language tag {tag:?}")]
    DuplicateVariant { tag: String, variant: String },
}

#[derive(PartialEq, Clone, Copy)]
enum ParserState {
    AfterLanguage(usize),
    AfterScript,
    AfterRegion,
    AfterVariant,
}

/// A parsed language tag, stored in canonical casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    language: String,
    extlangs: Vec<String>,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: Vec<String>,
    private_use: Vec<String>,
}

impl LanguageTag {
    pub fn new(language: &str, script: Option<&str>, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            extlangs: Vec::new(),
            script: script.map(title_case),
            region: region.map(str::to_ascii_uppercase),
            variants: Vec::new(),
            extensions: Vec::new(),
            private_use: Vec::new(),
        }
    }

    /// The primary language subtag, lowercase.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    fn parse_normalized(original: &str, normal: &str) -> Result<Self, TagError> {
        let parts: Vec<&str> = normal.split('-').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(TagError::SubtagForm {
                tag: original.to_string(),
                subtag: String::new(),
            });
        }
        let form_error = |subtag: &str| TagError::SubtagForm {
            tag: original.to_string(),
            subtag: subtag.to_string(),
        };

        let language = parts[0];
        if !is_language(language) {
            return Err(form_error(language));
        }
        let mut tag = LanguageTag::new(language, None, None);

        let mut state = ParserState::AfterLanguage(0);
        let mut idx = 1;
        while idx < parts.len() {
            let subtag = parts[idx];
            if subtag == "x" {
                let rest = &parts[idx + 1..];
                if rest.is_empty() || rest.iter().any(|p| p.len() > 8) {
                    return Err(form_error(subtag));
                }
                tag.private_use = rest.iter().map(|p| p.to_string()).collect();
                break;
            }
            if subtag.len() == 1 {
                // Extension: the singleton plus every following 2-8 char subtag.
                let mut extension = subtag.to_string();
                idx += 1;
                let start = idx;
                while idx < parts.len() && parts[idx].len() >= 2 && parts[idx].len() <= 8 {
                    extension.push('-');
                    extension.push_str(parts[idx]);
                    idx += 1;
                }
                if idx == start {
                    return Err(form_error(subtag));
                }
                tag.extensions.push(extension);
                state = ParserState::AfterVariant;
                continue;
            }
            if !tag.extensions.is_empty() {
                return Err(form_error(subtag));
            }

            let language_count = match state {
                ParserState::AfterLanguage(count) => Some(count),
                _ => None,
            };
            if is_variant(subtag) {
                if tag.variants.iter().any(|v| v == subtag) {
                    return Err(TagError::DuplicateVariant {
                        tag: original.to_string(),
                        variant: subtag.to_string(),
                    });
                }
                tag.variants.push(subtag.to_string());
                state = ParserState::AfterVariant;
            } else if (language_count.is_some() || state == ParserState::AfterScript)
                && is_region(subtag)
            {
                tag.region = Some(subtag.to_ascii_uppercase());
                state = ParserState::AfterRegion;
            } else if language_count.is_some() && is_script(subtag) {
                tag.script = Some(title_case(subtag));
                state = ParserState::AfterScript;
            } else if language.len() <= 3
                && language_count.is_some_and(|count| count < 3)
                && is_extlang(subtag)
            {
                tag.extlangs.push(subtag.to_string());
                state = ParserState::AfterLanguage(language_count.unwrap_or(0) + 1);
            } else {
                return Err(form_error(subtag));
            }
            idx += 1;
        }
        Ok(tag)
    }
}

impl FromStr for LanguageTag {
    type Err = TagError;

    /// Parses a tag, accepting `_` as a separator and any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TagError::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err(TagError::InvalidCharacter(trimmed.to_string()));
        }
        let normal = trimmed.replace('_', "-").to_ascii_lowercase();
        LanguageTag::parse_normalized(trimmed, &normal)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for extlang in &self.extlangs {
            write!(f, "-{extlang}")?;
        }
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        for extension in &self.extensions {
            write!(f, "-{extension}")?;
        }
        if !self.private_use.is_empty() {
            write!(f, "-x-{}", self.private_use.join("-"))?;
        }
        Ok(())
    }
}

pub(crate) fn title_case(subtag: &str) -> String {
    let mut chars = subtag.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

fn is_alpha(subtag: &str) -> bool {
    subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_language(subtag: &str) -> bool {
    (2..=8).contains(&subtag.len()) && subtag.len() != 4 && is_alpha(subtag)
}

fn is_variant(subtag: &str) -> bool {
    match subtag.bytes().next() {
        Some(first) if subtag.len() == 4 => first.is_ascii_digit(),
        Some(_) => (5..=8).contains(&subtag.len()),
        None => false,
    }
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && is_alpha(subtag))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && is_alpha(subtag)
}

fn is_extlang(subtag: &str) -> bool {
    subtag.len() == 3 && is_alpha(subtag)
}

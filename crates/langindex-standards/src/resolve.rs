//! Decomposition of language tags into registered subtags.

use crate::registry::{
    SubtagRegistry, is_private_use_language, is_private_use_region, is_private_use_script,
};
use crate::sldr::TagCatalog;
use crate::tag::LanguageTag;

/// A subtag code with its registered display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSubtag {
    pub code: String,
    /// `None` for unregistered private-use subtags.
    pub name: Option<String>,
    pub is_private_use: bool,
}

impl NamedSubtag {
    /// The display name, or the code when the subtag has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// A tag whose every subtag is known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub tag: LanguageTag,
    pub language: NamedSubtag,
    pub script: Option<NamedSubtag>,
    pub region: Option<NamedSubtag>,
    pub variants: Vec<NamedSubtag>,
}

/// Resolves tags against the subtag registry and the SLDR catalogue.
#[derive(Debug, Clone, Copy)]
pub struct TagResolver<'a> {
    registry: &'a SubtagRegistry,
    catalog: &'a TagCatalog,
}

impl<'a> TagResolver<'a> {
    pub fn new(registry: &'a SubtagRegistry, catalog: &'a TagCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Splits `tag` into its subtags, or `None` when the tag does not parse
    /// or names a subtag that is neither registered nor private use.
    pub fn decompose(&self, tag: &str) -> Option<ResolvedTag> {
        let parsed: LanguageTag = tag.parse().ok()?;

        let language = match self.registry.language(parsed.language()) {
            Some(registered) => NamedSubtag {
                code: registered.code.clone(),
                name: Some(registered.name.clone()),
                is_private_use: registered.is_private_use,
            },
            None if is_private_use_language(parsed.language()) => NamedSubtag {
                code: parsed.language().to_string(),
                name: None,
                is_private_use: true,
            },
            None => return None,
        };

        let script = match parsed.script() {
            None => None,
            Some(code) => Some(match self.registry.script(code) {
                Some(s) => NamedSubtag {
                    code: s.code.clone(),
                    name: Some(s.name.clone()),
                    is_private_use: is_private_use_script(code),
                },
                None if is_private_use_script(code) => NamedSubtag {
                    code: code.to_string(),
                    name: None,
                    is_private_use: true,
                },
                None => return None,
            }),
        };

        let region = match parsed.region() {
            None => None,
            Some(code) => Some(match self.registry.region(code) {
                Some(r) => NamedSubtag {
                    code: r.code.clone(),
                    name: Some(r.name.clone()),
                    is_private_use: is_private_use_region(code),
                },
                None if is_private_use_region(code) => NamedSubtag {
                    code: code.to_string(),
                    name: None,
                    is_private_use: true,
                },
                None => return None,
            }),
        };

        let mut variants = Vec::with_capacity(parsed.variants().len());
        for code in parsed.variants() {
            let v = self.registry.variant(code)?;
            variants.push(NamedSubtag {
                code: v.code.clone(),
                name: Some(v.name.clone()),
                is_private_use: false,
            });
        }

        Some(ResolvedTag {
            tag: parsed,
            language,
            script,
            region,
            variants,
        })
    }

    /// The script `language` (optionally in `region`) is written in when no
    /// script subtag is given.
    pub fn implicit_script(&self, language: &str, region: Option<&str>) -> Option<&'a str> {
        if let Some(region) = region {
            let tag = format!("{language}-{region}");
            if let Some(script) = self.catalog.implicit_script(&tag) {
                return Some(script);
            }
        }
        self.catalog.implicit_script(language).or_else(|| {
            self.registry
                .language(language)
                .and_then(|l| l.suppress_script.as_deref())
        })
    }

    /// True when the tag has no script, or its script is the implicit one.
    pub fn is_script_implied(&self, resolved: &ResolvedTag) -> bool {
        let Some(script) = &resolved.script else {
            return true;
        };
        if resolved.language.is_private_use {
            return false;
        }
        let region = resolved
            .region
            .as_ref()
            .filter(|r| !r.is_private_use)
            .map(|r| r.code.as_str());
        self.implicit_script(&resolved.language.code, region)
            .is_some_and(|implicit| implicit.eq_ignore_ascii_case(&script.code))
    }
}

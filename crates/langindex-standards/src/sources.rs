//! Source directory layout and loading.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::crosswalk::Crosswalk;
use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::registry::SubtagRegistry;
use crate::sldr::TagCatalog;
use crate::tables::{CountryRow, EthnologueRow, country_rows, ethnologue_rows, parse_tab_rows};

/// Environment variable for overriding the source directory.
pub const SOURCES_ENV_VAR: &str = "LANGINDEX_SOURCES_DIR";

/// Get the default source directory.
///
/// Resolution order:
/// 1. `LANGINDEX_SOURCES_DIR` environment variable
/// 2. `sources/` directory relative to workspace root
pub fn default_sources_root() -> PathBuf {
    if let Ok(root) = std::env::var(SOURCES_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../sources")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRole {
    Crosswalk,
    Ethnologue,
    Countries,
    Registry,
    Tags,
}

impl SourceRole {
    pub const ALL: [SourceRole; 5] = [
        SourceRole::Crosswalk,
        SourceRole::Ethnologue,
        SourceRole::Countries,
        SourceRole::Registry,
        SourceRole::Tags,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SourceRole::Crosswalk => "TwoToThreeCodes.txt",
            SourceRole::Ethnologue => "LanguageIndex.txt",
            SourceRole::Countries => "LanguageCodes.txt",
            SourceRole::Registry => "ianaSubtagRegistry.txt",
            SourceRole::Tags => "alltags.txt",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceRole::Crosswalk => "crosswalk",
            SourceRole::Ethnologue => "ethnologue",
            SourceRole::Countries => "countries",
            SourceRole::Registry => "registry",
            SourceRole::Tags => "tags",
        }
    }
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five raw files under one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, role: SourceRole) -> PathBuf {
        self.root.join(role.file_name())
    }
}

/// A loaded source file and its digest.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFile {
    pub role: SourceRole,
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

/// Every input table, parsed.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub crosswalk: Crosswalk,
    pub ethnologue: Vec<EthnologueRow>,
    pub countries: Vec<CountryRow>,
    pub registry: SubtagRegistry,
    pub catalog: TagCatalog,
    pub files: Vec<SourceFile>,
}

impl SourceTables {
    pub fn load(layout: &SourceLayout) -> Result<Self, StandardsError> {
        let _span = tracing::info_span!("load_sources", root = %layout.root().display()).entered();

        let mut files = Vec::with_capacity(SourceRole::ALL.len());
        let mut read = |role: SourceRole| -> Result<(PathBuf, Vec<u8>), StandardsError> {
            let path = layout.path(role);
            if !path.is_file() {
                return Err(StandardsError::MissingSource {
                    role: role.to_string(),
                    path,
                });
            }
            let bytes = std::fs::read(&path).map_err(|e| StandardsError::io(&path, e))?;
            let file = SourceFile {
                role,
                path: path.clone(),
                size: bytes.len() as u64,
                sha256: sha256_hex(&bytes),
            };
            tracing::info!(
                role = %role,
                path = %path.display(),
                size = file.size,
                sha256 = %file.sha256,
                "loaded source file"
            );
            files.push(file);
            Ok((path, bytes))
        };

        let (path, bytes) = read(SourceRole::Crosswalk)?;
        let crosswalk = Crosswalk::from_rows(parse_tab_rows(&bytes, &path)?)?;

        let (path, bytes) = read(SourceRole::Ethnologue)?;
        let ethnologue = ethnologue_rows(parse_tab_rows(&bytes, &path)?);

        let (path, bytes) = read(SourceRole::Countries)?;
        let countries = country_rows(parse_tab_rows(&bytes, &path)?);

        let (_, bytes) = read(SourceRole::Registry)?;
        let registry = SubtagRegistry::parse(&String::from_utf8_lossy(&bytes), &crosswalk);
        tracing::info!(
            file_date = registry.file_date().unwrap_or("?"),
            languages = registry.language_count(),
            "loaded subtag registry"
        );

        let (_, bytes) = read(SourceRole::Tags)?;
        let catalog = TagCatalog::parse(&String::from_utf8_lossy(&bytes));

        Ok(Self {
            crosswalk,
            ethnologue,
            countries,
            registry,
            catalog,
            files,
        })
    }
}

//! Counters and diagnostics collected while merging.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ethnologue,
    Registry,
    Countries,
    Expansion,
    Finalize,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Ethnologue,
        Stage::Registry,
        Stage::Countries,
        Stage::Expansion,
        Stage::Finalize,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Ethnologue => "ethnologue",
            Stage::Registry => "registry",
            Stage::Countries => "countries",
            Stage::Expansion => "expansion",
            Stage::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one stage did to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageStats {
    pub stage: Stage,
    /// Input rows (or records) examined.
    pub seen: usize,
    /// Skipped inputs by reason.
    pub skipped: BTreeMap<&'static str, usize>,
    pub created: usize,
    pub updated: usize,
    pub renamed: usize,
    pub synthesized: usize,
}

impl StageStats {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            seen: 0,
            skipped: BTreeMap::new(),
            created: 0,
            updated: 0,
            renamed: 0,
            synthesized: 0,
        }
    }

    pub fn skip(&mut self, reason: &'static str) {
        *self.skipped.entry(reason).or_default() += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// A record found in several countries with no primary country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousCountry {
    pub tag: String,
    pub desired_name: String,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub stages: Vec<StageStats>,
    pub ambiguous: Vec<AmbiguousCountry>,
    pub record_count: usize,
}

impl MergeReport {
    pub fn stage(&self, stage: Stage) -> Option<&StageStats> {
        self.stages.iter().find(|s| s.stage == stage)
    }
}

//! The merge pipeline.
//!
//! Stages run in a fixed order over one owned index:
//! 1. **Ethnologue**: names and countries per code
//! 2. **Registry**: desired names, macrolanguage flags, registry names
//! 3. **Countries**: primary-country hints
//! 4. **Expansion**: SLDR tag renames and derived records
//! 5. **Finalize**: self-names, primary countries, ambiguity diagnostics

use langindex_model::LanguageIndex;
use langindex_standards::{
    CountryRow, Crosswalk, EthnologueRow, SourceTables, SubtagRegistry, TagCatalog, TagResolver,
};
use tracing::{info, info_span};

use crate::error::MergeError;
use crate::policy::MergePolicy;
use crate::report::{MergeReport, StageStats};
use crate::stages;

/// The raw tables the merge reads. Nothing here is modified.
#[derive(Debug, Clone, Copy)]
pub struct MergeInputs<'a> {
    pub crosswalk: &'a Crosswalk,
    pub ethnologue: &'a [EthnologueRow],
    pub countries: &'a [CountryRow],
    pub registry: &'a SubtagRegistry,
    pub catalog: &'a TagCatalog,
}

impl<'a> MergeInputs<'a> {
    pub fn from_tables(tables: &'a SourceTables) -> Self {
        Self {
            crosswalk: &tables.crosswalk,
            ethnologue: &tables.ethnologue,
            countries: &tables.countries,
            registry: &tables.registry,
            catalog: &tables.catalog,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub index: LanguageIndex,
    pub report: MergeReport,
}

#[derive(Debug, Clone, Default)]
pub struct MergePipeline {
    policy: MergePolicy,
}

impl MergePipeline {
    pub fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    pub fn run(&self, inputs: &MergeInputs<'_>) -> Result<MergeOutcome, MergeError> {
        let mut index = LanguageIndex::new();
        let mut report = MergeReport::default();
        let policy = &self.policy;

        let stats = info_span!("stage", name = "ethnologue").in_scope(|| {
            stages::ethnologue::apply(
                &mut index,
                inputs.ethnologue,
                inputs.crosswalk,
                inputs.registry,
                policy,
            )
        })?;
        record_stage(&mut report, stats, &index);

        let stats = info_span!("stage", name = "registry")
            .in_scope(|| stages::registry::apply(&mut index, inputs.registry, policy));
        record_stage(&mut report, stats, &index);

        let stats = info_span!("stage", name = "countries").in_scope(|| {
            stages::countries::apply(
                &mut index,
                inputs.countries,
                inputs.crosswalk,
                inputs.registry,
            )
        })?;
        record_stage(&mut report, stats, &index);

        let resolver = TagResolver::new(inputs.registry, inputs.catalog);
        let stats = info_span!("stage", name = "expansion")
            .in_scope(|| stages::expansion::apply(&mut index, inputs.catalog, &resolver))?;
        record_stage(&mut report, stats, &index);

        let (stats, ambiguous) = info_span!("stage", name = "finalize")
            .in_scope(|| stages::finalize::apply(&mut index, policy))?;
        record_stage(&mut report, stats, &index);

        report.ambiguous = ambiguous;
        report.record_count = index.len();
        info!(
            records = report.record_count,
            ambiguous = report.ambiguous.len(),
            "merge complete"
        );
        Ok(MergeOutcome { index, report })
    }
}

fn record_stage(report: &mut MergeReport, stats: StageStats, index: &LanguageIndex) {
    info!(
        stage = %stats.stage,
        seen = stats.seen,
        skipped = stats.skipped_total(),
        created = stats.created,
        updated = stats.updated,
        renamed = stats.renamed,
        records = index.len(),
        "stage complete"
    );
    report.stages.push(stats);
}

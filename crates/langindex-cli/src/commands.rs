use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use langindex_core::{Ambiguity, MergeInputs, MergeOutcome, MergePipeline, MergePolicy};
use langindex_output::{
    JSON_FILE_NAME, TSV_FILE_NAME, ensure_parent_dir, index_digest, json_languages,
    write_index_json, write_index_tsv,
};
use langindex_standards::{Crosswalk, SourceLayout, SourceTables, default_sources_root};

use crate::cli::{BuildArgs, CrosswalkArgs, ShowArgs};
use crate::types::{BuildResult, CrosswalkResult, OutputSummary, ShowResult};

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let sources_root = args.sources.clone().unwrap_or_else(default_sources_root);
    let build_span = info_span!("build", sources = %sources_root.display());
    let _build_guard = build_span.enter();

    let policy = load_policy(args.policy.as_deref(), args.fail_on_ambiguous)?;
    let (tables, outcome) = merge_sources(&sources_root, policy)?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| sources_root.join("output"));
    let mut outputs = Vec::new();

    // =========================================================================
    // Outputs
    // =========================================================================
    if args.format.wants_tsv() {
        let path = output_dir.join(TSV_FILE_NAME);
        write_index_tsv(&path, &outcome.index)
            .with_context(|| format!("write {}", path.display()))?;
        outputs.push(OutputSummary {
            format: "TSV",
            path,
            records: outcome.index.len(),
        });
    }
    if args.format.wants_json() {
        let path = output_dir.join(JSON_FILE_NAME);
        write_index_json(&path, &outcome.index)
            .with_context(|| format!("write {}", path.display()))?;
        outputs.push(OutputSummary {
            format: "JSON",
            path,
            records: json_languages(&outcome.index).len(),
        });
    }

    let index_digest = index_digest(&outcome.index);
    info!(
        records = outcome.index.len(),
        digest = %index_digest,
        "language index built"
    );
    Ok(BuildResult {
        sources_root,
        sources: tables.files,
        report: outcome.report,
        outputs,
        index_digest,
    })
}

/// Looks `tag` up as an index key first, then as an ISO 639-3 code.
pub fn run_show(args: &ShowArgs) -> Result<ShowResult> {
    let sources_root = args.sources.clone().unwrap_or_else(default_sources_root);
    let policy = load_policy(args.policy.as_deref(), false)?;
    let (_, outcome) = merge_sources(&sources_root, policy)?;

    let records: Vec<_> = match outcome.index.get(&args.tag) {
        Some(record) => vec![record.clone()],
        None => outcome
            .index
            .find_by_three_letter(&args.tag)
            .cloned()
            .collect(),
    };
    if records.is_empty() {
        bail!("no language record for {}", args.tag);
    }
    Ok(ShowResult {
        query: args.tag.clone(),
        records,
    })
}

pub fn run_crosswalk(args: &CrosswalkArgs) -> Result<CrosswalkResult> {
    let path = &args.iso639_tab;
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let crosswalk = Crosswalk::from_iso639_table(&contents)
        .with_context(|| format!("parse {}", path.display()))?;
    let text = crosswalk.to_text();

    if let Some(output) = &args.output {
        ensure_parent_dir(output)?;
        fs::write(output, &text).with_context(|| format!("write {}", output.display()))?;
        info!(path = %output.display(), pairs = crosswalk.len(), "wrote crosswalk");
    }
    Ok(CrosswalkResult {
        pairs: crosswalk.len(),
        output: args.output.clone(),
        text,
    })
}

fn load_policy(path: Option<&Path>, fail_on_ambiguous: bool) -> Result<MergePolicy> {
    let mut policy = match path {
        Some(path) => MergePolicy::load(path)
            .with_context(|| format!("load merge policy {}", path.display()))?,
        None => MergePolicy::default(),
    };
    if fail_on_ambiguous {
        policy.ambiguity = Ambiguity::Fail;
    }
    Ok(policy)
}

fn merge_sources(root: &Path, policy: MergePolicy) -> Result<(SourceTables, MergeOutcome)> {
    let tables = SourceTables::load(&SourceLayout::new(root))
        .with_context(|| format!("load sources from {}", root.display()))?;
    let outcome = MergePipeline::new(policy)
        .run(&MergeInputs::from_tables(&tables))
        .context("merge language sources")?;
    Ok((tables, outcome))
}

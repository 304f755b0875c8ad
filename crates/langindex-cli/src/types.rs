use std::path::PathBuf;

use langindex_core::MergeReport;
use langindex_model::LanguageRecord;
use langindex_standards::SourceFile;

#[derive(Debug)]
pub struct BuildResult {
    pub sources_root: PathBuf,
    pub sources: Vec<SourceFile>,
    pub report: MergeReport,
    pub outputs: Vec<OutputSummary>,
    /// SHA-256 of the TSV rendering, whether or not the TSV was written.
    pub index_digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub format: &'static str,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug)]
pub struct ShowResult {
    pub query: String,
    pub records: Vec<LanguageRecord>,
}

#[derive(Debug)]
pub struct CrosswalkResult {
    pub pairs: usize,
    /// `None` when the crosswalk goes to stdout.
    pub output: Option<PathBuf>,
    pub text: String,
}

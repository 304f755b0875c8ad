use std::path::PathBuf;

use thiserror::Error;

use crate::report::Stage;

/// Fatal merge failures. Malformed rows are skipped, not reported here.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("unknown region code {code:?} in {stage} stage")]
    UnknownRegion { code: String, stage: Stage },

    #[error("canonical tag {tag:?} is already present in the index")]
    DuplicateTag { tag: String },

    #[error("{count} language(s) have no primary country but are found in multiple countries")]
    AmbiguousPrimaryCountry { count: usize },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

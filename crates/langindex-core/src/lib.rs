#![deny(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod policy;
pub mod report;
pub mod stages;

pub use crate::error::{MergeError, PolicyError};
pub use crate::pipeline::{MergeInputs, MergeOutcome, MergePipeline};
pub use crate::policy::{Ambiguity, MergePolicy, UnlistedLanguage};
pub use crate::report::{AmbiguousCountry, MergeReport, Stage, StageStats};

#![deny(unsafe_code)]

pub mod crosswalk;
pub mod error;
pub mod hash;
pub mod registry;
pub mod resolve;
pub mod sldr;
pub mod sources;
pub mod tables;
pub mod tag;

pub use crate::crosswalk::Crosswalk;
pub use crate::error::StandardsError;
pub use crate::registry::{RegisteredLanguage, Subtag, SubtagRegistry};
pub use crate::resolve::{NamedSubtag, ResolvedTag, TagResolver};
pub use crate::sldr::TagCatalog;
pub use crate::sources::{SourceFile, SourceLayout, SourceRole, SourceTables, default_sources_root};
pub use crate::tables::{CountryRow, EthnologueRow};
pub use crate::tag::{LanguageTag, TagError};

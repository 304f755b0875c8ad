//! CLI library components for the language index builder.

#![deny(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;

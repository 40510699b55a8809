//! # phpforge-types
//!
//! Core type definitions for phpforge.
//!
//! This crate is the foundation of the dependency graph -- every other
//! phpforge crate depends on it. It contains:
//!
//! - **[`project`]** -- [`GeneratedProject`] and its files and database schema
//! - **[`provider`]** -- [`ProviderDescriptor`] as shown in provider listings
//! - **[`config`]** -- Configuration schema (preferred provider, overrides)
//! - **[`secret`]** -- [`SecretString`] for API keys
//! - **[`error`]** -- [`ForgeError`] top-level error type

pub mod config;
pub mod error;
pub mod project;
pub mod provider;
pub mod secret;

pub use config::{Config, ProviderOverride};
pub use error::{ForgeError, Result};
pub use project::{DatabaseTable, Field, FileType, GeneratedFile, GeneratedProject};
pub use provider::ProviderDescriptor;
pub use secret::SecretString;

//! Hosted LLM provider adapters for phpforge.
//!
//! This crate turns a prompt into a [`GeneratedProject`](phpforge_types::GeneratedProject)
//! by calling one of five hosted backends.
//!
//! # Architecture
//!
//! - [`Provider`] trait is the adapter capability set
//! - [`HostedProvider`] implements it for every builtin backend
//! - [`WireProtocol`] selects the request format (OpenAI chat, Anthropic
//!   messages, Cohere generate, Gemini generateContent)
//! - [`FallbackTemplate`] is the canned project an adapter returns when the
//!   live call fails
//! - [`ProviderRegistry`] holds the adapters and the current selection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use phpforge_llm::ProviderRegistry;
//! use phpforge_platform::NativeEnvironment;
//!
//! let registry = ProviderRegistry::from_config(&config, Arc::new(NativeEnvironment));
//! let project = registry.generate_code("Create a blog with comments").await?;
//! for file in &project.files {
//!     println!("{}", file.path);
//! }
//! ```

mod anthropic;
mod cohere;
mod gemini;
mod http;
mod openai_compat;

pub mod config;
pub mod error;
pub mod fallback;
pub mod hosted;
pub mod prompt;
pub mod provider;
pub mod registry;
pub mod response;
pub mod types;

pub use config::{AdapterConfig, WireProtocol, builtin_adapters};
pub use error::{ProviderError, Result};
pub use fallback::FallbackTemplate;
pub use hosted::HostedProvider;
pub use provider::Provider;
pub use registry::{DEFAULT_PROVIDER_ID, ProviderRegistry};
pub use response::{parse_project, strip_code_fences};

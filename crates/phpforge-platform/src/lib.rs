//! Platform layer for phpforge.
//!
//! - [`env`] -- the [`Environment`](env::Environment) trait providers read
//!   credentials through, with native and in-memory implementations
//! - [`config_loader`] -- config file discovery and loading

pub mod config_loader;
pub mod env;

pub use config_loader::load_config;
pub use env::{Environment, MemoryEnvironment, NativeEnvironment};

//! The core [`Provider`] trait for code generation backends.
//!
//! Every hosted backend implements this trait. The registry only ever talks
//! to adapters through it, which keeps wire details private to each adapter.

use async_trait::async_trait;
use phpforge_types::GeneratedProject;

/// A backend that turns a natural-language request into a PHP project.
///
/// `generate_code` never fails: transport errors, timeouts and unparseable
/// output all end in the adapter's fallback project. Callers that need to
/// refuse work up front check [`is_configured`](Provider::is_configured)
/// first.
///
/// # Example
///
/// ```rust,ignore
/// use phpforge_llm::Provider;
///
/// async fn run(provider: &dyn Provider) {
///     if provider.is_configured() {
///         let project = provider.generate_code("Create a blog").await;
///         println!("{} files", project.files.len());
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Registry key (e.g. `"openrouter"`).
    fn id(&self) -> &str;

    /// Human-readable name (e.g. `"Claude 3.5 Sonnet"`).
    fn name(&self) -> &str;

    /// Whether an access credential is currently present. No I/O.
    fn is_configured(&self) -> bool;

    /// Generate a project for `prompt`.
    async fn generate_code(&self, prompt: &str) -> GeneratedProject;
}

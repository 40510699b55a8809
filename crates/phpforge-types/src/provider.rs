//! Provider descriptors shown to the user when listing providers.

use serde::{Deserialize, Serialize};

/// Summary of one registered provider.
///
/// `configured` reflects credential presence at the moment the descriptor
/// was built; listings rebuild it on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
    /// Registry key (e.g. `"openrouter"`).
    pub id: String,

    /// Human-readable name (e.g. `"OpenRouter (Multiple Models)"`).
    pub display_name: String,

    /// Whether an access credential is currently present.
    pub configured: bool,
}

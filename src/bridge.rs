//! Host bridge port — the single seam between the panel and the
//! capability-providing backend.
//!
//! The original front end probed a process-wide host global for an `invoke`
//! entry at call time. Here the registry is an explicitly injected value,
//! but resolution still happens per operation and still tolerates the two
//! historical entry layouts.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Opaque failure description reported by the backend for a rejected
/// operation. Surfaced to the user verbatim, never re-interpreted.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct InvokeError(pub String);

/// A callable capable of running named backend operations with a structured
/// argument bag.
#[async_trait]
pub trait Bridge: Send + Sync {
    async fn invoke(&self, operation: &str, args: Option<Value>) -> Result<Value, InvokeError>;
}

impl std::fmt::Debug for dyn Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Bridge")
    }
}

/// The host-provided registry of bridge callables.
///
/// Two generations of hosts expose the callable in different places
/// (`core.invoke` on current hosts, `tauri.invoke` on pre-2.x ones), so the
/// registry carries one optional slot per generation.
#[derive(Default, Clone)]
pub struct BridgeRegistry {
    core: Option<Arc<dyn Bridge>>,
    legacy: Option<Arc<dyn Bridge>>,
}

impl BridgeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_core(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            core: Some(bridge),
            legacy: None,
        }
    }

    pub fn with_legacy(bridge: Arc<dyn Bridge>) -> Self {
        Self {
            core: None,
            legacy: Some(bridge),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("host bridge registry not found; the backend was never attached")]
    RegistryMissing,

    #[error("no invoke entry found in the host bridge registry")]
    NoInvokeEntry,
}

/// Looks up the bridge callable, preferring the current-generation entry
/// over the legacy one.
///
/// Resolved fresh on every operation; the registry is cheap to query and
/// callers must not cache the callable across operations.
pub fn resolve_invoke(host: Option<&BridgeRegistry>) -> Result<Arc<dyn Bridge>, ConfigError> {
    let registry = host.ok_or(ConfigError::RegistryMissing)?;
    registry
        .core
        .as_ref()
        .or(registry.legacy.as_ref())
        .cloned()
        .ok_or(ConfigError::NoInvokeEntry)
}

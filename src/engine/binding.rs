//! Binding strategies: how the adapter obtains a usable engine
//! capability.
//!
//! Strategies are typed and tried in a fixed priority order; the first
//! one that yields a capability wins. Each failure carries a cause so
//! the adapter can retain the full ladder of diagnostics when every
//! strategy misses.

use crate::engine::error::EngineError;
use crate::engine::process::{probe_analyze_entry, ProcessEngine};
use crate::engine::wire::RawAnalysis;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// A bound analysis entry point. The only operation the adapter ever
/// needs from the engine.
#[async_trait]
pub trait EngineCapability: Send + Sync {
    async fn analyze(&self, code: &str, language: &str) -> Result<RawAnalysis, EngineError>;
}

/// One way of binding the external engine. Returns a typed capability
/// or a typed failure; no duck-typed probing.
#[async_trait]
pub trait BindingStrategy: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    async fn bind(&self) -> Result<Arc<dyn EngineCapability>, EngineError>;
}

/// Priority 1: the explicitly configured engine path, verified against
/// the primary `analyze` entry point.
pub struct ConfiguredBinaryStrategy {
    path: Option<PathBuf>,
}

impl ConfiguredBinaryStrategy {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl BindingStrategy for ConfiguredBinaryStrategy {
    fn name(&self) -> &'static str {
        "configured-binary"
    }

    async fn bind(&self) -> Result<Arc<dyn EngineCapability>, EngineError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| EngineError::unavailable("no engine path configured"))?;
        probe_analyze_entry(path).await?;
        Ok(Arc::new(ProcessEngine::subcommand(path.clone())))
    }
}

/// Priority 2: discover the engine on PATH and run the same
/// capability handshake.
pub struct PathDiscoveryStrategy {
    program: String,
}

impl PathDiscoveryStrategy {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

#[async_trait]
impl BindingStrategy for PathDiscoveryStrategy {
    fn name(&self) -> &'static str {
        "path-discovery"
    }

    async fn bind(&self) -> Result<Arc<dyn EngineCapability>, EngineError> {
        let path = which::which(&self.program).map_err(|err| {
            EngineError::unavailable(format!("{} not found on PATH: {err}", self.program))
        })?;
        probe_analyze_entry(&path).await?;
        Ok(Arc::new(ProcessEngine::subcommand(path)))
    }
}

/// Priority 3, last resort: spawn whatever engine binary we can see
/// with a hand-rolled raw stdin/stdout envelope and no handshake.
pub struct RawSpawnStrategy {
    path: Option<PathBuf>,
    program: String,
}

impl RawSpawnStrategy {
    pub fn new(path: Option<PathBuf>, program: impl Into<String>) -> Self {
        Self { path, program: program.into() }
    }

    fn resolve(&self) -> Result<PathBuf, EngineError> {
        if let Some(path) = &self.path {
            if path.exists() {
                return Ok(path.clone());
            }
        }
        which::which(&self.program).map_err(|err| {
            EngineError::unavailable(format!(
                "no engine binary for raw invocation: {err}"
            ))
        })
    }
}

#[async_trait]
impl BindingStrategy for RawSpawnStrategy {
    fn name(&self) -> &'static str {
        "raw-spawn"
    }

    async fn bind(&self) -> Result<Arc<dyn EngineCapability>, EngineError> {
        let path = self.resolve()?;
        Ok(Arc::new(ProcessEngine::raw_stdio(path)))
    }
}

//! The engine adapter: resilient access to the external complexity
//! inference engine.
//!
//! `analyze` always returns a canonical `AnalysisResult`, whatever the
//! engine does. Binding is lazy, serialized to a single in-flight
//! attempt, and not sticky on failure: a later call retries from
//! scratch, since the engine binary may simply not be deployed yet.

pub mod binding;
pub mod error;
pub mod process;
pub mod wire;

pub use binding::{BindingStrategy, EngineCapability};
pub use error::EngineError;

use crate::config::EngineConfig;
use crate::core::AnalysisResult;
use binding::{ConfiguredBinaryStrategy, PathDiscoveryStrategy, RawSpawnStrategy};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Language tags the engine advertises.
pub const SUPPORTED_LANGUAGES: [&str; 7] =
    ["javascript", "typescript", "python", "java", "c", "cpp", "rust"];

enum BindingState {
    Uninitialized,
    Initializing,
    Ready(Arc<dyn EngineCapability>),
    Failed(String),
}

pub struct EngineAdapter {
    strategies: Vec<Box<dyn BindingStrategy>>,
    /// Process-wide binding singleton. The attempt runs while this
    /// lock is held, so at most one is ever in flight.
    binding: Mutex<BindingState>,
    /// Completed attempts. Lives outside the lock so a caller can
    /// snapshot it before queueing: whoever waited out an attempt
    /// adopts its outcome, whoever finds an older failure retries.
    attempts: AtomicU64,
    max_source_size: usize,
    call_timeout: Duration,
}

impl EngineAdapter {
    /// Adapter with the default strategy ladder: configured path, PATH
    /// discovery, raw spawn.
    pub fn new(config: &EngineConfig) -> Self {
        let strategies: Vec<Box<dyn BindingStrategy>> = vec![
            Box::new(ConfiguredBinaryStrategy::new(config.path.clone())),
            Box::new(PathDiscoveryStrategy::new(config.program.clone())),
            Box::new(RawSpawnStrategy::new(config.path.clone(), config.program.clone())),
        ];
        Self::with_strategies(
            strategies,
            config.max_source_size,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Adapter over an explicit strategy ladder. Tests inject counting
    /// doubles here.
    pub fn with_strategies(
        strategies: Vec<Box<dyn BindingStrategy>>,
        max_source_size: usize,
        call_timeout: Duration,
    ) -> Self {
        Self {
            strategies,
            binding: Mutex::new(BindingState::Uninitialized),
            attempts: AtomicU64::new(0),
            max_source_size,
            call_timeout,
        }
    }

    /// Drive the binding to `Ready`. Idempotent; concurrent callers
    /// share one attempt.
    pub async fn initialize(&self) -> Result<(), EngineError> {
        self.bind().await.map(|_| ())
    }

    /// Analyze `code`. Never fails outward: every engine-side problem
    /// is absorbed into a degraded result with the cause in its
    /// warnings.
    pub async fn analyze(
        &self,
        code: &str,
        language: &str,
        source_name: Option<&str>,
    ) -> AnalysisResult {
        if code.trim().is_empty() {
            return self.degrade(language, source_name, EngineError::EmptyInput);
        }

        let actual = code.chars().count();
        if actual > self.max_source_size {
            let err = EngineError::InputTooLarge { actual, limit: self.max_source_size };
            return self.degrade(language, source_name, err);
        }

        let capability = match self.bind().await {
            Ok(capability) => capability,
            Err(err) => return self.degrade(language, source_name, err),
        };

        let outcome =
            tokio::time::timeout(self.call_timeout, capability.analyze(code, language)).await;
        let raw = match outcome {
            Err(_) => {
                let err = EngineError::invocation(format!(
                    "engine call exceeded the {:?} bound",
                    self.call_timeout
                ));
                return self.degrade(language, source_name, err);
            }
            Ok(Err(err)) => return self.degrade(language, source_name, err),
            Ok(Ok(raw)) => raw,
        };

        wire::normalize(raw, language, source_name)
    }

    async fn bind(&self) -> Result<Arc<dyn EngineCapability>, EngineError> {
        let observed = self.attempts.load(Ordering::Acquire);
        let mut state = self.binding.lock().await;

        match &*state {
            BindingState::Ready(capability) => return Ok(Arc::clone(capability)),
            BindingState::Failed(cause)
                if self.attempts.load(Ordering::Acquire) > observed =>
            {
                // The attempt we queued behind failed; adopt its
                // outcome instead of starting a duplicate.
                return Err(EngineError::unavailable(cause.clone()));
            }
            _ => {}
        }

        *state = BindingState::Initializing;
        let mut causes = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            match strategy.bind().await {
                Ok(capability) => {
                    log::debug!("engine bound via {} strategy", strategy.name());
                    *state = BindingState::Ready(Arc::clone(&capability));
                    self.attempts.fetch_add(1, Ordering::Release);
                    return Ok(capability);
                }
                Err(err) => {
                    log::debug!("binding strategy {} failed: {err}", strategy.name());
                    causes.push(format!("{}: {err}", strategy.name()));
                }
            }
        }

        let cause = if causes.is_empty() {
            "no binding strategies registered".to_string()
        } else {
            causes.join("; ")
        };
        *state = BindingState::Failed(cause.clone());
        self.attempts.fetch_add(1, Ordering::Release);
        Err(EngineError::unavailable(cause))
    }

    fn degrade(
        &self,
        language: &str,
        source_name: Option<&str>,
        err: EngineError,
    ) -> AnalysisResult {
        log::warn!("analysis degraded: {err}");
        AnalysisResult::degraded(
            language,
            source_name.map(str::to_string),
            vec![err.to_string()],
        )
    }
}

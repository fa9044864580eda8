//! The caller-facing analysis command.
//!
//! One pipeline owns the engine adapter and the session: feed it
//! source text, get the canonical result back (degraded results
//! included), with the session's current result superseded.

use crate::config::BigolensConfig;
use crate::core::AnalysisResult;
use crate::engine::EngineAdapter;
use crate::render::{render_annotations, AnnotationSurface};
use crate::session::AnalysisSession;

pub struct AnalysisPipeline {
    adapter: EngineAdapter,
    session: AnalysisSession,
    config: BigolensConfig,
}

impl AnalysisPipeline {
    pub fn new(config: BigolensConfig) -> Self {
        let adapter = EngineAdapter::new(&config.engine);
        Self::with_adapter(adapter, config)
    }

    /// Pipeline over an explicit adapter; tests inject doubles here.
    pub fn with_adapter(adapter: EngineAdapter, config: BigolensConfig) -> Self {
        Self { adapter, session: AnalysisSession::new(), config }
    }

    /// Analyze and store. Returns the session's now-current result;
    /// never fails.
    pub async fn analyze(
        &mut self,
        code: &str,
        language: &str,
        source_name: Option<&str>,
    ) -> &AnalysisResult {
        let result = self.adapter.analyze(code, language, source_name).await;
        self.session.store(result)
    }

    /// Apply inline annotations for the current result, honoring the
    /// configured toggle. A no-op before the first analysis.
    pub fn annotate(&self, surface: &mut dyn AnnotationSurface) {
        if !self.config.annotations.enabled {
            log::debug!("inline annotations disabled by configuration");
            return;
        }
        if let Some(result) = self.session.current() {
            render_annotations(result, surface);
        }
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    pub fn config(&self) -> &BigolensConfig {
        &self.config
    }
}

//! The analysis session: holder of the single current result.
//!
//! Concurrent analyses may race; the last store wins unconditionally.
//! Only the most recent result is ever meaningful to the user-facing
//! views, so no locking discipline applies here.

use crate::core::AnalysisResult;

#[derive(Debug, Default)]
pub struct AnalysisSession {
    current: Option<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, superseding any previous one, and return a
    /// reference to the stored value.
    pub fn store(&mut self, result: AnalysisResult) -> &AnalysisResult {
        self.current.insert(result)
    }

    /// The most recently completed result, if any analysis has run.
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert!(AnalysisSession::new().current().is_none());
    }

    #[test]
    fn store_overwrites_unconditionally() {
        let mut session = AnalysisSession::new();
        session.store(AnalysisResult::degraded("rust", None, vec!["first".into()]));
        session.store(AnalysisResult::degraded("python", None, vec!["second".into()]));

        let current = session.current().unwrap();
        assert_eq!(current.language, "python");
        assert_eq!(current.warnings, vec!["second".to_string()]);
    }
}

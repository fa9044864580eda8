//! Process-backed engine capability.
//!
//! The inference engine ships as a separate `bigo-engine` binary. A
//! bound capability invokes it per call: source text on stdin, one
//! JSON document on stdout. Two invocation modes exist: the normal
//! `analyze` subcommand, and a raw stdin/stdout envelope for engine
//! builds that predate the subcommand surface.

use crate::engine::binding::EngineCapability;
use crate::engine::error::EngineError;
use crate::engine::wire::RawAnalysis;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Clone, Copy, Debug)]
enum InvocationMode {
    /// `bigo-engine analyze --language <tag>`, code on stdin.
    Subcommand,
    /// Bare spawn with a `{"code": ..., "language": ...}` envelope on
    /// stdin. Last-resort surface, no handshake.
    RawStdio,
}

/// A bound engine entry point backed by an external process.
pub struct ProcessEngine {
    program: PathBuf,
    mode: InvocationMode,
}

impl ProcessEngine {
    pub fn subcommand(program: PathBuf) -> Self {
        Self { program, mode: InvocationMode::Subcommand }
    }

    pub fn raw_stdio(program: PathBuf) -> Self {
        Self { program, mode: InvocationMode::RawStdio }
    }

    async fn run(&self, stdin_payload: &str, args: &[&str]) -> Result<Vec<u8>, EngineError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                EngineError::invocation(format!(
                    "failed to spawn {}: {err}",
                    self.program.display()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(stdin_payload.as_bytes())
                .await
                .map_err(|err| EngineError::invocation(format!("failed to write to engine stdin: {err}")))?;
            // Dropping stdin closes the pipe so the engine sees EOF.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|err| EngineError::invocation(format!("failed to collect engine output: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::invocation(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl EngineCapability for ProcessEngine {
    async fn analyze(&self, code: &str, language: &str) -> Result<RawAnalysis, EngineError> {
        let stdout = match self.mode {
            InvocationMode::Subcommand => {
                self.run(code, &["analyze", "--language", language]).await?
            }
            InvocationMode::RawStdio => {
                let envelope =
                    serde_json::json!({ "code": code, "language": language }).to_string();
                self.run(&envelope, &[]).await?
            }
        };

        serde_json::from_slice(&stdout)
            .map_err(|err| EngineError::malformed(format!("unparseable engine response: {err}")))
    }
}

/// Handshake used by the binding strategies: ask the binary for its
/// capability listing and require the primary `analyze` entry point.
pub(crate) async fn probe_analyze_entry(program: &Path) -> Result<(), EngineError> {
    let output = Command::new(program)
        .arg("capabilities")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|err| {
            EngineError::unavailable(format!("failed to spawn {}: {err}", program.display()))
        })?;

    if !output.status.success() {
        return Err(EngineError::unavailable(format!(
            "{} rejected the capability handshake ({})",
            program.display(),
            output.status
        )));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    if listing.contains("analyze") {
        Ok(())
    } else {
        Err(EngineError::unavailable(format!(
            "{} does not advertise an analyze entry point",
            program.display()
        )))
    }
}

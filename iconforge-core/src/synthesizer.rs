//! Synthesizer Seam - Icons In, Descriptor Out
//!
//! Font synthesis (outline parsing, codepoint assignment, binary encoding)
//! is owned by an external generator. This module only defines the one
//! operation the pipeline needs from it.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;

use crate::descriptor::ResultDescriptor;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Failed to start synthesizer {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Synthesizer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("Invalid result descriptor: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),

    #[error("Synthesis error: {0}")]
    Other(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub font_name: String,
    /// Glob selecting the source icon files
    pub source_pattern: String,
    /// Where the synthesizer writes binary font files
    pub output_dir: PathBuf,
    /// Generator-defined options, passed through untouched
    #[serde(default = "empty_options")]
    pub options: serde_json::Value,
}

pub(crate) fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// A font generator: icons + options in, result descriptor out.
///
/// Binary font files are a side effect written to `request.output_dir`.
pub trait Synthesizer {
    fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> impl Future<Output = Result<ResultDescriptor, SynthesisError>> + Send;
}

/// Runs an external generator program.
///
/// No particular generator is assumed; any program (or wrapper script around
/// a webfont library) works if it follows this calling convention:
///
/// ```text
/// <program> [args..] --font-name N --pattern P --output-dir D --options JSON
/// ```
///
/// - `N` is the requested font family name, `P` the icon glob, `D` the
///   directory the binary fonts (`N.woff2`, `N.woff`, `N.ttf`) go to, and
///   `JSON` the pass-through options object.
/// - On success it exits 0 and prints the result descriptor on stdout:
///   `{"fontName": "...", "glyphsData": {"<key>": {"name": "ns$icon", "codepointHexa": "e901"}}}`.
/// - On failure it exits non-zero; stderr is carried in [`SynthesisError::Failed`].
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn command(&self, request: &SynthesisRequest) -> Result<Command, SynthesisError> {
        let options = serde_json::to_string(&request.options)?;
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--font-name")
            .arg(&request.font_name)
            .arg("--pattern")
            .arg(&request.source_pattern)
            .arg("--output-dir")
            .arg(&request.output_dir)
            .arg("--options")
            .arg(options);
        Ok(command)
    }
}

impl Synthesizer for CommandSynthesizer {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<ResultDescriptor, SynthesisError> {
        log::debug!(
            "Running synthesizer {} for {} ({})",
            self.program.display(),
            request.font_name,
            request.source_pattern
        );

        let output = self
            .command(request)?
            .output()
            .await
            .map_err(|source| SynthesisError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(SynthesisError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let descriptor: ResultDescriptor = serde_json::from_slice(&output.stdout)?;
        Ok(descriptor)
    }
}

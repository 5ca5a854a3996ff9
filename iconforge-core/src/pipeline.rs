//! Generation Pipeline - Single Entry Point
//!
//! synthesize -> render -> write. Nothing is written unless synthesis
//! succeeded; text-file writes never depend on each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::descriptor::ResultDescriptor;
use crate::hashing::compute_job_hash;
use crate::render::{render_css, render_html_document, render_html_tags};
use crate::synthesizer::{empty_options, SynthesisError, SynthesisRequest, Synthesizer};
use crate::writer::{write_file, WriteOutcome};
use crate::ENGINE_VERSION;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Error generating fonts: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub font_name: String,
    pub source_pattern: String,
    /// Binary font destination, handed to the synthesizer
    pub output_dir: PathBuf,
    /// Stylesheet and demo page destination
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    #[serde(default = "empty_options")]
    pub options: serde_json::Value,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl GenerateRequest {
    pub fn new(
        font_name: impl Into<String>,
        source_pattern: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            font_name: font_name.into(),
            source_pattern: source_pattern.into(),
            output_dir: output_dir.into(),
            dist_dir: default_dist_dir(),
            options: empty_options(),
        }
    }

    pub fn dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    pub fn options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }

    fn synthesis_request(&self) -> SynthesisRequest {
        SynthesisRequest {
            font_name: self.font_name.clone(),
            source_pattern: self.source_pattern.clone(),
            output_dir: self.output_dir.clone(),
            options: self.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub engine_version: String,
    pub generated_at: DateTime<Utc>,
    pub font_name: String,
    pub glyph_count: usize,
    /// Absent when rendering a descriptor without synthesis
    #[serde(default)]
    pub job_hash: Option<String>,
    pub files: Vec<WriteOutcome>,
}

impl GenerationReport {
    pub fn all_written(&self) -> bool {
        self.files.iter().all(|f| f.written)
    }

    pub fn failed_files(&self) -> Vec<&WriteOutcome> {
        self.files.iter().filter(|f| !f.written).collect()
    }
}

/// The generation pipeline, generic over the font synthesizer
pub struct FontPipeline<S> {
    synthesizer: S,
}

impl<S: Synthesizer> FontPipeline<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Generate fonts, stylesheet and demo page for one request.
    ///
    /// The synthesizer is called exactly once. On failure the error is
    /// logged and returned; no directory is created and no file written.
    pub async fn run(&self, request: &GenerateRequest) -> Result<GenerationReport, PipelineError> {
        let job_hash = compute_job_hash(
            &request.font_name,
            &request.source_pattern,
            &request.options,
            ENGINE_VERSION,
        )?;

        let result = match self.synthesizer.synthesize(&request.synthesis_request()).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error generating fonts: {}", e);
                return Err(e.into());
            }
        };

        let mut report = write_outputs(&request.dist_dir, &result).await?;
        report.job_hash = Some(job_hash);
        Ok(report)
    }
}

/// Render and write the stylesheet and demo page for an existing descriptor.
pub async fn write_outputs(
    dist_dir: &Path,
    result: &ResultDescriptor,
) -> Result<GenerationReport, PipelineError> {
    let css = render_css(result);
    let tags = render_html_tags(result);
    let html = render_html_document(result, &tags);

    if let Err(source) = tokio::fs::create_dir_all(dist_dir).await {
        log::error!("Error creating {}: {}", dist_dir.display(), source);
        return Err(PipelineError::OutputDir {
            path: dist_dir.to_path_buf(),
            source,
        });
    }

    let css_path = dist_dir.join(result.css_file_name());
    let html_path = dist_dir.join(result.html_file_name());

    // Independent writes: one failing does not stop the other.
    let (css_outcome, html_outcome) = tokio::join!(
        write_file(&css_path, &css, "CSS"),
        write_file(&html_path, &html, "HTML"),
    );

    Ok(GenerationReport {
        run_id: Uuid::new_v4().to_string(),
        engine_version: ENGINE_VERSION.to_string(),
        generated_at: Utc::now(),
        font_name: result.font_name.clone(),
        glyph_count: result.glyphs_data.len(),
        job_hash: None,
        files: vec![css_outcome, html_outcome],
    })
}

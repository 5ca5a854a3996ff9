//! IconForge Core - Icon Font Compiler
//!
//! Turns a directory of vector icons into a web icon-font bundle:
//! binary fonts (delegated to a synthesizer), a stylesheet mapping
//! `apr-*` classes to glyphs, and a demo page.
//!
//! # Guarantees
//! 1. The synthesizer is called exactly once per run
//! 2. No text file is written if synthesis fails
//! 3. Rendering is deterministic
//! 4. Each file write succeeds or fails on its own

pub mod descriptor;
pub mod synthesizer;
pub mod render;
pub mod writer;
pub mod hashing;
pub mod pipeline;

pub use descriptor::{GlyphRecord, GlyphsData, ResultDescriptor, CLASS_PREFIX, NAME_DELIMITER};
pub use synthesizer::{CommandSynthesizer, SynthesisError, SynthesisRequest, Synthesizer};
pub use render::{render_css, render_html_document, render_html_tags};
pub use writer::{write_file, WriteOutcome};
pub use hashing::{canonical_json, compute_job_hash, sha256_hex};
pub use pipeline::{write_outputs, FontPipeline, GenerateRequest, GenerationReport, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

//! File Writer - One Text File, One Outcome
//!
//! Write failures never escape as errors. Each write is logged and
//! reported on its own so a failed sibling cannot abort it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::hashing::sha256_hex;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static WRITE_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_write_call_count() -> u32 {
    WRITE_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_write_call_count() {
    WRITE_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub label: String,
    pub path: PathBuf,
    pub written: bool,
    /// SHA-256 of the written content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Write `content` to `path`, logging the outcome under `label`.
pub async fn write_file(path: &Path, content: &str, label: &str) -> WriteOutcome {
    #[cfg(feature = "test-hooks")]
    WRITE_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

    match tokio::fs::write(path, content).await {
        Ok(()) => {
            log::info!("{} file created at {}", label, path.display());
            WriteOutcome {
                label: label.to_string(),
                path: path.to_path_buf(),
                written: true,
                hash: Some(sha256_hex(content.as_bytes())),
                error: None,
            }
        }
        Err(e) => {
            log::error!("Error writing {} file: {}", label, e);
            WriteOutcome {
                label: label.to_string(),
                path: path.to_path_buf(),
                written: false,
                hash: None,
                error: Some(e.to_string()),
            }
        }
    }
}

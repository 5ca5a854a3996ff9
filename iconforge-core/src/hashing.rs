//! Hashing - SHA-256 for Generated Files and Runs
//!
//! Identical inputs must produce identical fingerprints.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Serialize with object keys sorted at every depth, no whitespace.
///
/// Array order is kept.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    serde_json::to_string(&sorted(value))
}

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

/// Fingerprint of one generation run
/// job_hash = sha256(font_name + source_pattern + canonical_options + engine_version)
pub fn compute_job_hash(
    font_name: &str,
    source_pattern: &str,
    options: &impl Serialize,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let canonical_options = canonical_json(options)?;
    let combined = format!(
        "{}:{}:{}:{}",
        font_name, source_pattern, canonical_options, engine_version
    );
    Ok(sha256_hex(combined.as_bytes()))
}

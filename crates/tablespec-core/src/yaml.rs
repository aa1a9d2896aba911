//! YAML persistence for UMF documents.
//!
//! Load paths validate at construction, so a malformed document never
//! reaches a generator. Filesystem and YAML syntax errors surface through
//! the corresponding [`crate::Error`] variants unchanged.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Umf;
use crate::validation::validate_umf;

/// Parse and validate a UMF document from YAML text.
pub fn load_umf_from_str(text: &str) -> Result<Umf> {
    let umf: Umf = serde_yaml::from_str(text)?;
    validate_umf(&umf)?;
    Ok(umf)
}

/// Serialize a UMF document to YAML text.
///
/// Absent optional fields are omitted entirely; the persisted form never
/// carries explicit nulls.
pub fn umf_to_string(umf: &Umf) -> Result<String> {
    Ok(serde_yaml::to_string(umf)?)
}

/// Load and validate a UMF document from a YAML file.
pub fn load_umf_from_path(path: &Path) -> Result<Umf> {
    let text = fs::read_to_string(path)?;
    load_umf_from_str(&text)
}

/// Write a UMF document to a YAML file, creating parent directories.
pub fn save_umf_to_path(umf: &Umf, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, umf_to_string(umf)?)?;
    Ok(())
}

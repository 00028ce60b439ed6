// naming.rs
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Lowercase hex SHA-256 of the URL. Used only as a stable, filesystem-safe name.
pub fn url_digest(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

/// `{output_dir}/{url_digest(url)}.json`
pub fn report_path(output_dir: &Path, url: &str) -> PathBuf {
    output_dir.join(format!("{}.json", url_digest(url)))
}

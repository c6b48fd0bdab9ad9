//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use std::io::Write;
use std::path::PathBuf;
use studyspark::config::ApiConfig;
use tempfile::TempDir;

/// Minimal bytes that look like a PDF to the service.
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj <<>> endobj\ntrailer <<>>\n%%EOF\n";

/// Writes `name` into a fresh temp dir.
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create file");
    file.write_all(content).expect("Failed to write file");
    (dir, path)
}

pub fn temp_pdf() -> (TempDir, PathBuf) {
    temp_file("lecture.pdf", PDF_BYTES)
}

/// Client settings pointing at a mock service, with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

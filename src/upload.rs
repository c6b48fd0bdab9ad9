//! PDF selection and validation.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a path could not be selected for upload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please enter a file path")]
    EmptyPath,

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Please choose a PDF file")]
    NotPdf,

    #[error("File is {size_mb} MB; the limit is {limit_mb} MB")]
    TooLarge { size_mb: String, limit_mb: String },

    #[error("Cannot read '{path}': {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// A validated file ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    /// Size as shown next to the file name, e.g. `1.25 MB`.
    pub fn size_label(&self) -> String {
        format!("{} MB", format_megabytes(self.size_bytes))
    }
}

/// Validates `raw` as a PDF no larger than `max_bytes`.
pub fn select_pdf(raw: &str, max_bytes: u64) -> Result<SelectedFile, UploadError> {
    let trimmed = strip_quotes(raw.trim());
    if trimmed.is_empty() {
        return Err(UploadError::EmptyPath);
    }

    let path = expand_home(trimmed);
    let metadata = fs::metadata(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => UploadError::NotFound(path.clone()),
        _ => UploadError::Unreadable {
            path: path.clone(),
            message: err.to_string(),
        },
    })?;

    if !metadata.is_file() {
        return Err(UploadError::NotAFile(path));
    }

    if !is_pdf(&path) {
        return Err(UploadError::NotPdf);
    }

    let size_bytes = metadata.len();
    if size_bytes > max_bytes {
        return Err(UploadError::TooLarge {
            size_mb: format_megabytes(size_bytes),
            limit_mb: format_megabytes(max_bytes),
        });
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SelectedFile {
        path,
        name,
        size_bytes,
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Terminals that support drag-and-drop paste quoted paths.
fn strip_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&vec![b'x'; len]).unwrap();
        path
    }

    #[test]
    fn accepts_small_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.PDF", 2048);
        let selected = select_pdf(path.to_str().unwrap(), 10 * 1024 * 1024).unwrap();
        assert_eq!(selected.name, "notes.PDF");
        assert_eq!(selected.size_bytes, 2048);
        assert_eq!(selected.size_label(), "0.00 MB");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(select_pdf("   ", 1024), Err(UploadError::EmptyPath));
    }

    #[test]
    fn rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.pdf");
        assert!(matches!(
            select_pdf(path.to_str().unwrap(), 1024),
            Err(UploadError::NotFound(_))
        ));
    }

    #[test]
    fn rejects_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            select_pdf(dir.path().to_str().unwrap(), 1024),
            Err(UploadError::NotAFile(_))
        ));
    }

    #[test]
    fn rejects_non_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", 10);
        assert_eq!(
            select_pdf(path.to_str().unwrap(), 1024),
            Err(UploadError::NotPdf)
        );
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "big.pdf", 3 * 1024 * 1024);
        let err = select_pdf(path.to_str().unwrap(), 2 * 1024 * 1024).unwrap_err();
        assert_eq!(err.to_string(), "File is 3.00 MB; the limit is 2.00 MB");
    }

    #[test]
    fn strips_surrounding_quotes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "quoted.pdf", 1);
        let raw = format!("'{}'", path.display());
        assert!(select_pdf(&raw, 1024).is_ok());
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{IngestError, Result};

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

pub struct FileReader;

impl FileReader {
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
    }

    pub async fn read_file(path: &Path) -> Result<String> {
        // a missing path is reported as missing whatever its extension
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(IngestError::MissingInput(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if !SUPPORTED_EXTENSIONS.contains(&extension) {
            // PDF/DOCX conversion happens upstream; we only take its text output
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                ext: extension.to_string(),
            });
        }

        match fs::read_to_string(path).await {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "Read source file");
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(IngestError::MissingInput(path.to_path_buf()))
            }
            Err(source) => Err(IngestError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Read every supported file under `dir`, recursively, ordered by path.
    pub async fn read_directory(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
        if !fs::try_exists(dir).await.unwrap_or(false) {
            return Err(IngestError::MissingInput(dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|source| IngestError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if Self::is_supported(entry.path()) {
                paths.push(entry.into_path());
            } else {
                warn!(path = %entry.path().display(), "Skipping unsupported file");
            }
        }

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let content = Self::read_file(&path).await?;
            files.push((path, content));
        }

        Ok(files)
    }
}

pub mod clean;
pub mod error;
pub mod reader;

pub use clean::clean_text;
pub use error::{IngestError, Result};
pub use reader::FileReader;

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate a stable document ID from file path
pub fn generate_doc_id(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16])
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceDocument {
    pub doc_id: String,
    pub path: PathBuf,
    pub text: String,
}

impl SourceDocument {
    pub fn new(path: PathBuf, raw: &str) -> Self {
        let doc_id = generate_doc_id(&path.to_string_lossy());
        Self {
            doc_id,
            path,
            text: clean_text(raw),
        }
    }
}

/// Ordered collection of cleaned source documents for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    pub documents: Vec<SourceDocument>,
}

impl Corpus {
    /// All document texts separated by a blank line.
    pub fn combined_text(&self) -> String {
        self.documents
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Ingest a single file
pub async fn ingest_file(file_path: &Path) -> Result<SourceDocument> {
    let content = FileReader::read_file(file_path).await?;
    Ok(SourceDocument::new(file_path.to_path_buf(), &content))
}

/// Ingest entire directory
pub async fn ingest_directory(dir_path: &Path) -> Result<Vec<SourceDocument>> {
    let files = FileReader::read_directory(dir_path).await?;

    Ok(files
        .into_iter()
        .map(|(path, content)| SourceDocument::new(path, &content))
        .collect())
}

/// Ingest a mix of files and directories, in the order given.
pub async fn ingest_paths(paths: &[PathBuf]) -> Result<Corpus> {
    let mut corpus = Corpus::default();

    for path in paths {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IngestError::MissingInput(path.clone()));
            }
            Err(source) => {
                return Err(IngestError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        if metadata.is_dir() {
            corpus.documents.extend(ingest_directory(path).await?);
        } else {
            corpus.documents.push(ingest_file(path).await?);
        }
    }

    let chars: usize = corpus.documents.iter().map(|d| d.text.chars().count()).sum();
    info!(documents = corpus.len(), chars, "Ingested corpus");

    Ok(corpus)
}

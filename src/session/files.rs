use std::io;
use std::path::Path;

use bytes::Bytes;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: usize,
}

/// Uploaded files keyed by name, in first-upload order. Re-uploading a name
/// replaces its content in place.
#[derive(Debug, Clone, Default)]
pub struct UploadedFileSet {
    files: Vec<UploadedFile>,
}

impl UploadedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_files<I, N>(mut self, new_files: I) -> Self
    where
        I: IntoIterator<Item = (N, Bytes)>,
        N: Into<String>,
    {
        for (name, content) in new_files {
            self.insert(name.into(), content);
        }
        self
    }

    pub fn insert(&mut self, name: String, content: Bytes) {
        match self.files.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.content = content,
            None => self.files.push(UploadedFile { name, content }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.content)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    pub fn summaries(&self) -> Vec<FileSummary> {
        self.files
            .iter()
            .map(|f| FileSummary {
                name: f.name.clone(),
                size_bytes: f.content.len(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Reads every regular file directly inside `dir`, sorted by file name.
/// Subdirectories are skipped; a missing directory is an error.
#[tracing::instrument(name = "files.load_samples", fields(files.count))]
pub async fn load_sample_files(dir: &Path) -> io::Result<Vec<(String, Bytes)>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let content = tokio::fs::read(entry.path()).await?;
        files.push((name, Bytes::from(content)));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::Span::current().record("files.count", files.len());

    Ok(files)
}

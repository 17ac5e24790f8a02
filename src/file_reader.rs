use crate::reader::TextReader;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileReader {
    path: PathBuf,
}

impl FileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextReader for FileReader {
    fn read(&self) -> Result<String> {
        let raw = read_whole(&self.path)
            .with_context(|| format!("Failed to read text file: {}", self.path.display()))?;
        let content = normalize_newlines(&raw);

        debug!(path = %self.path.display(), bytes = content.len(), "read text file");
        Ok(content)
    }
}

fn read_whole(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Universal newlines: `\r\n` and lone `\r` both become `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

use anyhow::Result;

/// Source of a complete text document, read in one go
pub trait TextReader {
    /// Return the entire contents as a single string
    fn read(&self) -> Result<String>;
}

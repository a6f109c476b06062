//! File fixtures backed by a temporary directory

use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates fixture files in a private temporary directory
pub struct TestFileBuilder {
    dir: TempDir,
    generated_files: Vec<PathBuf>,
}

impl TestFileBuilder {
    /// Create a builder backed by a fresh temporary directory
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            generated_files: Vec::new(),
        })
    }

    /// Path inside the base directory, without creating anything
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write UTF-8 text
    pub fn text_file(&mut self, name: &str, content: &str) -> io::Result<PathBuf> {
        self.bytes_file(name, content.as_bytes())
    }

    /// Write raw bytes
    pub fn bytes_file(&mut self, name: &str, content: &[u8]) -> io::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        self.generated_files.push(path.clone());
        Ok(path)
    }

    /// Write text encoded as latin-1; panics on characters above U+00FF
    pub fn latin1_file(&mut self, name: &str, content: &str) -> io::Result<PathBuf> {
        let bytes: Vec<u8> = content
            .chars()
            .map(|c| u8::try_from(u32::from(c)).expect("character outside latin-1"))
            .collect();
        self.bytes_file(name, &bytes)
    }

    /// Create a zero-length file
    pub fn empty_file(&mut self, name: &str) -> io::Result<PathBuf> {
        self.bytes_file(name, &[])
    }

    /// Create a file of exactly `size` NUL bytes
    pub fn sized_file(&mut self, name: &str, size: u64) -> io::Result<PathBuf> {
        let path = self.path(name);
        let file = fs::File::create(&path)?;
        // Sparse extension keeps multi-megabyte fixtures cheap
        file.set_len(size)?;
        self.generated_files.push(path.clone());
        Ok(path)
    }

    /// Create a subdirectory
    pub fn directory(&mut self, name: &str) -> io::Result<PathBuf> {
        let path = self.path(name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Files created so far, in creation order
    pub fn generated_files(&self) -> &[PathBuf] {
        &self.generated_files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_file_round_trip() {
        let mut builder = TestFileBuilder::new().unwrap();
        let path = builder.text_file("a.txt", "hello").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
        assert_eq!(builder.generated_files().len(), 1);
    }

    #[test]
    fn test_latin1_file_bytes() {
        let mut builder = TestFileBuilder::new().unwrap();
        let path = builder.latin1_file("l.txt", "é").unwrap();
        assert_eq!(fs::read(path).unwrap(), vec![0xE9]);
    }

    #[test]
    fn test_sized_file() {
        let mut builder = TestFileBuilder::new().unwrap();
        let path = builder.sized_file("big.txt", 4096).unwrap();
        assert_eq!(fs::metadata(path).unwrap().len(), 4096);
    }

    #[test]
    fn test_nested_file_creates_parents() {
        let mut builder = TestFileBuilder::new().unwrap();
        let path = builder.text_file("deep/er/x.md", "#").unwrap();
        assert!(path.exists());
    }
}

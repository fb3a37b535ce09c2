//! The append-only output document and its block shapes.

use crate::error::{Result, TreecatError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 50;

/// Buffered text sink for one run. Created (truncating any previous content)
/// once, written sequentially, and closed through [`OutputDocument::finish`].
pub struct OutputDocument {
    writer: BufWriter<File>,
    path: PathBuf,
    bytes_written: u64,
}

impl OutputDocument {
    /// Create or truncate the document at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| TreecatError::create_error(path, e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            bytes_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| TreecatError::write_error(&self.path, e))?;
        self.bytes_written += text.len() as u64;
        Ok(())
    }

    /// Section banner: the role name upper-cased between separator lines.
    pub fn write_banner(&mut self, role: &str) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        self.write_str(&format!("\n\n{rule}\n{}\n{rule}\n\n", role.to_uppercase()))
    }

    /// Header comment for one file in plain mode.
    pub fn write_file_header(&mut self, display: &str) -> Result<()> {
        self.write_str(&format!("\n/* File: {display} */\n"))
    }

    /// Two-line service/file header for one file in grouped mode.
    pub fn write_group_header(&mut self, service: &str, file_name: &str) -> Result<()> {
        self.write_str(&format!(
            "\n\n/* Service: {service} */\n/* File: {file_name} */\n"
        ))
    }

    /// Verbatim file content plus the trailing newline separator.
    pub fn write_content(&mut self, content: &str) -> Result<()> {
        self.write_str(content)?;
        self.write_str("\n")
    }

    /// Flush and close the document, returning the number of bytes written.
    pub fn finish(mut self) -> Result<u64> {
        self.writer
            .flush()
            .map_err(|e| TreecatError::write_error(&self.path, e))?;
        Ok(self.bytes_written)
    }
}

//! Run counters for an aggregation pass.

/// What one run did: files merged, files skipped over encoding failures,
/// section banners written, and bytes written to the output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    files_merged: usize,
    files_skipped: usize,
    groups_written: usize,
    bytes_written: u64,
}

impl MergeSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one merged file.
    pub fn record_merged(&mut self) {
        self.files_merged += 1;
    }

    /// Count one file skipped over an encoding failure.
    pub fn record_skipped(&mut self) {
        self.files_skipped += 1;
    }

    /// Count one section banner.
    pub fn record_group(&mut self) {
        self.groups_written += 1;
    }

    /// Set the final output size.
    pub fn set_bytes_written(&mut self, bytes: u64) {
        self.bytes_written = bytes;
    }

    pub fn files_merged(&self) -> usize {
        self.files_merged
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }

    pub fn groups_written(&self) -> usize {
        self.groups_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Total number of files the pass considered for output.
    pub fn files_seen(&self) -> usize {
        self.files_merged + self.files_skipped
    }

    /// Check if the pass merged nothing.
    pub fn is_empty(&self) -> bool {
        self.files_merged == 0
    }
}

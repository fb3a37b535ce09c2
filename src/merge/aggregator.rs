//! The aggregation pass: walk the tree, filter, concatenate.

use crate::config::MergeConfig;
use crate::discovery::{DirectoryWalker, ExcludeFilter, WalkConfig};
use crate::error::{Result, TreecatError};
use crate::merge::document::OutputDocument;
use crate::merge::record::{FileRecord, service_name};
use crate::merge::summary::MergeSummary;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Single-pass directory content aggregator.
///
/// One run walks the configured root depth-first, prunes excluded directories,
/// selects files by extension and role, and appends each file behind an
/// identifying header to the output document. The pass is sequential and
/// synchronous; the document is the only side effect.
pub struct Aggregator {
    config: MergeConfig,
}

impl Aggregator {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Run the full pass and return the summary.
    ///
    /// A missing or non-directory root and any output-write failure abort the
    /// run; a file with invalid UTF-8 is skipped with a diagnostic.
    pub fn run(&self) -> Result<MergeSummary> {
        let root = &self.config.root;
        if !root.exists() {
            return Err(TreecatError::RootNotFound(root.clone()));
        }
        if !root.is_dir() {
            return Err(TreecatError::NotADirectory(root.clone()));
        }

        info!(
            root = %root.display(),
            output = %self.config.output.display(),
            "starting merge"
        );

        let mut document = OutputDocument::create(&self.config.output)?;
        let mut summary = MergeSummary::new();

        // The freshly created document lives until finish(), so it can be
        // canonicalized here and skipped if the walk rediscovers it.
        let own_output = fs::canonicalize(&self.config.output).ok();

        if self.config.group_by_role {
            self.run_grouped(&mut document, &mut summary, own_output.as_deref())?;
        } else {
            self.run_plain(&mut document, &mut summary, own_output.as_deref())?;
        }

        let bytes = document.finish()?;
        summary.set_bytes_written(bytes);

        info!(
            merged = summary.files_merged(),
            skipped = summary.files_skipped(),
            bytes,
            "merge finished"
        );
        Ok(summary)
    }

    /// Plain mode: one traversal, a `File:` header per member.
    fn run_plain(
        &self,
        document: &mut OutputDocument,
        summary: &mut MergeSummary,
        own_output: Option<&Path>,
    ) -> Result<()> {
        let walker = self.walker(None);
        for batch in walker.walk(&self.config.root) {
            for path in &batch.files {
                let record = FileRecord::new(path, &self.config.root);
                self.append_file(document, summary, &record, None, own_output)?;
            }
        }
        Ok(())
    }

    /// Grouped mode: one banner and one traversal per role, in role order,
    /// with a service/file header per member. Banners are written even when a
    /// role has no members.
    fn run_grouped(
        &self,
        document: &mut OutputDocument,
        summary: &mut MergeSummary,
        own_output: Option<&Path>,
    ) -> Result<()> {
        for role in &self.config.roles {
            document.write_banner(role)?;
            summary.record_group();

            let walker = self.walker(Some(role.clone()));
            for batch in walker.walk(&self.config.root) {
                let service = service_name(&batch.dir, &self.config.root);
                for path in &batch.files {
                    let record = FileRecord::new(path, &self.config.root);
                    self.append_file(document, summary, &record, Some(&service), own_output)?;
                }
            }
        }
        Ok(())
    }

    fn walker(&self, role: Option<String>) -> DirectoryWalker {
        let roles: Vec<String> = match role {
            Some(role) => vec![role],
            None => self.config.roles.clone(),
        };

        let walk_config = WalkConfig::new(self.config.extensions.iter().cloned())
            .with_role_filters(roles)
            .with_follow_symlinks(self.config.follow_symlinks);

        DirectoryWalker::new(walk_config).with_exclude_filter(ExcludeFilter::new(
            &self.config.root,
            self.config.exclude_dirs.iter().cloned(),
        ))
    }

    /// Append one file: header, verbatim content, trailing newline.
    fn append_file(
        &self,
        document: &mut OutputDocument,
        summary: &mut MergeSummary,
        record: &FileRecord,
        service: Option<&str>,
        own_output: Option<&Path>,
    ) -> Result<()> {
        if own_output.is_some() && fs::canonicalize(&record.path).ok().as_deref() == own_output {
            debug!(path = %record.path.display(), "not aggregating the output document itself");
            return Ok(());
        }

        let bytes =
            fs::read(&record.path).map_err(|e| TreecatError::read_error(&record.path, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                warn!(path = %record.path.display(), "invalid UTF-8, skipping");
                eprintln!(
                    "{} unable to read {} as UTF-8, skipping",
                    "warning:".yellow().bold(),
                    record.path.display()
                );
                summary.record_skipped();
                return Ok(());
            }
        };

        if !self.config.quiet {
            println!("Adding: {}", record.display);
        }
        debug!(path = %record.path.display(), "adding file");

        match service {
            Some(service) => document.write_group_header(service, &record.file_name)?,
            None => document.write_file_header(&record.display)?,
        }
        document.write_content(&content)?;
        summary.record_merged();
        Ok(())
    }
}

/// Convenience entry point: run one pass with the given configuration.
pub fn aggregate(config: MergeConfig) -> Result<MergeSummary> {
    Aggregator::new(config).run()
}

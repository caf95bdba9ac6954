//! Writes resolved file targets into a project

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ShelfError};
use crate::resolver::FileTarget;

/// Writer configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterConfig {
    /// Replace files that already exist with content
    pub overwrite: bool,
    /// Report what would happen without touching the file system
    pub dry_run: bool,
}

/// What the writer did (or would do) with each target
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Targets left alone because a non-empty file was already there
    pub skipped: Vec<PathBuf>,
    pub dry_run: bool,
}

impl WriteReport {
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}

/// Copies file targets under a destination root.
///
/// Existing non-empty files are skipped unless `overwrite` is set. There is
/// no rollback: an IO failure leaves earlier files in place.
#[derive(Debug, Default)]
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn write(&self, targets: &[FileTarget], root: &Path) -> Result<WriteReport> {
        // Reject every unsafe path before the first write
        for target in targets {
            check_relative(&target.relative_path)?;
        }

        let mut report = WriteReport {
            dry_run: self.config.dry_run,
            ..Default::default()
        };

        for target in targets {
            let path = root.join(&target.relative_path);

            if !self.config.overwrite && has_content(&path) {
                debug!("Skipping existing file: {:?}", path);
                report.skipped.push(path);
                continue;
            }

            if self.config.dry_run {
                debug!("Would write {:?}", path);
                report.written.push(path);
                continue;
            }

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| ShelfError::io(parent, e))?;
            }
            fs::write(&path, &target.content).map_err(|e| ShelfError::io(&path, e))?;
            debug!("Wrote {} ({} bytes)", path.display(), target.content.len());
            report.written.push(path);
        }

        info!(
            "{} {} files to {:?}, skipped {}",
            if self.config.dry_run {
                "Would write"
            } else {
                "Wrote"
            },
            report.written.len(),
            root,
            report.skipped.len()
        );
        Ok(report)
    }
}

/// Existence plus non-empty; content is not compared
pub fn has_content(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

fn check_relative(relative: &str) -> Result<()> {
    let path = Path::new(relative);
    let safe = !relative.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if safe {
        Ok(())
    } else {
        Err(ShelfError::UnsafePath {
            path: relative.to_string(),
        })
    }
}

//! Clean command implementation

use std::fs;
use std::path::{Path, PathBuf};

use super::Orchestrator;
use crate::error::OrchestratorError;
use crate::utils::paths::{dir_size, format_size};
use crate::utils::terminal::{print_info, print_success, print_warning};

/// What `clean` found at the build directory path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// The directory existed and was removed; carries the bytes freed
    Removed(u64),
    /// Nothing at the path
    Missing,
    /// Something other than a directory sits at the path and was left alone
    NotADirectory,
}

impl Orchestrator<'_> {
    /// Remove the build directory if it exists. Never fails on absence.
    pub fn clean(&self) -> Result<CleanOutcome, OrchestratorError> {
        let build_dir = &self.settings.build_dir;

        if !build_dir.exists() {
            print_info("Build directory does not exist.");
            return Ok(CleanOutcome::Missing);
        }

        if !build_dir.is_dir() {
            print_warning(&format!(
                "{} is not a directory, leaving it in place",
                build_dir.display()
            ));
            return Ok(CleanOutcome::NotADirectory);
        }

        self.ensure_disposable(build_dir)?;

        let size = dir_size(build_dir);
        fs::remove_dir_all(build_dir).map_err(|source| OrchestratorError::Filesystem {
            action: "remove",
            path: build_dir.clone(),
            source,
        })?;

        print_success(&format!(
            "Cleaned build directory. ({} freed)",
            format_size(size)
        ));
        Ok(CleanOutcome::Removed(size))
    }

    /// Fail unless `build_dir` is disjoint from the sources and the working directory
    fn ensure_disposable(&self, build_dir: &Path) -> Result<(), OrchestratorError> {
        let canonical = fs::canonicalize(build_dir).map_err(|source| {
            OrchestratorError::Filesystem {
                action: "resolve",
                path: build_dir.to_path_buf(),
                source,
            }
        })?;

        let protected: Vec<PathBuf> = [
            fs::canonicalize(&self.settings.source_dir).ok(),
            std::env::current_dir().and_then(fs::canonicalize).ok(),
        ]
        .into_iter()
        .flatten()
        .collect();

        match protected.into_iter().find(|dir| dir.starts_with(&canonical)) {
            Some(protected) => Err(OrchestratorError::UnsafeBuildDir {
                path: build_dir.to_path_buf(),
                protected,
            }),
            None => Ok(()),
        }
    }
}

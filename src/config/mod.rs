//! Configuration layering: built-in defaults, then exprbuild.toml, then CLI flags

mod exprbuild_toml;

use std::path::{Path, PathBuf};

use crate::error::OrchestratorError;

use exprbuild_toml::ExprbuildConfig;

/// Default build output directory
pub const DEFAULT_BUILD_DIR: &str = ".build";

/// Default source directory
pub const DEFAULT_SOURCE_DIR: &str = ".";

/// Default executable base name produced by the project
pub const DEFAULT_EXECUTABLE: &str = "expr_exe";

/// Default CMake program, looked up on PATH
pub const DEFAULT_CMAKE: &str = "cmake";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub build_dir: PathBuf,
    pub source_dir: PathBuf,
    pub executable: String,
    pub cmake: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            executable: DEFAULT_EXECUTABLE.to_string(),
            cmake: PathBuf::from(DEFAULT_CMAKE),
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub cmake: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings for a project rooted at `project_dir`.
    ///
    /// An explicit `--config` file must exist; the default `exprbuild.toml`
    /// is optional.
    pub fn resolve(project_dir: &Path, overrides: Overrides) -> Result<Self, OrchestratorError> {
        let file = match &overrides.config_file {
            Some(path) => Some(ExprbuildConfig::load_from_path(path)),
            None => ExprbuildConfig::load_optional(project_dir).transpose(),
        }
        .transpose()
        .map_err(OrchestratorError::Config)?;

        let mut settings = Self::default();
        if let Some(file) = file {
            settings.apply_file(file);
        }
        settings.apply_overrides(overrides);
        Ok(settings)
    }

    fn apply_file(&mut self, file: ExprbuildConfig) {
        if let Some(dir) = file.build.dir {
            self.build_dir = dir;
        }
        if let Some(source) = file.build.source {
            self.source_dir = source;
        }
        if let Some(executable) = file.run.executable {
            self.executable = executable;
        }
        if let Some(cmake) = file.tools.cmake {
            self.cmake = cmake;
        }
    }

    fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(dir) = overrides.build_dir {
            self.build_dir = dir;
        }
        if let Some(source) = overrides.source_dir {
            self.source_dir = source;
        }
        if let Some(cmake) = overrides.cmake {
            self.cmake = cmake;
        }
    }
}

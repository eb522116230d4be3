//! exprbuild.toml configuration parsing
//!
//! Every section and key is optional; anything left out falls back to the
//! built-in defaults in [`super::Settings`].
//!
//! ```toml
//! [build]
//! dir = ".build"
//! source = "."
//!
//! [run]
//! executable = "expr_exe"
//!
//! [tools]
//! cmake = "/opt/cmake/bin/cmake"
//! ```

use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "exprbuild.toml";

/// Root configuration from exprbuild.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExprbuildConfig {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub run: RunSection,

    #[serde(default)]
    pub tools: ToolsSection,
}

/// `[build]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Build output directory, owned by `clean`
    pub dir: Option<PathBuf>,

    /// Directory holding the top-level CMakeLists.txt
    pub source: Option<PathBuf>,
}

/// `[run]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Executable base name, without platform suffix
    pub executable: Option<String>,
}

/// `[tools]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// CMake program name or path
    pub cmake: Option<PathBuf>,
}

impl ExprbuildConfig {
    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load `exprbuild.toml` from `dir` if present
    pub fn load_optional(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load_from_path(path).map(Some)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse exprbuild.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if is_blank_path(self.build.dir.as_deref()) {
            bail!("[build] dir must not be empty");
        }
        if matches!(self.build.dir.as_deref(), Some(dir) if is_project_or_parent(dir)) {
            bail!("[build] dir must name a dedicated output directory, not the project or its parent");
        }
        if is_blank_path(self.build.source.as_deref()) {
            bail!("[build] source must not be empty");
        }
        if matches!(self.run.executable.as_deref(), Some(name) if name.trim().is_empty()) {
            bail!("[run] executable must not be empty");
        }
        if is_blank_path(self.tools.cmake.as_deref()) {
            bail!("[tools] cmake must not be empty");
        }
        Ok(())
    }
}

fn is_blank_path(path: Option<&Path>) -> bool {
    matches!(path, Some(p) if p.to_string_lossy().trim().is_empty())
}

/// `.`, `..`, `./..` and the like
fn is_project_or_parent(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::CurDir | Component::ParentDir))
}

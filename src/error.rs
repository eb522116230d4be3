//! Error types and helpers for user-friendly error messages
//!
//! Every failure that ends an invocation is an [`OrchestratorError`]. Each
//! variant knows the process exit code it maps to, so callers that branch on
//! the exit status see exactly what the external tool reported.

use std::path::PathBuf;

use thiserror::Error;

use crate::build::CMakeStep;
use crate::utils::terminal::print_error;

/// Exit code used when a required tool cannot be found on PATH
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Exit code used when the OS refuses to start a process
pub const EXIT_SPAWN_FAILED: i32 = 126;

/// Exit code for orchestrator-side failures (config, filesystem)
pub const EXIT_FAILURE: i32 = 1;

/// Terminal failures of a single invocation
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// A configure or compile step exited non-zero
    #[error("CMake {step} step failed with exit code {code}")]
    ExternalTool { step: CMakeStep, code: i32 },

    /// The built executable exited non-zero
    #[error("{} exited with code {code}", path.display())]
    ExecutableFailed { path: PathBuf, code: i32 },

    /// A required tool is not on PATH
    #[error("Missing tool: {tool}")]
    ToolNotFound { tool: String, hint: &'static str },

    /// The OS failed to start a process
    #[error("Failed to execute {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A filesystem operation on the build directory failed
    #[error("Failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build directory holds the sources or the working directory
    #[error("Refusing to remove {}: it contains {}", path.display(), protected.display())]
    UnsafeBuildDir { path: PathBuf, protected: PathBuf },

    /// Configuration could not be loaded
    #[error("Configuration error: {0:#}")]
    Config(#[source] anyhow::Error),
}

impl OrchestratorError {
    /// Create a missing tool error with an install hint
    pub fn missing_tool(tool: impl Into<String>, hint: &'static str) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            hint,
        }
    }

    /// Process exit code this error terminates with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ExternalTool { code, .. } | Self::ExecutableFailed { code, .. } => *code,
            Self::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            Self::Spawn { .. } => EXIT_SPAWN_FAILED,
            Self::Filesystem { .. } | Self::UnsafeBuildDir { .. } | Self::Config(_) => {
                EXIT_FAILURE
            }
        }
    }

    /// Short message printed to stderr when the invocation ends with this error
    pub fn headline(&self) -> String {
        match self {
            Self::ExternalTool { .. } => "Build failed.".to_string(),
            Self::ExecutableFailed { .. } => "Executable returned an error.".to_string(),
            other => other.to_string(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self, verbose: bool) {
        use console::style;

        print_error(&self.headline());

        match self {
            Self::ExternalTool { .. } | Self::ExecutableFailed { .. } => {
                if verbose {
                    eprintln!("  {}", self);
                }
            }
            Self::ToolNotFound { hint, .. } => {
                eprintln!("{}: {}", style("hint").yellow().bold(), hint);
            }
            Self::Spawn { source, .. } | Self::Filesystem { source, .. } => {
                eprintln!("  caused by: {}", source);
            }
            Self::UnsafeBuildDir { .. } => {
                eprintln!(
                    "{}: point --build-dir or [build] dir at a dedicated output directory",
                    style("hint").yellow().bold()
                );
            }
            Self::Config(_) => {}
        }
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake\n\
         \n\
         Or point exprbuild at a specific binary with --cmake or EXPRBUILD_CMAKE."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_codes_are_preserved() {
        let err = OrchestratorError::ExternalTool {
            step: CMakeStep::Configure,
            code: 2,
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.headline(), "Build failed.");

        let err = OrchestratorError::ExecutableFailed {
            path: PathBuf::from(".build/bin/expr_exe"),
            code: 42,
        };
        assert_eq!(err.exit_code(), 42);
        assert_eq!(err.headline(), "Executable returned an error.");
    }

    #[test]
    fn test_orchestrator_failure_codes() {
        let err = OrchestratorError::missing_tool("cmake", hints::cmake());
        assert_eq!(err.exit_code(), EXIT_TOOL_NOT_FOUND);
        assert!(err.headline().contains("cmake"));

        let err = OrchestratorError::Config(anyhow::anyhow!("bad"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}

//! CLI argument parsing using clap derive macros

use std::path::PathBuf;

use clap::Parser;

use crate::commands::{Action, Orchestrator};
use crate::config::{Overrides, Settings};
use crate::error::OrchestratorError;
use crate::exec::SystemRunner;
use crate::utils::terminal::disable_colors;

/// exprbuild - clean, build or run the ExpressionTree project
///
/// Wraps CMake: `build` configures in Release, `build-debug` in Debug, and
/// `run` rebuilds in Debug before launching `<build-dir>/bin/expr_exe`.
#[derive(Parser, Debug)]
#[command(name = "exprbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to ./exprbuild.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build output directory
    #[arg(long, value_name = "DIR", env = "EXPRBUILD_BUILD_DIR")]
    pub build_dir: Option<PathBuf>,

    /// Directory containing the top-level CMakeLists.txt
    #[arg(long, value_name = "DIR", env = "EXPRBUILD_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// CMake program to invoke
    #[arg(long, value_name = "PROGRAM", env = "EXPRBUILD_CMAKE")]
    pub cmake: Option<PathBuf>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<(), OrchestratorError> {
        // Set up terminal colors
        if self.no_color {
            disable_colors();
        }

        let project_dir = std::env::current_dir().map_err(|source| {
            OrchestratorError::Filesystem {
                action: "read",
                path: PathBuf::from("."),
                source,
            }
        })?;

        let overrides = Overrides {
            config_file: self.config,
            build_dir: self.build_dir,
            source_dir: self.source_dir,
            cmake: self.cmake,
        };
        let settings = Settings::resolve(&project_dir, overrides)?;

        if self.verbose {
            eprintln!("Build directory: {}", settings.build_dir.display());
            eprintln!("Source directory: {}", settings.source_dir.display());
        }

        let runner = SystemRunner::new(self.verbose);
        Orchestrator::new(settings, &runner)
            .verbose(self.verbose)
            .execute(self.action)
    }
}

//! Command implementations
//!
//! The [`Orchestrator`] owns the resolved settings and the process runner for
//! one invocation. Each action lives in its own module as an `impl` block.

pub mod build;
pub mod clean;
pub mod run;

use clap::ValueEnum;

use self::clean::CleanOutcome;
use self::run::RunOutcome;

use crate::build::BuildType;
use crate::config::Settings;
use crate::error::OrchestratorError;
use crate::exec::ProcessRunner;
use crate::utils::paths::Platform;

/// Action selected by the single positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Remove the build directory
    Clean,
    /// Configure and compile in Release mode
    Build,
    /// Configure and compile in Debug mode
    BuildDebug,
    /// Build in Debug mode, then run the executable
    Run,
}

/// Drives the external tools for a single invocation
pub struct Orchestrator<'a> {
    settings: Settings,
    runner: &'a dyn ProcessRunner,
    platform: Platform,
    verbose: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(settings: Settings, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            settings,
            runner,
            platform: Platform::current(),
            verbose: false,
        }
    }

    /// Report outcome details on stderr
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Use a specific platform's executable naming instead of the host's
    #[cfg(test)]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Dispatch an action
    pub fn execute(&self, action: Action) -> Result<(), OrchestratorError> {
        match action {
            Action::Clean => {
                let outcome = self.clean()?;
                if self.verbose {
                    if let CleanOutcome::Removed(bytes) = outcome {
                        eprintln!(
                            "Removed {} ({} bytes)",
                            self.settings.build_dir.display(),
                            bytes
                        );
                    }
                }
                Ok(())
            }
            Action::Build => self.build(BuildType::Release),
            Action::BuildDebug => self.build(BuildType::Debug),
            Action::Run => {
                let outcome = self.run()?;
                if self.verbose {
                    match outcome {
                        RunOutcome::Executed(path) => eprintln!("Ran {}", path.display()),
                        RunOutcome::MissingExecutable(path) => {
                            eprintln!("Looked for {}", path.display())
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

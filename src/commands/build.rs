//! Build command implementation

use super::Orchestrator;
use crate::build::{BuildType, CMakeConfig};
use crate::error::OrchestratorError;
use crate::utils::terminal::print_success;

impl Orchestrator<'_> {
    /// CMake invocation for the configured directories
    pub fn cmake(&self, build_type: BuildType) -> CMakeConfig {
        CMakeConfig::new(
            self.settings.cmake.clone(),
            self.settings.source_dir.clone(),
            self.settings.build_dir.clone(),
        )
        .build_type(build_type)
    }

    /// Configure then compile. The first non-zero step ends the build with its exit code.
    pub fn build(&self, build_type: BuildType) -> Result<(), OrchestratorError> {
        self.cmake(build_type).configure_and_build(self.runner)?;
        print_success(&format!("Build completed ({}).", build_type));
        Ok(())
    }
}

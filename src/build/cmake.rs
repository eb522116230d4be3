//! CMake configuration and execution
//!
//! This module builds the argument lists for the CMake configure and compile
//! steps and runs them through a [`ProcessRunner`].

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::error::OrchestratorError;
use crate::exec::ProcessRunner;

/// CMake build type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// One of the two external CMake invocations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CMakeStep {
    Configure,
    Compile,
}

impl fmt::Display for CMakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CMakeStep::Configure => write!(f, "configure"),
            CMakeStep::Compile => write!(f, "build"),
        }
    }
}

/// CMake configuration builder
#[derive(Debug, Clone)]
pub struct CMakeConfig {
    /// CMake program, a bare name looked up on PATH or a path
    program: PathBuf,
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Build type
    build_type: BuildType,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(program: PathBuf, source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            program,
            source_dir,
            build_dir,
            build_type: BuildType::Release,
        }
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Arguments of the configure step: `-S <src> -B <build> -DCMAKE_BUILD_TYPE=<type>`
    pub fn configure_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-S"),
            self.source_dir.clone().into_os_string(),
            OsString::from("-B"),
            self.build_dir.clone().into_os_string(),
            OsString::from(format!("-DCMAKE_BUILD_TYPE={}", self.build_type)),
        ]
    }

    /// Arguments of the compile step: `--build <build>`
    pub fn build_args(&self) -> Vec<OsString> {
        vec![
            OsString::from("--build"),
            self.build_dir.clone().into_os_string(),
        ]
    }

    /// Run CMake configure step
    pub fn configure(&self, runner: &dyn ProcessRunner) -> Result<(), OrchestratorError> {
        self.run_step(runner, CMakeStep::Configure, &self.configure_args())
    }

    /// Run CMake build step
    pub fn build(&self, runner: &dyn ProcessRunner) -> Result<(), OrchestratorError> {
        self.run_step(runner, CMakeStep::Compile, &self.build_args())
    }

    /// Run configure then build; build is skipped when configure fails
    pub fn configure_and_build(&self, runner: &dyn ProcessRunner) -> Result<(), OrchestratorError> {
        self.configure(runner)?;
        self.build(runner)?;
        Ok(())
    }

    fn run_step(
        &self,
        runner: &dyn ProcessRunner,
        step: CMakeStep,
        args: &[OsString],
    ) -> Result<(), OrchestratorError> {
        let result = runner.run(&self.program, args)?;
        if !result.success {
            return Err(OrchestratorError::ExternalTool {
                step,
                code: result.exit_code,
            });
        }
        Ok(())
    }
}

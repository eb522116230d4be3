//! Run command implementation
//!
//! Always rebuilds in Debug mode first, then runs the executable from
//! `<build-dir>/bin` with no arguments.

use std::path::PathBuf;

use super::Orchestrator;
use crate::build::BuildType;
use crate::error::OrchestratorError;
use crate::utils::paths::executable_path;
use crate::utils::terminal::print_info;

/// How a `run` invocation ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The executable ran and exited zero
    Executed(PathBuf),
    /// The build produced no executable at the expected path
    MissingExecutable(PathBuf),
}

impl Orchestrator<'_> {
    /// Expected location of the built executable on this orchestrator's platform
    pub fn executable(&self) -> PathBuf {
        executable_path(
            &self.settings.build_dir,
            &self.settings.executable,
            self.platform,
        )
    }

    /// Debug build, then locate and execute the binary
    pub fn run(&self) -> Result<RunOutcome, OrchestratorError> {
        self.build(BuildType::Debug)?;

        let executable = self.executable();
        if !executable.is_file() {
            print_info("Executable not found. Please build the project first.");
            return Ok(RunOutcome::MissingExecutable(executable));
        }

        let result = self.runner.run(&executable, &[])?;
        if !result.success {
            return Err(OrchestratorError::ExecutableFailed {
                path: executable,
                code: result.exit_code,
            });
        }

        Ok(RunOutcome::Executed(executable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::CMakeStep;
    use crate::commands::testing::FakeRunner;
    use crate::config::Settings;
    use crate::utils::paths::Platform;
    use std::fs;
    use tempfile::TempDir;

    fn settings_in(temp_dir: &TempDir) -> Settings {
        Settings {
            build_dir: temp_dir.path().join(".build"),
            ..Settings::default()
        }
    }

    fn place_executable(temp_dir: &TempDir, name: &str) -> PathBuf {
        let bin_dir = temp_dir.path().join(".build").join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let path = bin_dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_run_forces_debug_configure() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::default();
        Orchestrator::new(settings_in(&temp_dir), &runner)
            .run()
            .unwrap();

        let calls = runner.calls();
        assert!(calls[0].1.contains(&"-DCMAKE_BUILD_TYPE=Debug".to_string()));
        assert!(!calls[0].1.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
    }

    #[test]
    fn test_run_without_executable_is_advisory() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::default();
        let outcome = Orchestrator::new(settings_in(&temp_dir), &runner)
            .with_platform(Platform::Unix)
            .run()
            .unwrap();

        let expected = temp_dir.path().join(".build").join("bin").join("expr_exe");
        assert_eq!(outcome, RunOutcome::MissingExecutable(expected));
        assert_eq!(runner.calls().len(), 2);
    }

    #[test]
    fn test_run_executes_binary() {
        let temp_dir = TempDir::new().unwrap();
        let exe = place_executable(&temp_dir, "expr_exe");

        let runner = FakeRunner::default();
        let outcome = Orchestrator::new(settings_in(&temp_dir), &runner)
            .with_platform(Platform::Unix)
            .run()
            .unwrap();

        assert_eq!(outcome, RunOutcome::Executed(exe.clone()));
        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].0, exe);
        assert!(calls[2].1.is_empty());
    }

    #[test]
    fn test_run_uses_windows_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let exe = place_executable(&temp_dir, "expr_exe.exe");

        let runner = FakeRunner::default();
        let outcome = Orchestrator::new(settings_in(&temp_dir), &runner)
            .with_platform(Platform::Windows)
            .run()
            .unwrap();

        assert_eq!(outcome, RunOutcome::Executed(exe));
    }

    #[test]
    fn test_run_propagates_executable_failure() {
        let temp_dir = TempDir::new().unwrap();
        place_executable(&temp_dir, "expr_exe");

        let runner = FakeRunner::with_codes(&[0, 0, 3]);
        let err = Orchestrator::new(settings_in(&temp_dir), &runner)
            .with_platform(Platform::Unix)
            .run()
            .unwrap_err();

        assert!(matches!(err, OrchestratorError::ExecutableFailed { code: 3, .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_run_stops_when_build_fails() {
        let temp_dir = TempDir::new().unwrap();
        place_executable(&temp_dir, "expr_exe");

        let runner = FakeRunner::with_codes(&[0, 4]);
        let err = Orchestrator::new(settings_in(&temp_dir), &runner)
            .with_platform(Platform::Unix)
            .run()
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::ExternalTool {
                step: CMakeStep::Compile,
                code: 4
            }
        ));
        assert_eq!(runner.calls().len(), 2);
    }
}

//! Path utilities for the build directory layout

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Operating-system family that decides executable naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Executable file suffix for a platform
pub fn executable_suffix(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => ".exe",
        Platform::Unix => "",
    }
}

/// Location of the built executable: `<build_dir>/bin/<name><suffix>`
pub fn executable_path(build_dir: &Path, name: &str, platform: Platform) -> PathBuf {
    build_dir
        .join("bin")
        .join(format!("{}{}", name, executable_suffix(platform)))
}

/// Total size in bytes of all regular files under `path`
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

/// Human readable byte count, e.g. `1.50 KB`
pub fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_executable_suffix() {
        assert_eq!(executable_suffix(Platform::Windows), ".exe");
        assert_eq!(executable_suffix(Platform::Unix), "");
    }

    #[test]
    fn test_executable_path() {
        let build_dir = Path::new(".build");
        assert_eq!(
            executable_path(build_dir, "expr_exe", Platform::Unix),
            Path::new(".build").join("bin").join("expr_exe")
        );
        assert_eq!(
            executable_path(build_dir, "expr_exe", Platform::Windows),
            Path::new(".build").join("bin").join("expr_exe.exe")
        );
    }

    #[test]
    fn test_current_platform() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn test_dir_size() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("bin");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("CMakeCache.txt"), [0u8; 100]).unwrap();
        fs::write(nested.join("expr_exe"), [0u8; 24]).unwrap();

        assert_eq!(dir_size(temp_dir.path()), 124);
        assert_eq!(dir_size(&temp_dir.path().join("missing")), 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}

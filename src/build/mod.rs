//! Native build orchestration
//!
//! ```text
//! exprbuild → build/cmake.rs → cmake -S … -B …  →  cmake --build …
//! ```
//!
//! Everything past the two CMake invocations (toolchain choice, dependency
//! tracking, parallelism) is left to CMake itself.

pub mod cmake;

pub use cmake::{BuildType, CMakeConfig, CMakeStep};

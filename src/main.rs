//! exprbuild - build orchestration for the ExpressionTree project
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → commands/ → build/cmake.rs → cmake (configure, build)
//!                      → exec/ → <build-dir>/bin/expr_exe
//! ```
//!
//! Exit codes of CMake and of the built executable are passed through
//! unchanged.

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = cli.execute() {
        err.display_with_hints(verbose);
        std::process::exit(err.exit_code());
    }
}

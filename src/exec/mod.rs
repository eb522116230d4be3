//! External process execution

pub mod subprocess;

pub use subprocess::{ProcessRunner, SystemRunner};

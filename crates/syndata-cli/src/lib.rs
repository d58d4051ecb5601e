//! CLI building blocks, exposed as a library for integration tests.

pub mod cli;
pub mod commands;
pub mod logging;

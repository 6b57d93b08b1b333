//! Testing infrastructure for labroster integration tests.
//!
//! - `TestWorld`: isolated data directory, config file and a mock backend
//! - `fixtures`: response bodies and mocks for the backend endpoints
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

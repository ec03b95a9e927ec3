// SEA tools - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on core or platform layers.

pub mod constants;
pub mod error;
pub mod log_format;
pub mod logging;
pub mod rotating_file;

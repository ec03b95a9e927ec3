// SEA tools - lib.rs
//
// Library entry point. Other SEA components link against this crate for
// the shared logger and for sample-ID normalisation.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::core::{get_file_name, resolve_sample_id, SampleId};
pub use crate::util::logging::{create_logger, init, Logger, LoggingConfig};

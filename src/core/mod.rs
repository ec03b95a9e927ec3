// SEA tools - core/mod.rs
//
// File-name normalisation for sequencing-pipeline paths.
// Dependencies: util (constants, logging macros only).
// Must NOT depend on: platform, or perform any file I/O.

pub mod path_info;
pub mod sample_id;

pub use sample_id::{get_file_name, normalize, resolve_sample_id, SampleId};

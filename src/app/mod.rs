// SEA tools - app/mod.rs
//
// Application layer driven by the binary.
// Dependencies: core, platform, util.

pub mod resolve;

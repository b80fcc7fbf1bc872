//! Score sheet encoder CLI library surface.

pub mod cli;
pub mod logging;

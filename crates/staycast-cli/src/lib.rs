//! Shared infrastructure for the staycast binary.

pub mod logging;

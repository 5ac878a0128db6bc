//! Test modules for rigcrate-io
//!
//! Settings file parsing, serialization and file round-trips.

pub mod settings_tests;

//! Integration test modules.

mod config_file;
mod lifecycle;

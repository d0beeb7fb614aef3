//! OCO CLI library.
//!
//! Command implementations behind the `oco` binary: inspecting and
//! validating OCO files, creating rigs from templates, extracting icons and
//! editing the OCO config.

pub mod commands;

//! CLI command implementations

pub mod config;
pub mod extract_icon;
pub mod inspect;
pub mod new;
pub mod validate;

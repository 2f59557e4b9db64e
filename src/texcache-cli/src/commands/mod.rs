//! Command handlers for texcache

pub mod generate;
pub mod preview;

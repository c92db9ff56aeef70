//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading

pub mod config;

//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: the format operation and its transforms
//! - Validation: explicit request checking
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
pub mod validation;

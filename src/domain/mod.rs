//! Domain layer - Core formatting types with no infrastructure dependencies
//! 
//! This layer contains:
//! - Entities: Language, FormatRequest, FormatResult
//! - Traits: Transformer abstraction

pub mod entities;
pub mod traits;

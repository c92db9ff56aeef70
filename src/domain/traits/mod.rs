//! Domain traits - Abstractions for transform implementations

pub mod transformer;

pub use transformer::Transformer;

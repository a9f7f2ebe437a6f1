//! Infrastructure layer: adapters for the domain ports.

pub mod random;
pub mod repository;

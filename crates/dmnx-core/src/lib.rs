//! dmnx Core Types and Definitions
//!
//! This crate provides the foundational types for DMN decision requirement
//! graphs as they are held in memory before serialization. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Identity lists**: Reference lists deduplicated by pointer identity ([`identity::IdentityList`])
//! - **Model**: DRG elements, requirements, imports and definitions ([`model`] module)
//! - **Graph**: The pre-serialization model graph of nodes, diagrams and definitions ([`graph`] module)

pub mod error;
pub mod graph;
pub mod identifier;
pub mod identity;
pub mod model;

pub use error::ModelError;

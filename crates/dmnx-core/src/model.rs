//! DMN model types.
//!
//! This module contains the document-side representation of a decision
//! model: the flat element collection and import declarations a
//! [`Definitions`] container holds, and the requirement references that
//! link DRG elements to each other.
//!
//! # Organization
//!
//! - [`definitions`] - The root aggregate: [`Definitions`]
//! - [`element`] - DRG elements: [`DrgElement`], [`ElementKind`], [`ElementBody`]
//! - [`requirement`] - Requirement references: [`AuthorityRequirement`], [`KnowledgeRequirement`], [`InformationRequirement`]
//! - [`import`] - Included model declarations: [`Import`]

pub mod definitions;
pub mod element;
pub mod import;
pub mod requirement;

pub use definitions::*;
pub use element::*;
pub use import::*;
pub use requirement::*;

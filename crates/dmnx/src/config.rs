//! Configuration types for the marshal pass.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`MarshalConfig`] - Controls how the marshal pass reconciles a graph.
//! - [`ImportMatching`] - How propagated imports are matched against existing ones.
//!
//! # Example
//!
//! ```
//! # use dmnx::config::{AppConfig, ImportMatching};
//! let config = AppConfig::default();
//! assert_eq!(config.marshal().import_matching(), ImportMatching::Reference);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Marshal pass configuration section.
    #[serde(default)]
    marshal: MarshalConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given marshal configuration.
    pub fn new(marshal: MarshalConfig) -> Self {
        Self { marshal }
    }

    /// Returns the marshal configuration.
    pub fn marshal(&self) -> &MarshalConfig {
        &self.marshal
    }
}

/// Settings of the marshal pass.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MarshalConfig {
    /// How imports propagated into included models are deduplicated.
    #[serde(default)]
    import_matching: ImportMatching,
}

impl MarshalConfig {
    /// Creates a new [`MarshalConfig`].
    ///
    /// # Arguments
    ///
    /// * `import_matching` - Deduplication policy for propagated imports.
    pub fn new(import_matching: ImportMatching) -> Self {
        Self { import_matching }
    }

    pub fn import_matching(&self) -> ImportMatching {
        self.import_matching
    }
}

/// Deduplication policy for imports propagated into included models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMatching {
    /// An import is already present only if the very same import is.
    #[default]
    Reference,
    /// An import is also considered present when an import with the same
    /// namespace is.
    Namespace,
}

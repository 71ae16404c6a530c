//! Import declarations for included models.

/// A reference from one model document to an externally included model.
///
/// Imports are shared behind `Rc` between the root definitions and the
/// definitions of included models; list membership is by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    name: String,
    namespace: String,
    location_uri: Option<String>,
}

impl Import {
    /// Creates a new import of the model published under `namespace`.
    ///
    /// # Arguments
    ///
    /// * `name` - Local name the importing model uses as prefix
    /// * `namespace` - Namespace of the included model
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            location_uri: None,
        }
    }

    /// Sets the location the included model is loaded from.
    pub fn with_location_uri(mut self, location_uri: impl Into<String>) -> Self {
        self.location_uri = Some(location_uri.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn location_uri(&self) -> Option<&str> {
        self.location_uri.as_deref()
    }
}

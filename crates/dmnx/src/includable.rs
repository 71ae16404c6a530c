//! Listing the models that can still be included into a diagram.
//!
//! A project usually holds several model files. The ones offered for
//! inclusion exclude the diagram's own model and every model it already
//! imports; the rest are turned into [`AssetItem`]s carrying the metadata a
//! picker needs to display them.

use indexmap::IndexMap;
use log::debug;

use dmnx_core::model::Imports;

/// Metadata key holding the model's path in the project.
pub const PATH_METADATA: &str = "path";
/// Metadata key holding the number of DRG elements of the model.
pub const DRG_ELEMENT_COUNT_METADATA: &str = "drg-element-count";
/// Metadata key holding the number of item definitions of the model.
pub const ITEM_DEFINITION_COUNT_METADATA: &str = "item-definition-count";

/// A model found in the project that could be included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedModel {
    model_name: String,
    model_package: String,
    path: String,
    namespace: String,
    drg_elements_count: usize,
    item_definitions_count: usize,
}

impl IncludedModel {
    pub fn new(
        model_name: impl Into<String>,
        model_package: impl Into<String>,
        path: impl Into<String>,
        namespace: impl Into<String>,
        drg_elements_count: usize,
        item_definitions_count: usize,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            model_package: model_package.into(),
            path: path.into(),
            namespace: namespace.into(),
            drg_elements_count,
            item_definitions_count,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn drg_elements_count(&self) -> usize {
        self.drg_elements_count
    }

    pub fn item_definitions_count(&self) -> usize {
        self.item_definitions_count
    }
}

/// A selectable entry describing an includable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetItem {
    text: String,
    sub_text: String,
    value: String,
    metadata: IndexMap<String, String>,
}

impl AssetItem {
    /// The model name.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The model package.
    pub fn sub_text(&self) -> &str {
        &self.sub_text
    }

    /// The model namespace, which identifies the selection.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }
}

impl From<&IncludedModel> for AssetItem {
    fn from(model: &IncludedModel) -> Self {
        let metadata = IndexMap::from([
            (PATH_METADATA.to_string(), model.path().to_string()),
            (
                DRG_ELEMENT_COUNT_METADATA.to_string(),
                model.drg_elements_count().to_string(),
            ),
            (
                ITEM_DEFINITION_COUNT_METADATA.to_string(),
                model.item_definitions_count().to_string(),
            ),
        ]);

        Self {
            text: model.model_name().to_string(),
            sub_text: model.model_package().to_string(),
            value: model.namespace().to_string(),
            metadata,
        }
    }
}

/// Returns the models that can still be included, in their original order.
///
/// A model is excluded when its namespace is `current_namespace` or the
/// namespace of one of `indexed_imports`.
///
/// # Arguments
///
/// * `models` - Models found in the project
/// * `current_namespace` - Namespace of the diagram being edited
/// * `indexed_imports` - Imports the diagram already declares
pub fn includable_models<'a>(
    models: impl IntoIterator<Item = &'a IncludedModel>,
    current_namespace: &str,
    indexed_imports: &Imports,
) -> Vec<AssetItem> {
    let items: Vec<AssetItem> = models
        .into_iter()
        .filter(|model| model.namespace() != current_namespace)
        .filter(|model| {
            !indexed_imports
                .iter()
                .any(|import| import.namespace() == model.namespace())
        })
        .map(AssetItem::from)
        .collect();

    debug!(count = items.len(); "Collected includable models");
    items
}

#![forbid(unsafe_code)]

//! Widget registry: pairs model names with view factories.
//!
//! A hosting application fills the registry once at startup (see
//! [`register_label`]) and afterwards resolves views for models by model
//! name. Registration is explicit; there is no implicit or conditional
//! export path.
//!
//! # Usage
//!
//! ```
//! use labelkit_model::LabelModel;
//! use labelkit_widgets::registry::{WidgetRegistry, register_label};
//!
//! let mut registry = WidgetRegistry::new();
//! register_label(&mut registry).unwrap();
//!
//! let model = LabelModel::new();
//! let mut view = registry.instantiate("LabelModel", &model).unwrap();
//! view.mount();
//! assert_eq!(view.text(), "Hello World");
//! ```

use std::collections::HashMap;

use labelkit_model::{LabelModel, WidgetIdent};

use crate::label::LabelView;

/// Constructs a view for a model.
pub type ViewFactory = Box<dyn Fn(&LabelModel) -> LabelView>;

/// Registry failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A widget with this model name is already registered.
    Duplicate(String),
    /// No widget is registered under this model name.
    UnknownModel(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(name) => write!(f, "model '{name}' already registered"),
            Self::UnknownModel(name) => write!(f, "no widget registered for model '{name}'"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// A registered widget: its identity plus the factory producing views.
pub struct WidgetEntry {
    ident: WidgetIdent,
    factory: ViewFactory,
}

impl WidgetEntry {
    /// The identity this entry was registered under.
    #[must_use]
    pub fn ident(&self) -> &WidgetIdent {
        &self.ident
    }

    /// Construct a view for the given model.
    #[must_use]
    pub fn instantiate(&self, model: &LabelModel) -> LabelView {
        (self.factory)(model)
    }
}

impl std::fmt::Debug for WidgetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetEntry")
            .field("ident", &self.ident)
            .finish_non_exhaustive()
    }
}

/// Map from model name to registered widget.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    entries: HashMap<String, WidgetEntry>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget under its ident's model name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the model name is taken.
    pub fn register(
        &mut self,
        ident: WidgetIdent,
        factory: impl Fn(&LabelModel) -> LabelView + 'static,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(&ident.model_name) {
            return Err(RegistryError::Duplicate(ident.model_name));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            model = %ident.model_name,
            view = %ident.view_name,
            module = %ident.module,
            "widget_registered"
        );

        self.entries.insert(
            ident.model_name.clone(),
            WidgetEntry {
                ident,
                factory: Box::new(factory),
            },
        );
        Ok(())
    }

    /// Look up the widget registered under a model name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownModel`] if nothing is registered.
    pub fn resolve(&self, model_name: &str) -> Result<&WidgetEntry, RegistryError> {
        self.entries
            .get(model_name)
            .ok_or_else(|| RegistryError::UnknownModel(model_name.to_string()))
    }

    /// Resolve a model name and construct a view for the given model.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownModel`] if nothing is registered.
    pub fn instantiate(
        &self,
        model_name: &str,
        model: &LabelModel,
    ) -> Result<LabelView, RegistryError> {
        Ok(self.resolve(model_name)?.instantiate(model))
    }

    /// Number of registered widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Register the built-in label widget under [`WidgetIdent::label`].
///
/// The one registration call a hosting application makes at startup.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if the label widget was already
/// registered.
pub fn register_label(registry: &mut WidgetRegistry) -> Result<(), RegistryError> {
    registry.register(WidgetIdent::label(), |model| LabelView::new(model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_resolve() {
        let mut registry = WidgetRegistry::new();
        register_label(&mut registry).unwrap();

        let entry = registry.resolve("LabelModel").unwrap();
        assert_eq!(entry.ident().view_name, "LabelView");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut registry = WidgetRegistry::new();
        register_label(&mut registry).unwrap();

        let err = register_label(&mut registry).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("LabelModel".to_string()));
    }

    #[test]
    fn unknown_model_rejected() {
        let registry = WidgetRegistry::new();
        let err = registry.resolve("Nope").unwrap_err();
        assert_eq!(err, RegistryError::UnknownModel("Nope".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn instantiate_builds_working_view() {
        let mut registry = WidgetRegistry::new();
        register_label(&mut registry).unwrap();

        let model = LabelModel::new();
        let mut view = registry.instantiate("LabelModel", &model).unwrap();
        view.mount();
        assert_eq!(view.text(), "Hello World");

        model.set_value("resolved");
        assert_eq!(view.text(), "resolved");
    }

    #[test]
    fn custom_factory_controls_surface() {
        use crate::surface::TextSurface;

        let mut registry = WidgetRegistry::new();
        registry
            .register(
                WidgetIdent::new("NarrowLabel", "LabelView", "labelkit", "0.1.0"),
                |model| LabelView::with_surface(model, TextSurface::bounded(3)),
            )
            .unwrap();

        let model = LabelModel::new();
        let mut view = registry.instantiate("NarrowLabel", &model).unwrap();
        view.mount();
        assert_eq!(view.text(), "Hel");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            RegistryError::UnknownModel("X".to_string()).to_string(),
            "no widget registered for model 'X'"
        );
        assert_eq!(
            RegistryError::Duplicate("X".to_string()).to_string(),
            "model 'X' already registered"
        );
    }
}

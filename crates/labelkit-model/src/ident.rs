#![forbid(unsafe_code)]

//! Widget identity metadata.
//!
//! A host runtime that stores widget state needs to know which view
//! implementation belongs to which model. [`WidgetIdent`] carries the
//! name/module/version constants used for that pairing. The fields are
//! opaque to this crate; only the registry interprets them.

/// Identity constants pairing a model with its view implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WidgetIdent {
    /// Model class name, e.g. `LabelModel`.
    pub model_name: String,
    /// View class name, e.g. `LabelView`.
    pub view_name: String,
    /// Module (package) both classes ship in.
    pub module: String,
    /// Version of the module providing the model.
    pub model_module_version: String,
    /// Version of the module providing the view.
    pub view_module_version: String,
}

impl WidgetIdent {
    /// Build an ident where model and view ship in the same module version.
    #[must_use]
    pub fn new(
        model_name: impl Into<String>,
        view_name: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let version = version.into();
        Self {
            model_name: model_name.into(),
            view_name: view_name.into(),
            module: module.into(),
            model_module_version: version.clone(),
            view_module_version: version,
        }
    }

    /// The ident of the built-in label widget.
    #[must_use]
    pub fn label() -> Self {
        Self::new(
            "LabelModel",
            "LabelView",
            "labelkit",
            env!("CARGO_PKG_VERSION"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_ident_names() {
        let ident = WidgetIdent::label();
        assert_eq!(ident.model_name, "LabelModel");
        assert_eq!(ident.view_name, "LabelView");
        assert_eq!(ident.module, "labelkit");
    }

    #[test]
    fn new_shares_version_across_model_and_view() {
        let ident = WidgetIdent::new("M", "V", "mod", "1.2.3");
        assert_eq!(ident.model_module_version, "1.2.3");
        assert_eq!(ident.view_module_version, "1.2.3");
    }

    #[test]
    fn idents_compare_by_value() {
        assert_eq!(WidgetIdent::label(), WidgetIdent::label());
        assert_ne!(
            WidgetIdent::label(),
            WidgetIdent::new("Other", "OtherView", "labelkit", "0.0.1")
        );
    }
}

#![forbid(unsafe_code)]

//! Label view, text surface, and widget registry for labelkit.
//!
//! # Role in labelkit
//! This crate renders a [`labelkit_model::LabelModel`] as plain text and
//! keeps the display synchronized with the model. It also carries the
//! [`registry::WidgetRegistry`] a hosting application fills at startup to
//! resolve views for models by name.
//!
//! # How it fits in the system
//! The host creates a model (possibly from captured state), resolves a view
//! through the registry, and calls [`label::LabelView::mount`]. From then on
//! every change to the model's value is written into the view's surface
//! before the mutating call returns.

pub mod label;
pub mod registry;
pub mod surface;

pub use label::LabelView;
pub use registry::{RegistryError, WidgetRegistry, register_label};
pub use surface::TextSurface;

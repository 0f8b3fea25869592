#![forbid(unsafe_code)]

//! Observable model layer for labelkit.
//!
//! # Role in labelkit
//! `labelkit-model` owns the shared, observable state behind a label widget.
//! A [`LabelModel`] holds one string attribute (`value`) and notifies
//! subscribers synchronously when it changes. Views in `labelkit-widgets`
//! hold a cloned handle to the model and keep their display in sync through
//! the subscription mechanism.
//!
//! # Primary responsibilities
//! - **LabelModel**: shared string attribute with change detection and a
//!   version counter.
//! - **Subscription**: RAII disposer for change callbacks.
//! - **WidgetIdent**: the name/module/version constants a host registry uses
//!   to pair a model with its view implementation.
//! - **LabelState** (feature `state-persistence`): serde snapshots that only
//!   record values differing from the defaults.

pub mod ident;
pub mod model;

#[cfg(feature = "state-persistence")]
pub mod state;

pub use ident::WidgetIdent;
pub use model::{DEFAULT_VALUE, LabelModel, Subscription};

#[cfg(feature = "state-persistence")]
pub use state::LabelState;

#![forbid(unsafe_code)]

//! Minimal hosting application: register the label widget at startup,
//! resolve a view for a model, and watch it track value changes.
//!
//! Run with: `cargo run -p labelkit-widgets --example hello_label`

use labelkit_model::LabelModel;
use labelkit_widgets::registry::{WidgetRegistry, register_label};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The single registration call made at startup.
    let mut registry = WidgetRegistry::new();
    register_label(&mut registry)?;

    let model = LabelModel::new();
    let mut view = registry.instantiate("LabelModel", &model)?;

    view.mount();
    println!("{}", view.text());

    model.set_value("Goodbye");
    println!("{}", view.text());

    Ok(())
}

#![forbid(unsafe_code)]

//! Label view: renders a model's value as text and keeps it current.
//!
//! A [`LabelView`] has two states, unmounted and mounted, with no
//! transition back. [`mount`](LabelView::mount) writes the model's current
//! value into the surface and subscribes the same write as the change
//! handler, so after any mutation of the model the surface is already
//! updated by the time the mutating call returns. Dropping the view drops
//! its subscription.

use std::cell::RefCell;
use std::rc::Rc;

use labelkit_model::{LabelModel, Subscription};

use crate::surface::TextSurface;

/// A text view over a [`LabelModel`].
///
/// The view holds a cloned handle to the shared model (non-owning) and owns
/// its output [`TextSurface`]. Several views may be mounted on one model;
/// each keeps its own surface in sync.
#[derive(Debug)]
pub struct LabelView {
    model: LabelModel,
    surface: Rc<RefCell<TextSurface>>,
    subscription: Option<Subscription>,
}

impl LabelView {
    /// Create an unmounted view with an unbounded surface.
    ///
    /// The surface displays nothing until [`mount`](Self::mount) runs.
    #[must_use]
    pub fn new(model: &LabelModel) -> Self {
        Self::with_surface(model, TextSurface::unbounded())
    }

    /// Create an unmounted view with an explicit surface, e.g. a bounded
    /// one.
    #[must_use]
    pub fn with_surface(model: &LabelModel, surface: TextSurface) -> Self {
        Self {
            model: model.clone(),
            surface: Rc::new(RefCell::new(surface)),
            subscription: None,
        }
    }

    /// Whether [`mount`](Self::mount) has run.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Render the current value into the surface, then subscribe the same
    /// write as the change handler. A second call on a mounted view is a
    /// no-op.
    pub fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("view_mount", view = "LabelView").entered();

        self.refresh();

        let surface = Rc::clone(&self.surface);
        self.subscription = Some(self.model.subscribe(move |value| {
            surface.borrow_mut().set_text(value);
        }));
    }

    /// Copy the model's current value into the surface. Idempotent; safe to
    /// call redundantly, mounted or not.
    pub fn refresh(&self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(view = "LabelView", "view_refresh");

        let mut surface = self.surface.borrow_mut();
        self.model.with(|value| surface.set_text(value));
    }

    /// The text currently displayed.
    #[must_use]
    pub fn text(&self) -> String {
        self.surface.borrow().text().to_string()
    }

    /// The model this view displays.
    #[must_use]
    pub fn model(&self) -> &LabelModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelkit_model::DEFAULT_VALUE;

    #[test]
    fn unmounted_view_displays_nothing() {
        let model = LabelModel::new();
        let view = LabelView::new(&model);
        assert!(!view.is_mounted());
        assert_eq!(view.text(), "");
    }

    #[test]
    fn mount_renders_current_value() {
        let model = LabelModel::new();
        let mut view = LabelView::new(&model);
        view.mount();
        assert!(view.is_mounted());
        assert_eq!(view.text(), DEFAULT_VALUE);
    }

    #[test]
    fn mounted_view_tracks_changes() {
        let model = LabelModel::new();
        let mut view = LabelView::new(&model);
        view.mount();

        model.set_value("Goodbye");
        assert_eq!(view.text(), "Goodbye");
    }

    #[test]
    fn mount_twice_is_noop() {
        let model = LabelModel::new();
        let mut view = LabelView::new(&model);
        view.mount();
        view.mount();
        assert_eq!(model.subscriber_count(), 1);

        model.set_value("once");
        assert_eq!(view.text(), "once");
    }

    #[test]
    fn refresh_is_idempotent() {
        let model = LabelModel::with_value("steady");
        let mut view = LabelView::new(&model);
        view.mount();

        view.refresh();
        let once = view.text();
        view.refresh();
        assert_eq!(view.text(), once);
        assert_eq!(once, "steady");
    }

    #[test]
    fn refresh_works_unmounted() {
        let model = LabelModel::with_value("manual");
        let view = LabelView::new(&model);
        view.refresh();
        assert_eq!(view.text(), "manual");

        // Without a subscription, later changes are not tracked.
        model.set_value("later");
        assert_eq!(view.text(), "manual");
    }

    #[test]
    fn drop_view_unsubscribes() {
        let model = LabelModel::new();
        let mut view = LabelView::new(&model);
        view.mount();
        assert_eq!(model.subscriber_count(), 1);

        drop(view);
        model.set_value("after drop");
        // The dead entry was pruned during notify.
        assert_eq!(model.subscriber_count(), 0);
    }

    #[test]
    fn bounded_surface_clips_updates() {
        let model = LabelModel::new();
        let mut view = LabelView::with_surface(&model, TextSurface::bounded(5));
        view.mount();
        assert_eq!(view.text(), "Hello");

        model.set_value("Goodbye");
        assert_eq!(view.text(), "Goodb");
    }

    #[test]
    fn two_views_one_model() {
        let model = LabelModel::new();
        let mut a = LabelView::new(&model);
        let mut b = LabelView::new(&model);
        a.mount();
        b.mount();

        model.set_value("both");
        assert_eq!(a.text(), "both");
        assert_eq!(b.text(), "both");
    }
}

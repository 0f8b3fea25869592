#![forbid(unsafe_code)]

//! Owned plain-text output element.
//!
//! A [`TextSurface`] is the display target a view writes into, the moral
//! equivalent of a DOM element's text content. It is plain text only: no
//! styling, no spans. A surface may carry a column budget; text written to a
//! bounded surface is clipped at grapheme-cluster boundaries by display
//! width, so a wide cluster that would straddle the budget is dropped rather
//! than split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single plain-text display element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
    max_columns: Option<u16>,
}

impl TextSurface {
    /// Surface with no column budget; text is stored verbatim.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Surface clipped to at most `max_columns` display columns.
    #[must_use]
    pub fn bounded(max_columns: u16) -> Self {
        Self {
            text: String::new(),
            max_columns: Some(max_columns),
        }
    }

    /// Replace the displayed text. On a bounded surface the input is
    /// clipped; zero-width clusters (including control characters) carry no
    /// columns and are dropped when clipping.
    pub fn set_text(&mut self, text: &str) {
        self.text = match self.max_columns {
            Some(max) => clip_to_columns(text, max),
            None => text.to_string(),
        };
    }

    /// The currently displayed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The column budget, if any.
    #[must_use]
    pub fn max_columns(&self) -> Option<u16> {
        self.max_columns
    }
}

/// Clip `text` to `max` display columns at grapheme boundaries.
fn clip_to_columns(text: &str, max: u16) -> String {
    let max = max as usize;
    let mut out = String::new();
    let mut cols = 0usize;

    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if w == 0 {
            continue;
        }
        if cols + w > max {
            break;
        }
        out.push_str(grapheme);
        cols += w;
    }

    out
}

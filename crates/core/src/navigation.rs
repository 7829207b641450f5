//! Slide navigation: clamped index, progress, dots and the slide menu.

use tracing::debug;

use crate::model::{Activation, DeckOutline, Slide, SlideKind};

/// Result of a navigation request.
///
/// Produced for every request, including ones clamped back onto the current
/// slide, so activation hooks run again just like a fresh visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub kind: SlideKind,
    pub activation: Activation,
}

impl SlideChange {
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the outline and the current slide position.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    outline: DeckOutline,
    current: usize,
    menu_open: bool,
}

impl Navigator {
    /// Create a navigator positioned at `start` (clamped into the outline).
    #[must_use]
    pub fn new(outline: DeckOutline, start: usize) -> Self {
        let current = start.min(outline.len() - 1);
        Self {
            outline,
            current,
            menu_open: false,
        }
    }

    #[must_use]
    pub fn outline(&self) -> &DeckOutline {
        &self.outline
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.outline.slides()[self.current]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len()
    }

    /// Move to `target`, clamped into `[0, len - 1]`.
    pub fn go_to(&mut self, target: isize) -> SlideChange {
        let last = self.len() - 1;
        let to = usize::try_from(target.max(0)).unwrap_or(0).min(last);
        let from = self.current;
        self.current = to;
        let kind = self.current_slide().kind();
        debug!(from, to, ?kind, "slide change");
        SlideChange {
            from,
            to,
            kind,
            activation: kind.activation(),
        }
    }

    /// Re-activate the current slide, as on first load.
    pub fn activate_current(&mut self) -> SlideChange {
        self.go_to(self.current_as_isize())
    }

    pub fn next(&mut self) -> SlideChange {
        self.go_to(self.current_as_isize() + 1)
    }

    pub fn previous(&mut self) -> SlideChange {
        self.go_to(self.current_as_isize() - 1)
    }

    /// Jump to the slide under a click on the progress bar.
    ///
    /// `ratio` is the click offset divided by the bar width. A non-finite ratio
    /// (zero-width bar) keeps the current slide.
    pub fn go_to_ratio(&mut self, ratio: f64) -> SlideChange {
        let target = self.target_for_ratio(ratio);
        self.go_to(isize::try_from(target).unwrap_or(isize::MAX))
    }

    #[must_use]
    pub fn target_for_ratio(&self, ratio: f64) -> usize {
        if !ratio.is_finite() {
            return self.current;
        }
        let last = self.len() - 1;
        #[allow(clippy::cast_precision_loss)]
        let scaled = (ratio * last as f64).round();
        if scaled <= 0.0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let target = scaled as usize;
        target.min(last)
    }

    /// `"3 / 14"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len())
    }

    /// Width of the progress bar, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let percent = (self.current + 1) as f64 / self.len() as f64 * 100.0;
        percent
    }

    /// One entry per slide; only the current one is `true`.
    #[must_use]
    pub fn dots(&self) -> Vec<bool> {
        (0..self.len()).map(|idx| idx == self.current).collect()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Jump to a menu entry and close the menu.
    pub fn choose_menu_item(&mut self, index: usize) -> SlideChange {
        let change = self.go_to(isize::try_from(index).unwrap_or(isize::MAX));
        self.menu_open = false;
        change
    }

    fn current_as_isize(&self) -> isize {
        isize::try_from(self.current).unwrap_or(isize::MAX)
    }
}

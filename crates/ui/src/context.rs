use std::sync::Arc;
use std::time::Duration;

use memory_core::model::{DeckOutline, PresenterSettings};
use memory_core::timer::scaled;

pub trait UiApp: Send + Sync {
    fn outline(&self) -> DeckOutline;
    fn settings(&self) -> PresenterSettings;
}

#[derive(Clone)]
pub struct AppContext {
    outline: Arc<DeckOutline>,
    settings: Arc<PresenterSettings>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            outline: Arc::new(app.outline()),
            settings: Arc::new(app.settings()),
        }
    }

    #[must_use]
    pub fn outline(&self) -> &DeckOutline {
        &self.outline
    }

    /// Zero-based slide shown when the deck opens on `/`.
    #[must_use]
    pub fn start_slide(&self) -> usize {
        self.settings.start_slide()
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        self.settings.window_title()
    }

    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.settings.time_scale()
    }

    /// A nominal timer duration adjusted by the presenter's time scale.
    #[must_use]
    pub fn scaled(&self, duration: Duration) -> Duration {
        scaled(duration, self.settings.time_scale())
    }
}

// Provided by the composition root (`crates/app`) or a test harness.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

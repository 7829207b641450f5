use thiserror::Error;

pub const DEFAULT_WINDOW_TITLE: &str = "Memory & Learning";
pub const MIN_TIME_SCALE: f32 = 0.1;
pub const MAX_TIME_SCALE: f32 = 10.0;

/// Presenter-facing knobs, fixed for the lifetime of the window.
#[derive(Clone, Debug, PartialEq)]
pub struct PresenterSettings {
    start_slide: usize,
    window_title: String,
    time_scale: f32,
}

/// Unvalidated settings as collected from flags and environment.
///
/// `start_slide` is 1-based, the way presenters count slides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresenterSettingsDraft {
    pub start_slide: Option<usize>,
    pub window_title: Option<String>,
    pub time_scale: Option<f32>,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("start slide must be between 1 and {slide_count}, got {requested}")]
    StartSlideOutOfRange { requested: usize, slide_count: usize },

    #[error("time scale must be between 0.1 and 10, got {value}")]
    InvalidTimeScale { value: f32 },
}

impl PresenterSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft against a deck of `slide_count` slides.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the start slide is outside the deck or the time
    /// scale is not a finite value in range.
    pub fn validate(self, slide_count: usize) -> Result<PresenterSettings, SettingsError> {
        let requested = self.start_slide.unwrap_or(1);
        if requested == 0 || requested > slide_count {
            return Err(SettingsError::StartSlideOutOfRange {
                requested,
                slide_count,
            });
        }

        let time_scale = self.time_scale.unwrap_or(1.0);
        if !time_scale.is_finite() || !(MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&time_scale) {
            return Err(SettingsError::InvalidTimeScale { value: time_scale });
        }

        let window_title = normalize_optional(self.window_title)
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string());

        Ok(PresenterSettings {
            start_slide: requested - 1,
            window_title,
            time_scale,
        })
    }
}

impl PresenterSettings {
    /// Zero-based index of the slide shown on launch.
    #[must_use]
    pub fn start_slide(&self) -> usize {
        self.start_slide
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// Multiplier applied to every timer duration.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            start_slide: 0,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            time_scale: 1.0,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_uses_defaults() {
        let settings = PresenterSettingsDraft::new().validate(14).unwrap();
        assert_eq!(settings, PresenterSettings::default());
    }

    #[test]
    fn start_slide_is_one_based() {
        let draft = PresenterSettingsDraft {
            start_slide: Some(9),
            ..PresenterSettingsDraft::default()
        };
        assert_eq!(draft.validate(14).unwrap().start_slide(), 8);
    }

    #[test]
    fn start_slide_outside_deck_is_rejected() {
        for requested in [0, 15] {
            let draft = PresenterSettingsDraft {
                start_slide: Some(requested),
                ..PresenterSettingsDraft::default()
            };
            assert_eq!(
                draft.validate(14),
                Err(SettingsError::StartSlideOutOfRange {
                    requested,
                    slide_count: 14
                })
            );
        }
    }

    #[test]
    fn time_scale_must_be_finite_and_in_range() {
        for scale in [0.0, 11.0, f32::NAN] {
            let draft = PresenterSettingsDraft {
                time_scale: Some(scale),
                ..PresenterSettingsDraft::default()
            };
            assert!(matches!(
                draft.validate(14),
                Err(SettingsError::InvalidTimeScale { .. })
            ));
        }
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let draft = PresenterSettingsDraft {
            window_title: Some("   ".to_string()),
            ..PresenterSettingsDraft::default()
        };
        assert_eq!(draft.validate(3).unwrap().window_title(), DEFAULT_WINDOW_TITLE);

        let draft = PresenterSettingsDraft {
            window_title: Some("  Brain Week ".to_string()),
            ..PresenterSettingsDraft::default()
        };
        assert_eq!(draft.validate(3).unwrap().window_title(), "Brain Week");
    }
}

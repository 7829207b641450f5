mod outline;
mod settings;
mod slide;

pub use outline::{DeckOutline, OutlineError};
pub use settings::{
    DEFAULT_WINDOW_TITLE, MAX_TIME_SCALE, MIN_TIME_SCALE, PresenterSettings,
    PresenterSettingsDraft, SettingsError,
};
pub use slide::{Activation, Slide, SlideKind};
